//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the catalog API and stitches it with Leptos SSR
//! rendering of the navbar pages under a single Axum router. Session
//! endpoints (`/api/auth/*`) and the progress endpoint belong to the session
//! provider deployed alongside this host and are not served here.

pub mod courses;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::state::AppState;

/// Catalog API and health check.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/courses", get(courses::list_courses))
        .route("/api/courses/{course_id}/lessons/{lesson_id}", get(courses::get_lesson))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR pages + static site assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(navbar::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || navbar::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS under /pkg; logo and other assets at the site root.
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
