#![recursion_limit = "256"]

mod catalog;
mod config;
mod error;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "navbar host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;

    let catalog = Catalog::load(&config.catalog_path)?;
    tracing::info!(
        path = %config.catalog_path.display(),
        courses = catalog.courses().len(),
        "course catalog loaded"
    );

    let state = state::AppState::new(catalog);
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "navbar host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
