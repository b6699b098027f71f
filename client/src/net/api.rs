//! REST helpers for the session provider, lesson catalog, and progress API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so provider or
//! catalog failures degrade the navbar without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use url::form_urlencoded;

use super::types::{CourseSummary, LessonSummary, ProgressUpdate, SessionResponse};

pub const SESSION_ENDPOINT: &str = "/api/auth/session";
pub const SIGN_IN_ENDPOINT: &str = "/api/auth/signin";
pub const SIGN_OUT_ENDPOINT: &str = "/api/auth/signout";
pub const CSRF_ENDPOINT: &str = "/api/auth/csrf";
pub const COURSES_ENDPOINT: &str = "/api/courses";
pub const PROGRESS_ENDPOINT: &str = "/api/progress";

/// Provider sign-in page that returns the browser to `callback_url`.
pub fn sign_in_url(callback_url: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("callbackUrl", callback_url)
        .finish();
    format!("{SIGN_IN_ENDPOINT}?{query}")
}

/// Form body for the provider's sign-out POST.
#[cfg(any(test, feature = "hydrate"))]
fn sign_out_body(csrf_token: &str, callback_url: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("csrfToken", csrf_token)
        .append_pair("callbackUrl", callback_url)
        .append_pair("json", "true")
        .finish()
}

#[cfg(any(test, feature = "hydrate"))]
fn lesson_endpoint(course_id: &str, lesson_id: &str) -> String {
    format!("{COURSES_ENDPOINT}/{course_id}/lessons/{lesson_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn progress_failed_message(status: u16) -> String {
    format!("progress sync failed: {status}")
}

/// Fetch the current session from the provider.
/// Returns `None` on transport failure, a non-OK status, or on the server.
pub async fn fetch_session() -> Option<SessionResponse> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            log::warn!("session fetch returned {}", resp.status());
            return None;
        }
        resp.json::<SessionResponse>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Hand the browser to the provider's sign-in flow, returning here afterwards.
pub fn redirect_to_sign_in() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let here = window.location().href().unwrap_or_else(|_| "/".to_owned());
        let _ = window.location().set_href(&sign_in_url(&here));
    }
}

/// End the provider session: fetch a CSRF token, then `POST /api/auth/signout`.
///
/// # Errors
///
/// Returns an error string if either request fails or is rejected.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct CsrfResponse {
            csrf_token: String,
        }

        let csrf: CsrfResponse = gloo_net::http::Request::get(CSRF_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())?;
        let here = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_else(|| "/".to_owned());
        let resp = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(sign_out_body(&csrf.csrf_token, &here))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("sign out failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the course listing from `/api/courses`.
pub async fn fetch_courses() -> Option<Vec<CourseSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(COURSES_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<CourseSummary>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch one lesson's catalog entry.
pub async fn fetch_lesson(course_id: &str, lesson_id: &str) -> Option<LessonSummary> {
    #[cfg(feature = "hydrate")]
    {
        let url = lesson_endpoint(course_id, lesson_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            log::debug!("lesson {course_id}/{lesson_id} not in catalog ({})", resp.status());
            return None;
        }
        resp.json::<LessonSummary>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (course_id, lesson_id);
        None
    }
}

/// Submit a batch of queued progress records via `POST /api/progress`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn submit_progress(updates: &[ProgressUpdate]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PROGRESS_ENDPOINT)
            .json(&updates)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(progress_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = updates;
        Err("not available on server".to_owned())
    }
}
