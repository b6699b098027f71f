//! Course catalog routes.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::catalog::{Course, LessonSummary};
use crate::state::AppState;

/// `GET /api/courses` — every course with its lessons and chapter titles.
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.catalog.courses().to_vec())
}

/// `GET /api/courses/:course_id/lessons/:lesson_id` — one lesson's navbar metadata.
pub async fn get_lesson(
    State(state): State<AppState>,
    Path((course_id, lesson_id)): Path<(String, String)>,
) -> Result<Json<LessonSummary>, StatusCode> {
    match state.catalog.lesson(&course_id, &lesson_id) {
        Some(lesson) => Ok(Json(lesson)),
        None => {
            tracing::debug!(%course_id, %lesson_id, "lesson not in catalog");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[cfg(test)]
#[path = "courses_test.rs"]
mod tests;
