//! Wire DTOs for the session provider, lesson catalog, and progress APIs.
//!
//! DESIGN
//! ======
//! These mirror the JSON bodies exactly; conversion into UI state happens in
//! `state::*` so rendering code never sees wire quirks such as `null` fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/auth/session`. Anonymous visitors receive `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<SessionResponseUser>,
    /// Session expiry as an ISO-8601 string.
    #[serde(default)]
    pub expires: Option<String>,
}

/// User block of a session response; the provider may send `null` for any field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponseUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Chapter entry in the lesson catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub title: String,
}

/// Body of `GET /api/courses/{course_id}/lessons/{lesson_id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSummary {
    pub course_id: String,
    pub lesson_id: String,
    pub github_url: String,
    #[serde(default)]
    pub chapters: Vec<ChapterSummary>,
}

/// Lesson entry nested in a course listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonOutline {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<ChapterSummary>,
}

/// Element of `GET /api/courses`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub github_url: String,
    #[serde(default)]
    pub lessons: Vec<LessonOutline>,
}

/// Learner progress for one chapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Attempted,
    Completed,
}

/// One record of the `POST /api/progress` batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub course_id: String,
    pub lesson_id: String,
    pub chapter_id: String,
    pub status: ProgressStatus,
}

impl ProgressUpdate {
    /// Whether both records refer to the same chapter.
    pub fn same_chapter(&self, other: &Self) -> bool {
        self.course_id == other.course_id && self.lesson_id == other.lesson_id && self.chapter_id == other.chapter_id
    }
}
