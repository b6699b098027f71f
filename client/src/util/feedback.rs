//! Issue-tracker link for lesson feedback.
//!
//! The query string is consumed by a GitHub issue template, so its shape must
//! stay byte-for-byte stable: only the title varies.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use url::form_urlencoded;

const ISSUE_QUERY: &str = "assignees=&labels=feedback&template=feedback.md";

/// Human-readable issue title for a lesson chapter.
pub fn feedback_title(lesson_id: &str, chapter_id: &str, chapter_title: Option<&str>) -> String {
    format!(
        "Dot Code School Suggestion: Feedback for Section {lesson_id} - Chapter {chapter_id}: {}",
        chapter_title.unwrap_or_default()
    )
}

/// `{github_url}/issues/new?...&title=<form-encoded title>`.
pub fn feedback_issue_url(github_url: &str, lesson_id: &str, chapter_id: &str, chapter_title: Option<&str>) -> String {
    let title = feedback_title(lesson_id, chapter_id, chapter_title);
    let encoded: String = form_urlencoded::byte_serialize(title.as_bytes()).collect();
    format!("{github_url}/issues/new?{ISSUE_QUERY}&title={encoded}")
}
