//! Lesson metadata shown by the lesson-interface navbar.

#[cfg(test)]
#[path = "lesson_test.rs"]
mod lesson_test;

use crate::net::types::LessonSummary;

/// One chapter of a lesson. Only the title is read by the navbar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
}

/// Identifiers and chapter list of the lesson currently on screen.
///
/// `Default` is the all-empty placeholder used whenever a page has no lesson
/// details (yet), so rendering code never branches on presence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonContext {
    pub course_id: String,
    pub lesson_id: String,
    /// 1-based chapter position, kept as the raw route segment.
    pub chapter_id: String,
    pub chapters: Vec<Chapter>,
    pub github_url: String,
}

impl LessonContext {
    /// Combine route identifiers with a catalog entry.
    pub fn from_summary(chapter_id: &str, summary: LessonSummary) -> Self {
        Self {
            course_id: summary.course_id,
            lesson_id: summary.lesson_id,
            chapter_id: chapter_id.to_owned(),
            chapters: summary.chapters.into_iter().map(|c| Chapter { title: c.title }).collect(),
            github_url: summary.github_url,
        }
    }

    /// Title of the chapter `chapter_id` points at.
    ///
    /// Returns `None` for non-numeric, zero, or out-of-range ids.
    pub fn current_chapter_title(&self) -> Option<&str> {
        let position = self.chapter_id.trim().parse::<usize>().ok()?;
        let index = position.checked_sub(1)?;
        self.chapters.get(index).map(|c| c.title.as_str())
    }
}
