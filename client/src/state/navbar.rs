//! Navbar configuration and the rendering rules derived from it.
//!
//! DESIGN
//! ======
//! Each presentation axis is a small enum (`LayoutMode`, `TrailingAction`,
//! `Viewport`) computed from `NavbarConfig` by plain methods. Components only
//! bind these results to markup, so the rules stay testable without a DOM.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use crate::state::lesson::LessonContext;
use crate::util::feedback::feedback_issue_url;

/// A single navigation entry. `name` doubles as the rendering key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: String,
    pub href: Option<String>,
}

impl NavLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self { name: name.into(), href: Some(href.into()) }
    }

    /// Link target, or `"#"` when none was supplied.
    pub fn href_or_default(&self) -> &str {
        self.href.as_deref().unwrap_or("#")
    }
}

/// Everything a page hands the navbar for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavbarConfig {
    pub nav_links: Vec<NavLink>,
    pub cta: bool,
    pub is_lesson_interface: bool,
    pub lesson_details: Option<LessonContext>,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self { nav_links: Vec::new(), cta: true, is_lesson_interface: false, lesson_details: None }
    }
}

/// Overall navbar styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Static, lighter background, no border.
    Marketing,
    /// Sticky, darker background, bottom border.
    Lesson,
}

impl LayoutMode {
    pub fn class(self) -> &'static str {
        match self {
            Self::Marketing => "navbar navbar--marketing",
            Self::Lesson => "navbar navbar--lesson",
        }
    }
}

/// What sits at the end of the navbar row and at the bottom of the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingAction {
    CallToAction,
    Auth,
}

/// Two-tier breakpoint model. The threshold itself lives in the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    /// Class that hides an element outside this viewport tier.
    pub fn visibility_class(self) -> &'static str {
        match self {
            Self::Narrow => "only-narrow",
            Self::Wide => "only-wide",
        }
    }
}

impl NavbarConfig {
    pub fn layout(&self) -> LayoutMode {
        if self.is_lesson_interface { LayoutMode::Lesson } else { LayoutMode::Marketing }
    }

    /// Lesson details, or the empty placeholder when none were supplied.
    pub fn lesson(&self) -> LessonContext {
        self.lesson_details.clone().unwrap_or_default()
    }

    /// Links for the wide-viewport row. Hidden in lesson mode and when empty.
    pub fn inline_links(&self) -> Option<&[NavLink]> {
        if self.is_lesson_interface || self.nav_links.is_empty() {
            None
        } else {
            Some(&self.nav_links)
        }
    }

    /// Links for the overlay menu body, when there are any.
    pub fn overlay_links(&self) -> Option<&[NavLink]> {
        if self.nav_links.is_empty() { None } else { Some(&self.nav_links) }
    }

    /// Destination of the "Submit Feedback" link; only present in lesson mode.
    pub fn feedback_href(&self) -> Option<String> {
        if !self.is_lesson_interface {
            return None;
        }
        let lesson = self.lesson();
        Some(feedback_issue_url(
            &lesson.github_url,
            &lesson.lesson_id,
            &lesson.chapter_id,
            lesson.current_chapter_title(),
        ))
    }

    pub fn trailing_action(&self) -> TrailingAction {
        if self.cta { TrailingAction::CallToAction } else { TrailingAction::Auth }
    }
}

/// Key and target for each rendered link, in input order.
pub fn link_entries(links: &[NavLink]) -> Vec<(String, String)> {
    links
        .iter()
        .map(|link| (link.name.clone(), link.href_or_default().to_owned()))
        .collect()
}
