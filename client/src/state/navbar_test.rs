use super::*;
use crate::state::lesson::Chapter;

fn links() -> Vec<NavLink> {
    vec![
        NavLink::new("Courses", "/courses"),
        NavLink::new("Community", "https://discord.test"),
        NavLink { name: "Blog".to_owned(), href: None },
    ]
}

fn sample_lesson() -> LessonContext {
    LessonContext {
        course_id: "c".to_owned(),
        lesson_id: "2".to_owned(),
        chapter_id: "3".to_owned(),
        chapters: ["A", "B", "C"].iter().map(|t| Chapter { title: (*t).to_owned() }).collect(),
        github_url: "https://x/y".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn config_defaults_match_marketing_page() {
    let config = NavbarConfig::default();
    assert!(config.nav_links.is_empty());
    assert!(config.cta);
    assert!(!config.is_lesson_interface);
    assert_eq!(config.lesson_details, None);
    assert_eq!(config.layout(), LayoutMode::Marketing);
}

#[test]
fn missing_lesson_details_default_to_placeholder() {
    assert_eq!(NavbarConfig::default().lesson(), LessonContext::default());
}

// =============================================================
// Layout
// =============================================================

#[test]
fn lesson_interface_uses_lesson_layout() {
    let config = NavbarConfig { is_lesson_interface: true, ..NavbarConfig::default() };
    assert_eq!(config.layout(), LayoutMode::Lesson);
    assert_eq!(config.layout().class(), "navbar navbar--lesson");
    assert_eq!(LayoutMode::Marketing.class(), "navbar navbar--marketing");
}

#[test]
fn viewport_classes_are_distinct() {
    assert_eq!(Viewport::Narrow.visibility_class(), "only-narrow");
    assert_eq!(Viewport::Wide.visibility_class(), "only-wide");
}

// =============================================================
// Links
// =============================================================

#[test]
fn inline_links_shown_outside_lesson_mode() {
    let config = NavbarConfig { nav_links: links(), ..NavbarConfig::default() };
    assert_eq!(config.inline_links().map(<[NavLink]>::len), Some(3));
}

#[test]
fn inline_links_hidden_in_lesson_mode() {
    let config = NavbarConfig { nav_links: links(), is_lesson_interface: true, ..NavbarConfig::default() };
    assert_eq!(config.inline_links(), None);
    assert_eq!(config.overlay_links().map(<[NavLink]>::len), Some(3));
}

#[test]
fn empty_links_render_nothing() {
    let config = NavbarConfig::default();
    assert_eq!(config.inline_links(), None);
    assert_eq!(config.overlay_links(), None);
    assert!(link_entries(&config.nav_links).is_empty());
}

#[test]
fn link_entries_preserve_order_and_count() {
    let entries = link_entries(&links());
    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries,
        vec![
            ("Courses".to_owned(), "/courses".to_owned()),
            ("Community".to_owned(), "https://discord.test".to_owned()),
            ("Blog".to_owned(), "#".to_owned()),
        ]
    );
}

// =============================================================
// Trailing action
// =============================================================

#[test]
fn cta_true_selects_call_to_action() {
    assert_eq!(NavbarConfig::default().trailing_action(), TrailingAction::CallToAction);
}

#[test]
fn cta_false_selects_auth_control() {
    let config = NavbarConfig { cta: false, ..NavbarConfig::default() };
    assert_eq!(config.trailing_action(), TrailingAction::Auth);
}

#[test]
fn cta_applies_in_lesson_mode_too() {
    let config = NavbarConfig { is_lesson_interface: true, ..NavbarConfig::default() };
    assert_eq!(config.trailing_action(), TrailingAction::CallToAction);
}

// =============================================================
// Feedback link
// =============================================================

#[test]
fn feedback_href_built_from_lesson_details() {
    let config = NavbarConfig {
        is_lesson_interface: true,
        lesson_details: Some(sample_lesson()),
        ..NavbarConfig::default()
    };
    let href = config.feedback_href().unwrap();
    assert!(href.starts_with("https://x/y/issues/new?"));
    assert!(href.ends_with("title=Dot+Code+School+Suggestion%3A+Feedback+for+Section+2+-+Chapter+3%3A+C"));
}

#[test]
fn feedback_href_absent_outside_lesson_mode() {
    let config = NavbarConfig { lesson_details: Some(sample_lesson()), ..NavbarConfig::default() };
    assert_eq!(config.feedback_href(), None);
}

#[test]
fn feedback_href_tolerates_out_of_range_chapter() {
    let lesson = LessonContext { chapter_id: "12".to_owned(), ..sample_lesson() };
    let config = NavbarConfig { is_lesson_interface: true, lesson_details: Some(lesson), ..NavbarConfig::default() };
    assert!(config.feedback_href().unwrap().ends_with("Chapter+12%3A+"));
}

#[test]
fn feedback_href_tolerates_missing_lesson_details() {
    let config = NavbarConfig { is_lesson_interface: true, ..NavbarConfig::default() };
    let href = config.feedback_href().unwrap();
    assert!(href.starts_with("/issues/new?"));
}
