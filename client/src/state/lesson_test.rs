use super::*;
use crate::net::types::ChapterSummary;

fn lesson(chapter_id: &str) -> LessonContext {
    LessonContext {
        course_id: "rust-state-machine".to_owned(),
        lesson_id: "2".to_owned(),
        chapter_id: chapter_id.to_owned(),
        chapters: ["A", "B", "C"].iter().map(|t| Chapter { title: (*t).to_owned() }).collect(),
        github_url: "https://x/y".to_owned(),
    }
}

#[test]
fn default_context_is_empty() {
    let ctx = LessonContext::default();
    assert!(ctx.course_id.is_empty());
    assert!(ctx.chapters.is_empty());
    assert_eq!(ctx.current_chapter_title(), None);
}

#[test]
fn chapter_id_is_one_based() {
    assert_eq!(lesson("1").current_chapter_title(), Some("A"));
    assert_eq!(lesson("3").current_chapter_title(), Some("C"));
}

#[test]
fn chapter_id_with_surrounding_whitespace_resolves() {
    assert_eq!(lesson(" 2 ").current_chapter_title(), Some("B"));
}

#[test]
fn zero_chapter_id_is_absent() {
    assert_eq!(lesson("0").current_chapter_title(), None);
}

#[test]
fn out_of_range_chapter_id_is_absent() {
    assert_eq!(lesson("4").current_chapter_title(), None);
    assert_eq!(lesson("18446744073709551615").current_chapter_title(), None);
}

#[test]
fn non_numeric_chapter_id_is_absent() {
    assert_eq!(lesson("").current_chapter_title(), None);
    assert_eq!(lesson("intro").current_chapter_title(), None);
    assert_eq!(lesson("-1").current_chapter_title(), None);
    assert_eq!(lesson("1.5").current_chapter_title(), None);
}

#[test]
fn every_in_range_position_maps_to_its_title() {
    let ctx = lesson("");
    for (i, chapter) in ctx.chapters.iter().enumerate() {
        let probe = LessonContext { chapter_id: (i + 1).to_string(), ..ctx.clone() };
        assert_eq!(probe.current_chapter_title(), Some(chapter.title.as_str()));
    }
}

#[test]
fn from_summary_keeps_route_chapter_id() {
    let summary = LessonSummary {
        course_id: "c1".to_owned(),
        lesson_id: "l1".to_owned(),
        github_url: "https://github.com/org/repo".to_owned(),
        chapters: vec![ChapterSummary { title: "Setup".to_owned() }],
    };
    let ctx = LessonContext::from_summary("1", summary);
    assert_eq!(ctx.course_id, "c1");
    assert_eq!(ctx.lesson_id, "l1");
    assert_eq!(ctx.chapter_id, "1");
    assert_eq!(ctx.github_url, "https://github.com/org/repo");
    assert_eq!(ctx.current_chapter_title(), Some("Setup"));
}
