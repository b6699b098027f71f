use super::*;

#[test]
fn feedback_link_opens_in_isolated_new_tab() {
    assert_eq!(FEEDBACK_TARGET, "_blank");
    assert!(FEEDBACK_REL.split_whitespace().any(|r| r == "noopener"));
}

#[cfg(feature = "ssr")]
#[test]
fn feedback_link_renders_href_and_new_tab_target() {
    let owner = Owner::new();
    owner.set();
    let config = NavbarConfig {
        is_lesson_interface: true,
        lesson_details: Some(LessonContext {
            lesson_id: "2".to_owned(),
            chapter_id: "3".to_owned(),
            chapters: ["A", "B", "C"].map(|t| crate::state::lesson::Chapter { title: t.to_owned() }).to_vec(),
            github_url: "https://x/y".to_owned(),
            ..LessonContext::default()
        }),
        ..NavbarConfig::default()
    };
    let href = config.feedback_href().unwrap();
    let html = view! { <FeedbackLink href=href/> }.to_html();
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.contains("/issues/new?"));
    assert!(html.contains("Section+2+-+Chapter+3%3A+C"));
    assert!(html.contains("Submit Feedback"));
}
