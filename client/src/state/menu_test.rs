use super::*;

const ALL_DISMISSALS: [Dismissal; 5] = [
    Dismissal::CloseButton,
    Dismissal::Backdrop,
    Dismissal::EscapeKey,
    Dismissal::Navigation,
    Dismissal::OutsideClick,
];

#[test]
fn menu_starts_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let opened = MenuState::Closed.toggled();
    assert_eq!(opened, MenuState::Open);
    assert!(opened.is_open());
    assert_eq!(opened.toggled(), MenuState::Closed);
}

#[test]
fn every_dismissal_closes_from_any_state() {
    for by in ALL_DISMISSALS {
        assert_eq!(MenuState::Open.dismissed(by), MenuState::Closed);
        assert_eq!(MenuState::Closed.dismissed(by), MenuState::Closed);
    }
}

#[test]
fn escape_is_a_dismiss_key() {
    assert!(is_dismiss_key("Escape"));
    assert!(is_dismiss_key("Esc"));
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("escape"));
}

#[test]
fn escape_dismisses_open_menu_from_anywhere() {
    assert_eq!(MenuState::Open.key_dismissal("Escape"), Some(Dismissal::EscapeKey));
    assert_eq!(MenuState::Open.key_dismissal("Esc"), Some(Dismissal::EscapeKey));
}

#[test]
fn keys_are_ignored_while_closed_or_not_escape() {
    assert_eq!(MenuState::Closed.key_dismissal("Escape"), None);
    assert_eq!(MenuState::Open.key_dismissal("Tab"), None);
}

#[test]
fn just_opened_menu_closes_on_escape() {
    let opened = MenuState::Closed.toggled();
    let by = opened.key_dismissal("Escape").unwrap();
    assert_eq!(opened.dismissed(by), MenuState::Closed);
}

#[test]
fn outside_click_closes_open_menu() {
    assert_eq!(MenuState::Open.dismissed(Dismissal::OutsideClick), MenuState::Closed);
}
