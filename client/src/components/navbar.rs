//! Top-level navigation bar for marketing and lesson pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages pass links, the call-to-action flag, and (on lesson pages) lesson
//! details. The navbar derives everything else from `NavbarConfig`, owns the
//! overlay `MenuState`, and installs the pending-progress sync.
//!
//! Expects `RwSignal<SessionState>` and `SessionClient` in context and must
//! be mounted inside the router.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_location;

use crate::components::auth_control::AuthControl;
use crate::components::brand_mark::BrandMark;
use crate::components::call_to_action::CallToAction;
use crate::components::link_list::LinkList;
use crate::components::overlay_menu::OverlayMenu;
use crate::state::lesson::LessonContext;
use crate::state::menu::{Dismissal, MenuState};
use crate::state::navbar::{NavLink, NavbarConfig, TrailingAction, Viewport};
use crate::util::pending_updates::use_pending_updates;

#[component]
pub fn Navbar(
    #[prop(optional)] nav_links: Vec<NavLink>,
    #[prop(default = true)] cta: bool,
    #[prop(optional)] is_lesson_interface: bool,
    #[prop(optional, into)] lesson_details: MaybeProp<LessonContext>,
) -> impl IntoView {
    let config = Memo::new(move |_| NavbarConfig {
        nav_links: nav_links.clone(),
        cta,
        is_lesson_interface,
        lesson_details: lesson_details.get(),
    });
    let menu = RwSignal::new(MenuState::default());

    use_pending_updates();

    // Route changes count as navigation away from an open overlay.
    let location = use_location();
    Effect::new(move || {
        location.pathname.track();
        menu.update(|m| *m = m.dismissed(Dismissal::Navigation));
    });

    let on_toggle = move |_| menu.update(|m| *m = m.toggled());
    let on_close = Callback::new(move |by: Dismissal| menu.update(|m| *m = m.dismissed(by)));

    let inline_links = move || {
        config
            .get()
            .inline_links()
            .map(|links| view! { <LinkList nav_links=links.to_vec()/> })
    };
    let feedback = move || config.get().feedback_href().map(|href| view! { <FeedbackLink href=href/> });
    let trailing = move || match config.get().trailing_action() {
        TrailingAction::CallToAction => view! { <CallToAction/> }.into_any(),
        TrailingAction::Auth => view! { <AuthControl/> }.into_any(),
    };

    view! {
        <nav class=move || config.get().layout().class()>
            <BrandMark/>
            <span class="navbar__spacer"></span>
            <div class=format!("navbar__inline {}", Viewport::Wide.visibility_class())>
                {inline_links}
                {feedback}
                {trailing}
            </div>
            <button
                class=format!("navbar__toggle {}", Viewport::Narrow.visibility_class())
                aria-label="Toggle navigation"
                aria-expanded=move || menu.get().is_open().to_string()
                on:click=on_toggle
            >
                "☰"
            </button>
            <OverlayMenu
                state=menu
                on_close=on_close
                config=config
            />
        </nav>
    }
}

/// Feedback issues open in a new tab without access to this window.
pub const FEEDBACK_TARGET: &str = "_blank";
pub const FEEDBACK_REL: &str = "noopener noreferrer";

/// "Submit Feedback" link to the lesson's issue tracker.
#[component]
fn FeedbackLink(href: String) -> impl IntoView {
    view! {
        <a class="btn btn--outline feedback-link" href=href target=FEEDBACK_TARGET rel=FEEDBACK_REL>
            <span class="feedback-link__icon" aria-hidden="true">"✎"</span>
            "Submit Feedback"
        </a>
    }
}
