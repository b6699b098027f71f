//! Full-width top drawer used in place of the inline row on narrow viewports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visibility is owned by the parent navbar. This component only reports
//! dismissals (close button, backdrop click, Escape, link navigation) through
//! `on_close`; it never opens itself. Escape is read from a window listener so
//! it works while focus is still on the toggle that opened the drawer.

#[cfg(all(test, feature = "ssr"))]
#[path = "overlay_menu_test.rs"]
mod overlay_menu_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::auth_control::AuthControl;
use crate::components::brand_mark::BrandMark;
use crate::components::call_to_action::CallToAction;
use crate::components::link_list::LinkList;
use crate::state::menu::{Dismissal, MenuState};
use crate::state::navbar::{NavbarConfig, TrailingAction};

#[component]
pub fn OverlayMenu(
    #[prop(into)] state: Signal<MenuState>,
    on_close: Callback<Dismissal>,
    #[prop(into)] config: Signal<NavbarConfig>,
) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(Dismissal::Backdrop);
    let on_close_click = move |_| on_close.run(Dismissal::CloseButton);
    let on_navigate = Callback::new(move |()| on_close.run(Dismissal::Navigation));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if let Some(by) = state.get_untracked().key_dismissal(&ev.key()) {
                ev.prevent_default();
                on_close.run(by);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let links = move || {
        config
            .get()
            .overlay_links()
            .map(|links| view! { <LinkList nav_links=links.to_vec() on_navigate=on_navigate/> })
    };
    let action = move || match config.get().trailing_action() {
        TrailingAction::CallToAction => view! { <CallToAction full_width=true/> }.into_any(),
        TrailingAction::Auth => view! { <AuthControl/> }.into_any(),
    };

    view! {
        <Show when=move || state.get().is_open()>
            <div class="overlay-menu__backdrop" on:click=on_backdrop>
                <div
                    class="overlay-menu"
                    role="dialog"
                    aria-modal="true"
                    aria-label="Navigation"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <button class="overlay-menu__close" on:click=on_close_click aria-label="Close navigation">
                        "✕"
                    </button>
                    <header class="overlay-menu__header">
                        <BrandMark/>
                    </header>
                    <div class="overlay-menu__body">
                        <nav class="overlay-menu__links">{links}</nav>
                        <div class="overlay-menu__actions">{action}</div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
