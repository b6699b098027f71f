//! Login button or signed-in user menu, depending on the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<SessionState>` and `SessionClient` from context. The
//! component never changes the session itself: Login and Logout are handed to
//! the provider, and the new state arrives through the shared signal.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::user_summary::{Avatar, UserSummary};
use crate::net::session::{AuthAction, SessionClient, run_auth_action};
use crate::state::menu::{Dismissal, MenuState};
use crate::state::navbar::Viewport;
use crate::state::session::{AuthView, SessionState, SessionUser};

#[component]
pub fn AuthControl() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth_view = Memo::new(move |_| session.get().auth_view());

    move || match auth_view.get() {
        AuthView::SignedOut => view! { <LoginButton/> }.into_any(),
        AuthView::SignedIn(user) => view! { <SignedInControls user=user/> }.into_any(),
    }
}

#[component]
fn LoginButton() -> impl IntoView {
    let client = expect_context::<SessionClient>();
    view! {
        <button class="btn btn--primary auth-control__login" on:click=move |_| run_auth_action(AuthAction::SignIn, &client)>
            "Login"
        </button>
    }
}

/// Narrow (stacked) and wide (avatar menu) variants, both mounted; CSS picks one.
///
/// The wide menu closes on a second trigger click, Logout, Escape, or any
/// click outside the control.
#[component]
fn SignedInControls(user: SessionUser) -> impl IntoView {
    let client = expect_context::<SessionClient>();
    let menu = RwSignal::new(MenuState::default());
    let stored_user = StoredValue::new(user.clone());

    let on_logout = move |_| {
        menu.update(|m| *m = m.dismissed(Dismissal::Navigation));
        run_auth_action(AuthAction::SignOut, &client);
    };
    let on_trigger = move |_| menu.update(|m| *m = m.toggled());

    #[cfg(feature = "hydrate")]
    {
        let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if let Some(by) = menu.get_untracked().key_dismissal(&ev.key()) {
                menu.set(menu.get_untracked().dismissed(by));
            }
        });
        // Clicks inside the control stop propagating, so anything reaching the window is outside.
        let click_handle = window_event_listener(leptos::ev::click, move |_| {
            if menu.get_untracked().is_open() {
                menu.update(|m| *m = m.dismissed(Dismissal::OutsideClick));
            }
        });
        on_cleanup(move || {
            key_handle.remove();
            click_handle.remove();
        });
    }

    view! {
        <div class=format!("auth-control auth-control--narrow {}", Viewport::Narrow.visibility_class())>
            <UserSummary user=user.clone()/>
            <button class="btn btn--outline btn--full auth-control__logout" on:click=on_logout>
                "Logout"
            </button>
        </div>
        <div
            class=format!("auth-control auth-control--wide {}", Viewport::Wide.visibility_class())
            on:click=move |ev| ev.stop_propagation()
        >
            <button
                class="auth-control__trigger"
                aria-haspopup="menu"
                aria-expanded=move || menu.get().is_open().to_string()
                on:click=on_trigger
            >
                <Avatar user=user small=true/>
            </button>
            <Show when=move || menu.get().is_open()>
                <div class="auth-control__menu" role="menu">
                    <UserSummary user=stored_user.get_value()/>
                    <hr class="auth-control__separator"/>
                    <button class="auth-control__menu-item" role="menuitem" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </Show>
        </div>
    }
}
