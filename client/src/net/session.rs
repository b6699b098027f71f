//! Session-provider seam used by auth-aware components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never mutate `SessionState` themselves. They dispatch an
//! `AuthAction` to a `SessionProvider`; the browser implementation talks to
//! the provider over HTTP and replaces the shared state signal once the
//! provider has answered.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Sign-in / sign-out entry points of the external session provider.
///
/// Both calls are fire-and-forget: the resulting state change is observed on
/// a later read of the shared session signal.
pub trait SessionProvider {
    fn sign_in(&self);
    fn sign_out(&self);
}

/// User-triggered auth action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    SignIn,
    SignOut,
}

/// Forward `action` to `provider`, exactly once.
pub fn run_auth_action<P: SessionProvider + ?Sized>(action: AuthAction, provider: &P) {
    match action {
        AuthAction::SignIn => provider.sign_in(),
        AuthAction::SignOut => provider.sign_out(),
    }
}

/// Browser session provider backed by the `/api/auth/*` endpoints.
///
/// Cheap to copy; provided through context next to the `RwSignal<SessionState>`
/// it writes to.
#[derive(Clone, Copy)]
pub struct SessionClient {
    state: RwSignal<SessionState>,
}

impl SessionClient {
    pub fn new(state: RwSignal<SessionState>) -> Self {
        Self { state }
    }

    /// Re-read the session from the provider and publish it.
    pub fn refresh(&self) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                let next = match super::api::fetch_session().await {
                    Some(body) => SessionState::from_response(body),
                    None => SessionState::unauthenticated(),
                };
                log::debug!("session status: {:?}", next.status);
                state.set(next);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.state;
        }
    }
}

impl SessionProvider for SessionClient {
    fn sign_in(&self) {
        super::api::redirect_to_sign_in();
    }

    fn sign_out(&self) {
        #[cfg(feature = "hydrate")]
        {
            let client = *self;
            leptos::task::spawn_local(async move {
                if let Err(e) = super::api::sign_out().await {
                    log::warn!("sign out failed: {e}");
                }
                client.refresh();
            });
        }
    }
}
