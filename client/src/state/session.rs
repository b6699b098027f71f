//! Session state mirrored from the external session provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider owns authentication. This model is the local projection that
//! auth-aware components read through context; it is only ever replaced
//! wholesale by `SessionClient` after a provider round-trip.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionResponse;

/// Provider-reported lifecycle of the browser session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No answer from the provider yet.
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Identity fields exposed by the provider. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionUser {
    pub name: Option<String>,
    pub image: Option<String>,
    pub email: Option<String>,
}

/// Current session as last observed from the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<SessionUser>,
}

/// The two rendering branches auth-aware components choose between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthView {
    SignedOut,
    SignedIn(SessionUser),
}

impl SessionState {
    /// Session with no user, as reported after sign-out or a failed fetch.
    pub fn unauthenticated() -> Self {
        Self { status: SessionStatus::Unauthenticated, user: None }
    }

    /// Build state from a `GET /api/auth/session` body.
    ///
    /// The provider answers `{}` for anonymous visitors, so the presence of
    /// `user` is what marks a session as authenticated.
    pub fn from_response(response: SessionResponse) -> Self {
        match response.user {
            Some(user) => Self {
                status: SessionStatus::Authenticated,
                user: Some(SessionUser {
                    name: non_blank(user.name),
                    image: non_blank(user.image),
                    email: non_blank(user.email),
                }),
            },
            None => Self::unauthenticated(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Collapse the provider status into a rendering branch.
    ///
    /// `Loading` renders as signed out until the provider answers.
    pub fn auth_view(&self) -> AuthView {
        match self.status {
            SessionStatus::Authenticated => AuthView::SignedIn(self.user.clone().unwrap_or_default()),
            SessionStatus::Loading | SessionStatus::Unauthenticated => AuthView::SignedOut,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
