//! Background sync of learner progress recorded while offline or signed out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lesson pages queue `ProgressUpdate`s in localStorage. The navbar installs
//! `use_pending_updates`, which flushes the queue to `/api/progress` whenever
//! the shared session signal reports an authenticated user. Nothing is
//! returned to the caller; failures leave the queue in place for next time.

#[cfg(test)]
#[path = "pending_updates_test.rs"]
mod pending_updates_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::ProgressUpdate;
use crate::state::session::SessionState;
use crate::util::storage;

pub const PENDING_UPDATES_KEY: &str = "dcs_pending_updates";

/// Progress records waiting to be submitted, at most one per chapter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingQueue {
    updates: Vec<ProgressUpdate>,
}

impl PendingQueue {
    /// Add or merge a record. A chapter's status never moves backwards.
    pub fn push(&mut self, update: ProgressUpdate) {
        match self.updates.iter_mut().find(|u| u.same_chapter(&update)) {
            Some(existing) => existing.status = existing.status.max(update.status),
            None => self.updates.push(update),
        }
    }

    /// Records still pending after `sent` was accepted by the server.
    ///
    /// Entries changed since the batch was taken are kept.
    #[must_use]
    pub fn without(&self, sent: &Self) -> Self {
        Self {
            updates: self
                .updates
                .iter()
                .filter(|u| !sent.updates.contains(u))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn as_slice(&self) -> &[ProgressUpdate] {
        &self.updates
    }
}

/// Queue a progress record for the next authenticated sync.
pub fn record_progress(update: ProgressUpdate) {
    let mut queue = storage::load_json::<PendingQueue>(PENDING_UPDATES_KEY).unwrap_or_default();
    queue.push(update);
    storage::save_json(PENDING_UPDATES_KEY, &queue);
}

/// Install the background flush. Expects `RwSignal<SessionState>` in context.
pub fn use_pending_updates() {
    let session = expect_context::<RwSignal<SessionState>>();
    Effect::new(move || {
        if session.get().is_authenticated() {
            flush_pending();
        }
    });
}

fn flush_pending() {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(batch) = storage::load_json::<PendingQueue>(PENDING_UPDATES_KEY) else {
            return;
        };
        if batch.is_empty() {
            return;
        }
        match crate::net::api::submit_progress(batch.as_slice()).await {
            Ok(()) => {
                let rest = storage::load_json::<PendingQueue>(PENDING_UPDATES_KEY)
                    .unwrap_or_default()
                    .without(&batch);
                if rest.is_empty() {
                    storage::remove(PENDING_UPDATES_KEY);
                } else {
                    storage::save_json(PENDING_UPDATES_KEY, &rest);
                }
                log::debug!("synced {} progress records", batch.len());
            }
            Err(e) => log::warn!("{e}; keeping {} progress records queued", batch.len()),
        }
    });
}
