//! Networking modules for the session provider and course APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `session` wraps the provider behind the
//! `SessionProvider` seam, and `types` defines the wire schema.

pub mod api;
pub mod session;
pub mod types;
