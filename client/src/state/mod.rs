//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `lesson`, `menu`, `navbar`) so
//! components depend on small focused models. Shared instances are provided
//! as `RwSignal<T>` through Leptos context.

pub mod lesson;
pub mod menu;
pub mod navbar;
pub mod session;
