//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaf components (`brand_mark`, `link_list`, `call_to_action`,
//! `user_summary`) are stateless. `auth_control` and `navbar` read shared
//! session state from Leptos context; `overlay_menu` is driven by its parent.

pub mod auth_control;
pub mod brand_mark;
pub mod call_to_action;
pub mod link_list;
pub mod navbar;
pub mod overlay_menu;
pub mod user_summary;
