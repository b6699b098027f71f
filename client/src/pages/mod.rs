//! Route-level page components that mount the navbar.

pub mod courses;
pub mod home;
pub mod lesson;
