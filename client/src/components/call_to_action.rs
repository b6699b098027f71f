//! Primary "Courses" button.

use leptos::prelude::*;

pub const COURSES_HREF: &str = "/courses";

#[component]
pub fn CallToAction(#[prop(optional)] full_width: bool) -> impl IntoView {
    let class = if full_width { "btn btn--primary btn--full call-to-action" } else { "btn btn--primary call-to-action" };
    view! {
        <a href=COURSES_HREF class=class>
            "Courses"
        </a>
    }
}
