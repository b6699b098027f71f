//! Marketing landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::navbar::NavLink;

/// Links shown on marketing pages.
pub fn marketing_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Courses", "/courses"),
        NavLink::new("Community", "https://discord.gg/dotcodeschool"),
        NavLink::new("GitHub", "https://github.com/dotcodeschool"),
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar nav_links=marketing_links()/>
        <main class="home-page">
            <h1>"Learn by building"</h1>
            <p>"Hands-on courses that take you from first line to working system."</p>
            <a class="btn btn--primary" href="/courses">"Browse courses"</a>
        </main>
    }
}
