//! Ordered list of navigation links.

use leptos::prelude::*;

use crate::state::navbar::{NavLink, link_entries};

/// One anchor per entry, in input order, keyed by link name.
///
/// `on_navigate` fires after a link is activated; the overlay uses it to close.
#[component]
pub fn LinkList(nav_links: Vec<NavLink>, #[prop(optional)] on_navigate: Option<Callback<()>>) -> impl IntoView {
    let entries = link_entries(&nav_links);

    view! {
        <For
            each=move || entries.clone()
            key=|(name, _)| name.clone()
            children=move |(name, href)| {
                view! {
                    <a
                        class="nav-link"
                        href=href
                        on:click=move |_| {
                            if let Some(cb) = on_navigate {
                                cb.run(());
                            }
                        }
                    >
                        {name}
                    </a>
                }
            }
        />
    }
}
