//! Compact identity display: avatar, display name, email.

#[cfg(test)]
#[path = "user_summary_test.rs"]
mod user_summary_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::session::SessionUser;

/// What the avatar circle shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarContent {
    Image(String),
    Initials(String),
    Placeholder,
}

/// Image when present, otherwise initials from the name, otherwise a placeholder.
pub fn avatar_content(name: Option<&str>, image: Option<&str>) -> AvatarContent {
    if let Some(src) = image.filter(|s| !s.trim().is_empty()) {
        return AvatarContent::Image(src.to_owned());
    }
    name.and_then(initials).map_or(AvatarContent::Placeholder, AvatarContent::Initials)
}

/// First letter of the first and last words, uppercased.
pub fn initials(name: &str) -> Option<String> {
    let mut words = name.split_whitespace();
    let first = words.next()?.chars().next()?;
    let mut out: String = first.to_uppercase().collect();
    if let Some(last) = words.next_back().and_then(|w| w.chars().next()) {
        out.extend(last.to_uppercase());
    }
    Some(out)
}

/// Avatar circle. `small` is used for the collapsed menu trigger.
#[component]
pub fn Avatar(user: SessionUser, #[prop(optional)] small: bool) -> impl IntoView {
    let class = if small { "avatar avatar--sm" } else { "avatar" };
    let alt = user.name.clone().unwrap_or_default();
    let content = match avatar_content(user.name.as_deref(), user.image.as_deref()) {
        AvatarContent::Image(src) => view! { <img class="avatar__image" src=src alt=alt/> }.into_any(),
        AvatarContent::Initials(text) => view! { <span class="avatar__initials">{text}</span> }.into_any(),
        AvatarContent::Placeholder => view! { <span class="avatar__placeholder" aria-hidden="true">"👤"</span> }.into_any(),
    };
    view! { <span class=class>{content}</span> }
}

/// Name and email lines exactly as shown; absent fields become empty text.
pub fn summary_text(user: &SessionUser) -> (String, String) {
    (user.name.clone().unwrap_or_default(), user.email.clone().unwrap_or_default())
}

/// Avatar with name and email beside it. Missing fields render empty.
#[component]
pub fn UserSummary(user: SessionUser) -> impl IntoView {
    let (name, email) = summary_text(&user);
    view! {
        <div class="user-summary">
            <Avatar user=user/>
            <div class="user-summary__text">
                <span class="user-summary__name">{name}</span>
                <span class="user-summary__email">{email}</span>
            </div>
        </div>
    }
}
