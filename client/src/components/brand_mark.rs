//! Logo and wordmark linking back to the home page.

use leptos::prelude::*;

pub const LOGO_SRC: &str = "/logo.svg";
pub const BRAND_NAME: &str = "dotcodeschool";

#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <a href="/" class="brand-mark">
            <img class="brand-mark__logo" src=LOGO_SRC alt=BRAND_NAME height="32"/>
            <span class="brand-mark__label">{BRAND_NAME}</span>
        </a>
    }
}
