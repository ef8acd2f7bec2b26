//! Theme Toggle Button

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_app_context().theme;

    let label = move || match theme.current.get() {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-label=label
            title=label
            aria-pressed=move || (theme.current.get() == Theme::Dark).to_string()
            on:click=move |_| theme.toggle()
        >
            {move || match theme.current.get() {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            }}
        </button>
    }
}
