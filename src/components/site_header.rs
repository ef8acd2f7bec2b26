//! Site Header Component
//!
//! Skip link, in-page navigation with smooth scrolling, theme toggle.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::api;
use crate::components::ThemeToggle;

/// (section id, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("projects", "Projects"),
    ("repositories", "Repositories"),
    ("contact", "Contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <a class="skip-link" href="#main-content">"Skip to content"</a>
        <header class="site-header">
            <a class="site-title" href="#projects">"Portfolio"</a>
            <nav class="site-nav" aria-label="Primary">
                {NAV_LINKS.iter().map(|&(id, label)| {
                    view! {
                        <a
                            class="nav-link"
                            href=format!("#{}", id)
                            on:click=move |ev: MouseEvent| {
                                if api::scroll_to_section(id) {
                                    ev.prevent_default();
                                }
                            }
                        >
                            {label}
                        </a>
                    }
                }).collect_view()}
            </nav>
            <ThemeToggle />
        </header>
    }
}
