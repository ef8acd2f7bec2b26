//! Site Footer Component
//!
//! Contact links and the "follow system theme" action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::GITHUB_USERNAME;
use crate::context::use_app_context;
use crate::modal::{AlertOptions, ConfirmOptions};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let ctx = use_app_context();

    let reset_theme = move |_| {
        spawn_local(async move {
            if !ctx.theme.has_explicit_preference() {
                ctx.modal
                    .show_alert(
                        "Theme",
                        "The page already follows your system color scheme.",
                        AlertOptions::default(),
                    )
                    .await;
                return;
            }

            let confirmed = ctx
                .modal
                .show_confirm(
                    "Reset theme",
                    "Forget your theme choice and follow the system color scheme?",
                    ConfirmOptions {
                        confirm_text: Some("Reset".to_string()),
                        cancel_text: Some("Keep".to_string()),
                    },
                )
                .await;
            if !confirmed {
                return;
            }

            ctx.theme.reset_to_system();
            let message = format!(
                "Now using the {} theme from your system settings.",
                ctx.theme.current.get_untracked()
            );
            ctx.modal
                .show_alert("Theme reset", message, AlertOptions::default())
                .await;
        });
    };

    view! {
        <footer id="contact" class="site-footer">
            <h2 class="section-title">"Contact"</h2>
            <p class="contact-links">
                <a
                    href=format!("https://github.com/{}", GITHUB_USERNAME)
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "GitHub"
                </a>
            </p>
            <button type="button" class="link-btn" on:click=reset_theme>
                "Use system theme"
            </button>
        </footer>
    }
}
