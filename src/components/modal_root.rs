//! Modal Root Component
//!
//! The single dialog region. Always mounted; hidden while closed.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::modal::{ModalBody, MODAL_CLOSE_ID, MODAL_DIALOG_ID, MODAL_ROOT_ID};

#[component]
pub fn ModalRoot() -> impl IntoView {
    let modal = use_app_context().modal;

    // Escape and the focus trap are handled at document level
    dom_a11y::bind_global_keydown(move |ev| modal.handle_keydown(&ev));

    let is_open = move || modal.view().is_some();
    let title = move || modal.view().map(|v| v.title).unwrap_or_default();
    let dialog_class = move || match modal.view().and_then(|v| v.class_name) {
        Some(extra) => format!("modal-dialog {}", extra),
        None => "modal-dialog".to_string(),
    };

    let body = move || match modal.view().map(|v| v.body) {
        Some(ModalBody::Markup(html)) => view! {
            <div class="modal-content" inner_html=html></div>
        }.into_any(),
        Some(ModalBody::Prompt { message, actions }) => view! {
            <p class="modal-message">{message}</p>
            <div class="modal-actions">
                {actions.into_iter().map(|action| {
                    let kind = action.kind;
                    view! {
                        <button
                            type="button"
                            class=if action.primary { "modal-btn primary" } else { "modal-btn" }
                            on:click=move |_| modal.activate(kind)
                        >
                            {action.label}
                        </button>
                    }
                }).collect_view()}
            </div>
        }.into_any(),
        None => view! { <div></div> }.into_any(),
    };

    view! {
        <div
            id=MODAL_ROOT_ID
            class=move || if is_open() { "modal-overlay open" } else { "modal-overlay" }
            aria-hidden=move || if is_open() { "false" } else { "true" }
            hidden=move || !is_open()
            on:click=move |_| modal.close()
        >
            <div
                id=MODAL_DIALOG_ID
                class=dialog_class
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                tabindex="-1"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h2 id="modal-title" class="modal-title">{title}</h2>
                    <button
                        id=MODAL_CLOSE_ID
                        type="button"
                        class="modal-close"
                        aria-label="Close dialog"
                        on:click=move |_| modal.close()
                    >
                        "×"
                    </button>
                </div>
                <div id="modal-body" class="modal-body">
                    {body}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    const STYLES: &str = include_str!("../../styles.css");

    #[test]
    fn test_hidden_attribute_wins_over_component_display() {
        let rule = STYLES.split("[hidden]").nth(1).and_then(|rest| rest.split('}').next());
        assert!(rule.is_some_and(|r| r.contains("display: none !important")));
    }

    #[test]
    fn test_stylesheet_covers_overlay_and_assistive_classes() {
        for selector in [".modal-overlay {", ".sr-only {", ".skip-link {", ".skip-link:focus {"] {
            assert!(STYLES.contains(selector), "missing {}", selector);
        }
    }
}
