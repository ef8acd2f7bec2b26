//! Project Grid Component
//!
//! Featured projects from the bundled catalog. Cards open a detail
//! dialog; the "View code" link navigates directly.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::analytics;
use crate::catalog;
use crate::components::is_activation_key;
use crate::context::use_app_context;
use crate::modal::{ModalBody, ModalOptions};
use crate::models::Project;

/// A single project card
#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let modal = use_app_context().modal;

    let open_details = move || {
        analytics::track("project_opened", project.id);
        modal.open(
            project.title,
            ModalBody::Markup(catalog::project_detail_markup(project)),
            ModalOptions {
                class_name: Some("project-modal".to_string()),
                on_close: None,
            },
        );
    };

    view! {
        <article
            class="project-card"
            tabindex="0"
            role="button"
            aria-label=format!("View details for {}", project.title)
            on:click=move |_| open_details()
            on:keydown=move |ev: KeyboardEvent| {
                if is_activation_key(&ev) {
                    ev.prevent_default();
                    open_details();
                }
            }
        >
            <img
                class="project-image"
                src=project.image
                alt=project.title
                loading="lazy"
                decoding="async"
            />
            <div class="project-content">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tags">
                    {project.tags.iter().map(|tag| view! { <span class="project-tag">{*tag}</span> }).collect_view()}
                </div>
                <div class="project-actions">
                    <span class="project-more">"View details →"</span>
                    <a
                        class="project-code-link"
                        href=project.url
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                        on:keydown=|ev| ev.stop_propagation()
                    >
                        "View code"
                    </a>
                </div>
            </div>
        </article>
    }
}

/// Cards for every featured project, in catalog order
#[component]
pub fn ProjectGrid() -> impl IntoView {
    log::debug!("[CATALOG] Rendering {} featured projects", catalog::featured_projects().count());

    view! {
        <div id="projects-grid" class="projects-grid">
            {catalog::featured_projects()
                .map(|project| view! { <ProjectCard project=project /> })
                .collect_view()}
        </div>
    }
}
