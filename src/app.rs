//! Portfolio App
//!
//! Root component: wires the shared handles into context and lays out the page.

use leptos::prelude::*;

use crate::api;
use crate::components::{ErrorBanner, ModalRoot, ProjectGrid, RepoFeed, SiteFooter, SiteHeader};
use crate::context::AppContext;
use crate::modal::ModalController;
use crate::theme::{PageThemeStore, ThemeHandle};

#[component]
pub fn App(theme_store: PageThemeStore) -> impl IntoView {
    let modal = ModalController::new();
    let theme = ThemeHandle::new(theme_store);
    let ctx = AppContext::new(modal, theme, signal(None::<String>));

    // Provide context to all children
    provide_context(ctx);

    api::bind_global_error_handlers(move |detail: String| ctx.report_error(&detail));
    log::info!("[APP] Mounted with {} theme", theme.current.get_untracked());

    view! {
        <ErrorBanner />
        <SiteHeader />
        <main id="main-content" class="site-main" tabindex="-1">
            <section id="projects" class="page-section" aria-labelledby="projects-heading">
                <h2 id="projects-heading" class="section-title">"Featured Projects"</h2>
                <ProjectGrid />
            </section>
            <section id="repositories" class="page-section" aria-labelledby="repositories-heading">
                <h2 id="repositories-heading" class="section-title">"Recent Repositories"</h2>
                <RepoFeed />
            </section>
        </main>
        <SiteFooter />
        <ModalRoot />
    }
}
