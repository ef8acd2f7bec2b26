//! UI Components
//!
//! Reusable Leptos components.

mod error_banner;
mod modal_root;
mod project_grid;
mod repo_card;
mod repo_feed;
mod site_footer;
mod site_header;
mod theme_toggle;

pub use error_banner::ErrorBanner;
pub use modal_root::ModalRoot;
pub use project_grid::ProjectGrid;
pub use repo_card::RepoCard;
pub use repo_feed::RepoFeed;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
pub use theme_toggle::ThemeToggle;

/// Enter or Space, the keys that activate a card
pub(crate) fn is_activation_key(ev: &web_sys::KeyboardEvent) -> bool {
    matches!(ev.key().as_str(), "Enter" | " " | "Spacebar")
}
