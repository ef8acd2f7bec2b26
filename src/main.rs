//! Portfolio Frontend Entry Point

mod analytics;
mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod error;
mod feed;
mod modal;
mod models;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = console_logger::init(level);

    // Apply the theme before the first paint
    let theme_store = theme::initialize_page_theme();

    mount_to_body(move || view! { <App theme_store=theme_store /> });
}
