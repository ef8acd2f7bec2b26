//! Browser Bindings
//!
//! Thin wrappers over `web_sys` for the few window-level APIs the page
//! uses. Missing globals are logged and treated as no-ops.

use chrono::{DateTime, Utc};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::StorageError;
use crate::models::Theme;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Access(format!("{:?}", e))),
    }
}

fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

/// OS-level color scheme preference (light when unknown)
pub fn system_theme() -> Theme {
    match dark_scheme_query() {
        Some(query) if query.matches() => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Call `on_change` whenever the OS color scheme flips
pub fn watch_system_theme<F>(on_change: F)
where
    F: Fn(Theme) + 'static,
{
    let Some(query) = dark_scheme_query() else {
        log::warn!("[THEME] matchMedia unavailable; OS theme changes will not be followed");
        return;
    };
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        on_change(system_theme());
    });
    let _ = query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    listener.forget();
}

/// Open `url` in a new browsing context without opener or referrer
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        log::error!("[APP] Failed to open {}: {:?}", url, e);
    }
}

/// Smoothly scroll the element with `id` into view
pub fn scroll_to_section(id: &str) -> bool {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("[APP] Scroll target #{} not found", id);
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Current wall-clock time from the JS clock
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Route uncaught script errors and unhandled promise rejections to `on_error`
pub fn bind_global_error_handlers<F>(on_error: F)
where
    F: Fn(String) + Clone + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };

    let report = on_error.clone();
    let on_script_error = Closure::<dyn FnMut(ErrorEvent)>::new(move |ev: ErrorEvent| {
        report(format!("{} ({}:{})", ev.message(), ev.filename(), ev.lineno()));
    });
    let _ = window.add_event_listener_with_callback("error", on_script_error.as_ref().unchecked_ref());
    on_script_error.forget();

    let on_rejection = Closure::<dyn FnMut(PromiseRejectionEvent)>::new(move |ev: PromiseRejectionEvent| {
        let reason = ev.reason();
        let detail = reason.as_string().unwrap_or_else(|| format!("{:?}", reason));
        on_error(format!("Unhandled rejection: {}", detail));
    });
    let _ = window.add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref());
    on_rejection.forget();
}
