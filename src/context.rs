//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::modal::ModalController;
use crate::theme::ThemeHandle;

/// Generic text shown for uncaught failures
pub const GENERIC_ERROR_NOTICE: &str = "Something went wrong. Some parts of the page may not work as expected.";

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub modal: ModalController,
    pub theme: ThemeHandle,
    /// Page-level error notice - read
    pub notice: ReadSignal<Option<String>>,
    /// Page-level error notice - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        modal: ModalController,
        theme: ThemeHandle,
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            modal,
            theme,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Show the generic error notice and announce it
    pub fn report_error(&self, detail: &str) {
        log::error!("[APP] Uncaught: {}", detail);
        let history = console_logger::recent();
        if !history.is_empty() {
            log::debug!("[APP] Recent log lines:\n{}", history.join("\n"));
        }
        self.set_notice.set(Some(GENERIC_ERROR_NOTICE.to_string()));
        dom_a11y::announce(GENERIC_ERROR_NOTICE);
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
