//! Error Banner Component
//!
//! Generic notice for uncaught failures; dismisses itself after a delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::ERROR_BANNER_MS;
use crate::context::use_app_context;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let dismiss_timer = StoredValue::new_local(None::<Timeout>);

    // Each new notice restarts the timer; replacing the old one cancels it
    Effect::new(move |_| {
        if ctx.notice.get().is_some() {
            let timer = Timeout::new(ERROR_BANNER_MS, move || ctx.dismiss_notice());
            dismiss_timer.set_value(Some(timer));
        } else {
            dismiss_timer.set_value(None);
        }
    });

    view! {
        <Show when=move || ctx.notice.get().is_some()>
            <div id="error-banner" class="error-banner" role="alert">
                <span class="error-banner-text">{move || ctx.notice.get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="error-banner-close"
                    aria-label="Dismiss"
                    on:click=move |_| ctx.dismiss_notice()
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
