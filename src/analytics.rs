//! Analytics
//!
//! Events are only logged; there is no collection endpoint.

pub fn track(event: &str, detail: &str) {
    log::info!(target: "analytics", "{} {}", event, detail);
}
