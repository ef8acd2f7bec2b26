//! DOM Accessibility Utilities
//!
//! Focus management for dialogs, ARIA live-region announcements and
//! page scroll locking. Selection rules are plain functions so they can
//! be tested off the browser; the DOM side is a thin web-sys layer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

/// Id of the shared live region element
pub const ANNOUNCER_ID: &str = "a11y-announcer";

/// Delay before the announcement text is written, so repeated messages
/// are still picked up by screen readers
const ANNOUNCE_DELAY_MS: i32 = 100;

/// Candidates for focusability; each match is then checked with [`is_focusable`]
const FOCUS_SELECTOR: &str = "a[href], area[href], button, input, select, textarea, iframe, [tabindex], [contenteditable]";

const INTERACTIVE_TAGS: &[&str] = &["A", "AREA", "BUTTON", "INPUT", "SELECT", "TEXTAREA", "IFRAME"];

/// Facts about an element that decide whether it takes part in tab order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusCandidate {
    /// Upper-case tag name, as reported by `Element::tag_name`
    pub tag: String,
    pub has_href: bool,
    pub tab_index: Option<i32>,
    pub disabled: bool,
    pub display: String,
    pub visibility: String,
    pub opacity: String,
}

impl FocusCandidate {
    fn is_interactive(&self) -> bool {
        match self.tag.as_str() {
            "A" | "AREA" => self.has_href,
            tag => INTERACTIVE_TAGS.contains(&tag),
        }
    }

    fn is_hidden(&self) -> bool {
        self.display == "none"
            || self.visibility == "hidden"
            || self.opacity.trim().parse::<f64>().map(|o| o == 0.0).unwrap_or(false)
    }
}

/// Interactive tag or non-negative tabindex, not disabled, not hidden
pub fn is_focusable(candidate: &FocusCandidate) -> bool {
    let reachable = candidate.is_interactive() || candidate.tab_index.map_or(false, |t| t >= 0);
    reachable && !candidate.disabled && !candidate.is_hidden()
}

/// Index to focus next when Tab (or Shift+Tab) is pressed inside a trap.
///
/// Wraps at both ends. When focus is outside the set, Tab goes to the
/// first element and Shift+Tab to the last. `None` if the set is empty.
pub fn next_focus_index(len: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => len - 1,
        (Some(i), false) => (i + 1) % len,
        (Some(i), true) => (i + len - 1) % len,
    };
    Some(next)
}

// ========================
// DOM helpers
// ========================

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn describe(element: &Element) -> FocusCandidate {
    let mut candidate = FocusCandidate {
        tag: element.tag_name().to_uppercase(),
        has_href: element.has_attribute("href"),
        tab_index: element
            .get_attribute("tabindex")
            .and_then(|t| t.trim().parse::<i32>().ok()),
        disabled: element.has_attribute("disabled"),
        ..Default::default()
    };
    if element.has_attribute("contenteditable") && candidate.tab_index.is_none() {
        candidate.tab_index = Some(0);
    }
    let style = web_sys::window().and_then(|w| w.get_computed_style(element).ok().flatten());
    if let Some(style) = style {
        candidate.display = style.get_property_value("display").unwrap_or_default();
        candidate.visibility = style.get_property_value("visibility").unwrap_or_default();
        candidate.opacity = style.get_property_value("opacity").unwrap_or_default();
    }
    candidate
}

/// Focusable descendants of `container`, in document order
pub fn focusable_elements(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUS_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter(|el| is_focusable(&describe(el)))
        .collect()
}

/// Currently focused element, if it is an `HtmlElement`
pub fn active_element() -> Option<HtmlElement> {
    document()
        .and_then(|d| d.active_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Focus `element` only if it is still attached to the document.
/// Returns whether focus was moved.
pub fn restore_focus(element: &HtmlElement) -> bool {
    let Some(doc) = document() else {
        return false;
    };
    if !doc.contains(Some(element.as_ref())) {
        log::debug!("[A11Y] Focus target was removed from the document; leaving focus as is");
        return false;
    }
    element.focus().is_ok()
}

/// Keep Tab / Shift+Tab cycling inside `container`.
///
/// Call from a keydown handler after checking the key is Tab. With no
/// focusable descendants, focus stays on the container itself.
pub fn trap_tab(container: &HtmlElement, ev: &KeyboardEvent) {
    ev.prevent_default();
    let elements = focusable_elements(container);
    let current = active_element().and_then(|active| {
        elements.iter().position(|el| el.is_same_node(Some(active.as_ref())))
    });
    match next_focus_index(elements.len(), current, ev.shift_key()) {
        Some(index) => {
            let _ = elements[index].focus();
        }
        None => {
            let _ = container.focus();
        }
    }
}

/// Disable or re-enable scrolling of the page body
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        log::warn!("[A11Y] No document body; scroll lock skipped");
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        log::warn!("[A11Y] Could not update body overflow");
    }
}

fn announcer(doc: &web_sys::Document) -> Option<Element> {
    if let Some(existing) = doc.get_element_by_id(ANNOUNCER_ID) {
        return Some(existing);
    }
    let body = doc.body()?;
    let region = doc.create_element("div").ok()?;
    region.set_id(ANNOUNCER_ID);
    let _ = region.set_attribute("role", "status");
    let _ = region.set_attribute("aria-live", "polite");
    let _ = region.set_attribute("aria-atomic", "true");
    let _ = region.set_attribute("class", "sr-only");
    body.append_child(&region).ok()?;
    Some(region)
}

/// Announce `message` to assistive technology through a polite live region
pub fn announce(message: &str) {
    let Some(doc) = document() else {
        return;
    };
    let Some(region) = announcer(&doc) else {
        log::warn!("[A11Y] Live region unavailable; dropped announcement '{}'", message);
        return;
    };
    region.set_text_content(None);

    let message = message.to_string();
    let cb = Closure::<dyn FnMut()>::new(move || {
        region.set_text_content(Some(&message));
    });
    if let Some(win) = web_sys::window() {
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            ANNOUNCE_DELAY_MS,
        );
    }
    cb.forget();
}

/// Bind a keydown handler on the document for the page lifetime
pub fn bind_global_keydown<F>(handler: F)
where
    F: Fn(KeyboardEvent) + 'static,
{
    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        handler(ev);
    });
    match document() {
        Some(doc) => {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
        None => log::warn!("[A11Y] No document; keydown handler not bound"),
    }
    on_keydown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> FocusCandidate {
        FocusCandidate {
            tag: "BUTTON".to_string(),
            display: "inline-block".to_string(),
            visibility: "visible".to_string(),
            opacity: "1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_interactive_tags_are_focusable() {
        assert!(is_focusable(&button()));
        let input = FocusCandidate { tag: "INPUT".to_string(), ..button() };
        assert!(is_focusable(&input));
    }

    #[test]
    fn test_anchor_needs_href() {
        let bare = FocusCandidate { tag: "A".to_string(), ..button() };
        assert!(!is_focusable(&bare));
        let link = FocusCandidate { has_href: true, ..bare };
        assert!(is_focusable(&link));
    }

    #[test]
    fn test_tabindex_makes_div_focusable() {
        let div = FocusCandidate { tag: "DIV".to_string(), ..button() };
        assert!(!is_focusable(&div));
        assert!(is_focusable(&FocusCandidate { tab_index: Some(0), ..div.clone() }));
        assert!(!is_focusable(&FocusCandidate { tab_index: Some(-1), ..div }));
    }

    #[test]
    fn test_disabled_and_hidden_excluded() {
        assert!(!is_focusable(&FocusCandidate { disabled: true, ..button() }));
        assert!(!is_focusable(&FocusCandidate { display: "none".to_string(), ..button() }));
        assert!(!is_focusable(&FocusCandidate { visibility: "hidden".to_string(), ..button() }));
        assert!(!is_focusable(&FocusCandidate { opacity: "0".to_string(), ..button() }));
        assert!(is_focusable(&FocusCandidate { opacity: "0.5".to_string(), ..button() }));
    }

    #[test]
    fn test_tab_cycles_back_to_first() {
        let n = 4;
        let mut current = Some(0);
        for _ in 0..n {
            current = next_focus_index(n, current, false);
        }
        assert_eq!(current, Some(0));
    }

    #[test]
    fn test_shift_tab_from_first_goes_to_last() {
        assert_eq!(next_focus_index(3, Some(0), true), Some(2));
        assert_eq!(next_focus_index(3, Some(2), false), Some(0));
        assert_eq!(next_focus_index(3, Some(1), true), Some(0));
    }

    #[test]
    fn test_focus_outside_set() {
        assert_eq!(next_focus_index(3, None, false), Some(0));
        assert_eq!(next_focus_index(3, None, true), Some(2));
        assert_eq!(next_focus_index(0, None, false), None);
        assert_eq!(next_focus_index(1, Some(0), true), Some(0));
    }
}
