//! Theme Store
//!
//! Light/dark preference for the page lifetime. The stored choice wins
//! over the OS color scheme; without one the OS scheme is followed,
//! including live changes. Storage failures are logged and the in-memory
//! value keeps working.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::analytics;
use crate::api;
use crate::config::THEME_STORAGE_KEY;
use crate::error::StorageError;
use crate::models::Theme;

/// Where the explicit preference is persisted
pub trait ThemeStorage {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// How a theme change becomes visible (and audible)
pub trait ThemeDisplay {
    fn apply(&self, theme: Theme);
    fn announce(&self, message: &str);
}

/// `window.localStorage` under [`THEME_STORAGE_KEY`]
pub struct LocalThemeStorage;

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        api::local_storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        api::local_storage()?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        api::local_storage()?
            .remove_item(THEME_STORAGE_KEY)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// The element carrying the theme (`<html>` in the page)
pub trait ThemeRoot {
    fn set_attribute(&self, name: &str, value: &str) -> bool;
    /// Set one inline style property, leaving the others alone
    fn set_style_property(&self, name: &str, value: &str) -> bool;
}

impl ThemeRoot for web_sys::HtmlElement {
    fn set_attribute(&self, name: &str, value: &str) -> bool {
        web_sys::Element::set_attribute(self, name, value).is_ok()
    }

    fn set_style_property(&self, name: &str, value: &str) -> bool {
        self.style().set_property(name, value).is_ok()
    }
}

/// Write `theme` onto `root` as `data-theme` and `color-scheme`
pub fn apply_to_root(root: &impl ThemeRoot, theme: Theme) {
    if !root.set_attribute("data-theme", theme.as_str()) {
        log::warn!("[THEME] Could not set data-theme on the root element");
    }
    if !root.set_style_property("color-scheme", theme.as_str()) {
        log::warn!("[THEME] Could not set color-scheme on the root element");
    }
}

/// Applies the theme to the document element
pub struct DomThemeDisplay;

impl ThemeDisplay for DomThemeDisplay {
    fn apply(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            log::warn!("[THEME] No document element; theme '{}' not applied", theme);
            return;
        };
        apply_to_root(&root, theme);
    }

    fn announce(&self, message: &str) {
        dom_a11y::announce(message);
    }
}

/// Current theme plus its persistence and listeners
pub struct ThemeStore<S, D> {
    storage: S,
    display: D,
    current: Theme,
    explicit: bool,
    listeners: Vec<Box<dyn Fn(Theme)>>,
}

impl<S: ThemeStorage, D: ThemeDisplay> ThemeStore<S, D> {
    /// Resolve stored preference, else `system`, and apply it immediately
    pub fn initialize(storage: S, display: D, system: Theme) -> Self {
        let stored = storage.load().unwrap_or_else(|e| {
            log::warn!("[THEME] Could not read stored theme: {}", e);
            None
        });
        let (current, explicit) = match stored.as_deref().map(str::parse::<Theme>) {
            Some(Ok(theme)) => (theme, true),
            Some(Err(e)) => {
                log::warn!("[THEME] Ignoring stored value: {}", e);
                (system, false)
            }
            None => (system, false),
        };
        display.apply(current);
        log::info!("[THEME] Initialized to {} (explicit={})", current, explicit);
        Self {
            storage,
            display,
            current,
            explicit,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn has_explicit_preference(&self) -> bool {
        self.explicit
    }

    /// Flip light/dark, persist it and announce the change
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set_explicit(next);
        self.display.announce(&format!("Switched to {} theme", next));
        next
    }

    /// Persist an explicit value; invalid input is logged and ignored
    pub fn force_set(&mut self, value: &str) -> Option<Theme> {
        match value.parse::<Theme>() {
            Ok(theme) => {
                self.set_explicit(theme);
                Some(theme)
            }
            Err(e) => {
                log::warn!("[THEME] force_set ignored: {}", e);
                None
            }
        }
    }

    /// Forget the explicit choice and follow `system` again
    pub fn reset_to_system(&mut self, system: Theme) {
        if let Err(e) = self.storage.clear() {
            log::warn!("[THEME] Could not clear stored theme: {}", e);
        }
        self.explicit = false;
        self.change(system);
    }

    /// OS scheme changed; applies only while no explicit choice exists
    pub fn on_system_change(&mut self, system: Theme) -> bool {
        if self.explicit {
            log::debug!("[THEME] OS switched to {}, keeping explicit {}", system, self.current);
            return false;
        }
        self.change(system);
        true
    }

    /// Listeners run on every change, in registration order
    pub fn subscribe(&mut self, listener: impl Fn(Theme) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn set_explicit(&mut self, theme: Theme) {
        self.explicit = true;
        if let Err(e) = self.storage.save(theme.as_str()) {
            log::warn!("[THEME] Could not persist theme, keeping it in memory: {}", e);
        }
        self.change(theme);
    }

    fn change(&mut self, theme: Theme) {
        self.current = theme;
        self.display.apply(theme);
        for listener in &self.listeners {
            listener(theme);
        }
    }
}

pub type PageThemeStore = ThemeStore<LocalThemeStorage, DomThemeDisplay>;

/// Resolve and apply the page theme; call before mounting
pub fn initialize_page_theme() -> PageThemeStore {
    ThemeStore::initialize(LocalThemeStorage, DomThemeDisplay, api::system_theme())
}

/// Reactive handle to the page theme store
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    store: StoredValue<PageThemeStore, LocalStorage>,
    /// Mirrors the store for views
    pub current: ReadSignal<Theme>,
}

impl ThemeHandle {
    pub fn new(mut store: PageThemeStore) -> Self {
        let (current, set_current) = signal(store.current());
        store.subscribe(move |theme| set_current.set(theme));
        let handle = Self {
            store: StoredValue::new_local(store),
            current,
        };
        api::watch_system_theme(move |system| handle.on_system_change(system));
        handle
    }

    pub fn toggle(&self) {
        if let Some(theme) = self.store.try_update_value(|s| s.toggle()) {
            analytics::track("theme_toggled", theme.as_str());
        }
    }

    pub fn reset_to_system(&self) {
        let system = api::system_theme();
        self.store.update_value(|s| s.reset_to_system(system));
    }

    pub fn has_explicit_preference(&self) -> bool {
        self.store.with_value(|s| s.has_explicit_preference())
    }

    fn on_system_change(&self, system: Theme) {
        self.store.update_value(|s| {
            s.on_system_change(system);
        });
    }
}
