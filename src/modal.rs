//! Modal Controller
//!
//! Single dialog for the whole page: Closed -> Open -> Closed. Opening
//! while open swaps content and callbacks but keeps the focus captured
//! on the first open. `ModalState` holds the session; `ModalController`
//! drives the DOM side (scroll lock, focus, announcements).

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::HtmlElement;

pub const MODAL_ROOT_ID: &str = "modal-root";
pub const MODAL_DIALOG_ID: &str = "modal-dialog";
pub const MODAL_CLOSE_ID: &str = "modal-close";

type Hook = Box<dyn FnOnce()>;

/// What a prompt button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Confirm,
    Dismiss,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptAction {
    pub label: String,
    pub kind: ActionKind,
    pub primary: bool,
}

/// Dialog body
#[derive(Debug, Clone, PartialEq)]
pub enum ModalBody {
    /// Pre-escaped markup, inserted as HTML
    Markup(String),
    /// Message text plus action buttons
    Prompt { message: String, actions: Vec<PromptAction> },
}

/// Renderable part of an open session
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub title: String,
    pub body: ModalBody,
    pub class_name: Option<String>,
}

#[derive(Default)]
pub struct ModalOptions {
    /// Decorative class added to the dialog while open
    pub class_name: Option<String>,
    /// Runs exactly once when this session closes
    pub on_close: Option<Hook>,
}

struct Session<F> {
    view: ModalView,
    on_close: Option<Hook>,
    on_confirm: Option<Hook>,
    restore_focus: Option<F>,
}

/// Outcome of [`ModalState::open`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenKind {
    /// Closed -> Open; focus was captured
    Fresh,
    /// Already open; content and callbacks replaced
    Replaced,
}

/// A session that has been closed but not yet finished
pub struct ClosedSession<F> {
    on_close: Option<Hook>,
    restore_focus: Option<F>,
}

impl<F> ClosedSession<F> {
    /// Run the close callback and hand back the element to refocus
    pub fn finish(self) -> Option<F> {
        if let Some(on_close) = self.on_close {
            on_close();
        }
        self.restore_focus
    }
}

/// Session bookkeeping, generic over the focus handle type
pub struct ModalState<F> {
    session: Option<Session<F>>,
}

impl<F> Default for ModalState<F> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<F> ModalState<F> {
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.session.as_ref().map(|s| &s.view)
    }

    /// Open, or replace the open session. `capture` runs only on a fresh open.
    pub fn open(
        &mut self,
        view: ModalView,
        on_close: Option<Hook>,
        on_confirm: Option<Hook>,
        capture: impl FnOnce() -> Option<F>,
    ) -> OpenKind {
        match self.session.as_mut() {
            Some(session) => {
                session.view = view;
                session.on_close = on_close;
                session.on_confirm = on_confirm;
                OpenKind::Replaced
            }
            None => {
                self.session = Some(Session {
                    view,
                    on_close,
                    on_confirm,
                    restore_focus: capture(),
                });
                OpenKind::Fresh
            }
        }
    }

    /// Take the confirm callback of the open session, if any
    pub fn take_confirm(&mut self) -> Option<Hook> {
        self.session.as_mut().and_then(|s| s.on_confirm.take())
    }

    /// Closed -> no-op (`None`); otherwise end the session
    pub fn close(&mut self) -> Option<ClosedSession<F>> {
        self.session.take().map(|s| ClosedSession {
            on_close: s.on_close,
            restore_focus: s.restore_focus,
        })
    }
}

/// What the page has to do once a close request has been processed
#[derive(Debug, PartialEq, Eq)]
pub enum CloseOutcome<F> {
    AlreadyClosed,
    /// `on_close` opened a new session; leave it showing
    Reopened,
    /// Hide the dialog and refocus the captured element
    Hide(Option<F>),
}

/// End the open session and run its `on_close`.
///
/// `take` must not hold the state borrowed, since `on_close` may open again.
pub fn close_session<F>(
    take: impl FnOnce() -> Option<ClosedSession<F>>,
    is_open: impl Fn() -> bool,
) -> CloseOutcome<F> {
    let Some(closed) = take() else {
        return CloseOutcome::AlreadyClosed;
    };
    let restore = closed.finish();
    if is_open() {
        CloseOutcome::Reopened
    } else {
        CloseOutcome::Hide(restore)
    }
}

/// Sending half of a deferred dialog result; resolves at most once
pub struct Resolver<T>(Rc<RefCell<Option<oneshot::Sender<T>>>>);

impl<T> Clone for Resolver<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Resolver<T> {
    pub fn new() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (Self(Rc::new(RefCell::new(Some(tx)))), rx)
    }

    /// Returns false if already resolved
    pub fn resolve(&self, value: T) -> bool {
        match self.0.borrow_mut().take() {
            Some(tx) => {
                let _ = tx.send(value);
                true
            }
            None => false,
        }
    }
}

/// Button labels for [`ModalController::show_confirm`]
#[derive(Debug, Clone, Default)]
pub struct ConfirmOptions {
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
}

/// Button label for [`ModalController::show_alert`]
#[derive(Debug, Clone, Default)]
pub struct AlertOptions {
    pub button_text: Option<String>,
}

fn confirm_body(message: String, options: ConfirmOptions) -> ModalBody {
    ModalBody::Prompt {
        message,
        actions: vec![
            PromptAction {
                label: options.cancel_text.unwrap_or_else(|| "Cancel".to_string()),
                kind: ActionKind::Dismiss,
                primary: false,
            },
            PromptAction {
                label: options.confirm_text.unwrap_or_else(|| "Confirm".to_string()),
                kind: ActionKind::Confirm,
                primary: true,
            },
        ],
    }
}

fn alert_body(message: String, options: AlertOptions) -> ModalBody {
    ModalBody::Prompt {
        message,
        actions: vec![PromptAction {
            label: options.button_text.unwrap_or_else(|| "OK".to_string()),
            kind: ActionKind::Dismiss,
            primary: true,
        }],
    }
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    use wasm_bindgen::JsCast;
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Page-wide modal handle, provided through context
#[derive(Clone, Copy)]
pub struct ModalController {
    view: RwSignal<Option<ModalView>>,
    state: StoredValue<ModalState<HtmlElement>, LocalStorage>,
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(None),
            state: StoredValue::new_local(ModalState::default()),
        }
    }

    /// Reactive view of the open session (`None` when closed)
    pub fn view(&self) -> Option<ModalView> {
        self.view.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.with_value(|s| s.is_open())
    }

    pub fn open(&self, title: impl Into<String>, body: ModalBody, options: ModalOptions) {
        self.open_session(title.into(), body, options, None);
    }

    fn open_session(&self, title: String, body: ModalBody, options: ModalOptions, on_confirm: Option<Hook>) {
        if element_by_id(MODAL_ROOT_ID).is_none() {
            log::error!("[MODAL] #{} missing; cannot open '{}'", MODAL_ROOT_ID, title);
            return;
        }
        let view = ModalView {
            title: title.clone(),
            body,
            class_name: options.class_name,
        };
        let on_close = options.on_close;
        let kind = self
            .state
            .try_update_value(|s| s.open(view.clone(), on_close, on_confirm, dom_a11y::active_element));
        log::debug!("[MODAL] Open '{}' ({:?})", title, kind);

        self.view.set(Some(view));
        dom_a11y::set_scroll_locked(true);
        dom_a11y::announce(&format!("Dialog opened: {}", title));
        // Focus once the view has rendered
        Timeout::new(0, focus_initial).forget();
    }

    /// No-op when closed. Runs `on_close` before hiding, then restores focus.
    pub fn close(&self) {
        let state = self.state;
        let outcome = close_session(
            || state.try_update_value(|s| s.close()).flatten(),
            || state.with_value(|s| s.is_open()),
        );
        match outcome {
            CloseOutcome::AlreadyClosed => {}
            CloseOutcome::Reopened => log::debug!("[MODAL] Reopened from on_close"),
            CloseOutcome::Hide(restore) => {
                self.view.set(None);
                dom_a11y::set_scroll_locked(false);
                if let Some(element) = restore {
                    dom_a11y::restore_focus(&element);
                }
                log::debug!("[MODAL] Closed");
            }
        }
    }

    /// Handle a prompt button
    pub fn activate(&self, kind: ActionKind) {
        if kind == ActionKind::Confirm {
            if let Some(on_confirm) = self.state.try_update_value(|s| s.take_confirm()).flatten() {
                on_confirm();
            }
        }
        self.close();
    }

    /// Resolves `true` only on the confirm button; any other dismissal is `false`
    pub fn show_confirm(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: ConfirmOptions,
    ) -> impl Future<Output = bool> {
        let (resolver, rx) = Resolver::<bool>::new();
        let confirm = resolver.clone();
        self.open_session(
            title.into(),
            confirm_body(message.into(), options),
            ModalOptions {
                class_name: Some("modal-confirm".to_string()),
                on_close: Some(Box::new(move || {
                    resolver.resolve(false);
                })),
            },
            Some(Box::new(move || {
                confirm.resolve(true);
            })),
        );
        async move { rx.await.unwrap_or(false) }
    }

    /// Resolves once the alert is dismissed by any path
    pub fn show_alert(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: AlertOptions,
    ) -> impl Future<Output = ()> {
        let (resolver, rx) = Resolver::<()>::new();
        self.open_session(
            title.into(),
            alert_body(message.into(), options),
            ModalOptions {
                class_name: Some("modal-alert".to_string()),
                on_close: Some(Box::new(move || {
                    resolver.resolve(());
                })),
            },
            None,
        );
        async move {
            let _ = rx.await;
        }
    }

    /// Document keydown while open: Escape closes, Tab stays inside
    pub fn handle_keydown(&self, ev: &web_sys::KeyboardEvent) {
        if !self.is_open() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => {
                ev.prevent_default();
                self.close();
            }
            "Tab" => match element_by_id(MODAL_DIALOG_ID) {
                Some(dialog) => dom_a11y::trap_tab(&dialog, ev),
                None => log::warn!("[MODAL] Dialog element missing; focus trap skipped"),
            },
            _ => {}
        }
    }
}

/// Dismiss control first; the dialog itself when nothing inside is focusable
fn focus_initial() {
    let Some(dialog) = element_by_id(MODAL_DIALOG_ID) else {
        return;
    };
    let focusable = dom_a11y::focusable_elements(&dialog);
    let target = element_by_id(MODAL_CLOSE_ID)
        .filter(|close| focusable.iter().any(|el| el.is_same_node(Some(close.as_ref()))))
        .or_else(|| focusable.into_iter().next());
    match target {
        Some(el) => {
            let _ = el.focus();
        }
        None => {
            let _ = dialog.focus();
        }
    }
}
