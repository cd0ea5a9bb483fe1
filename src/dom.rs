//! Browser bindings for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LocalStore`, `DomPage`, and `DomControl` implement the store and page
//! traits over web-sys and only exist with the `hydrate` feature. `boot`
//! attaches a controller once the document is ready.
//!
//! The free functions at the bottom serve the Leptos component. Like other
//! browser helpers they are best-effort and no-op outside the browser, so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::config::{LIGHT_CLASS, STORAGE_KEY, ThemeConfig};
#[cfg(feature = "hydrate")]
use crate::controller::ThemeController;
#[cfg(feature = "hydrate")]
use crate::error::StoreError;
#[cfg(feature = "hydrate")]
use crate::page::{ActivateHandler, Page, ToggleControl};
#[cfg(feature = "hydrate")]
use crate::store::PreferenceStore;
use crate::theme::Theme;

#[cfg(feature = "hydrate")]
fn js_error(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

// =============================================================================
// STORE
// =============================================================================

/// `window.localStorage`. Reports `Unavailable` when the browser denies it.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("theme: localStorage unavailable, preference will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// Document whose `<body>` carries the theme class.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct DomPage {
    document: web_sys::Document,
}

#[cfg(feature = "hydrate")]
impl DomPage {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn class_list(&self) -> Option<web_sys::DomTokenList> {
        self.document.body().map(|body| body.class_list())
    }
}

#[cfg(feature = "hydrate")]
impl Page for DomPage {
    type Control = DomControl;

    fn control(&self, id: &str) -> Option<DomControl> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
            .map(DomControl::new)
    }

    fn has_flag(&self, class: &str) -> bool {
        self.class_list().is_some_and(|list| list.contains(class))
    }

    fn set_flag(&self, class: &str, on: bool) {
        if let Some(list) = self.class_list() {
            let _ = list.toggle_with_force(class, on);
        }
    }

    fn toggle_flag(&self, class: &str) -> bool {
        self.class_list()
            .and_then(|list| list.toggle(class).ok())
            .unwrap_or(false)
    }
}

/// Toggle control element. The label is its text content.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct DomControl {
    element: web_sys::HtmlElement,
}

#[cfg(feature = "hydrate")]
impl DomControl {
    pub fn new(element: web_sys::HtmlElement) -> Self {
        Self { element }
    }
}

#[cfg(feature = "hydrate")]
impl ToggleControl for DomControl {
    fn set_label(&self, label: &str) {
        self.element.set_text_content(Some(label));
    }

    /// The listener lives as long as the page, so the closure is leaked.
    fn on_activate(&self, handler: ActivateHandler) {
        let cb = Closure::<dyn FnMut()>::wrap(handler);
        if let Err(err) = self
            .element
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        {
            log::warn!("theme: failed to register click handler: {err:?}");
            return;
        }
        cb.forget();
    }
}

// =============================================================================
// BOOT
// =============================================================================

/// Attach a controller to the current document once it is ready.
#[cfg(feature = "hydrate")]
pub fn boot(config: ThemeConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        attach(document, config);
        return;
    }

    let target = document.clone();
    let cb = Closure::once(move || attach(target, config));
    if document
        .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    /// Controllers attached by `boot`, kept for the lifetime of the page.
    static ATTACHED: RefCell<Vec<Rc<ThemeController<DomPage, LocalStore>>>> =
        const { RefCell::new(Vec::new()) };
}

#[cfg(feature = "hydrate")]
fn attach(document: web_sys::Document, config: ThemeConfig) {
    if let Some(controller) =
        ThemeController::attach(DomPage::new(document), LocalStore::new(), config)
    {
        ATTACHED.with(|attached| attached.borrow_mut().push(controller));
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Read the stored theme. Always dark outside the browser.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let raw = LocalStore::new().get(STORAGE_KEY).ok().flatten();
        Theme::from_stored(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Dark
    }
}

/// Set or clear the light theme class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            DomPage::new(document).set_flag(LIGHT_CLASS, theme.is_light());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Write `theme` to `localStorage`.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = LocalStore::new().set(STORAGE_KEY, theme.as_str()) {
            log::warn!("theme: failed to persist {theme}: {err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, apply it, and persist it. Returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}
