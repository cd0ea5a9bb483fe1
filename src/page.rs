//! Page collaborators: the root class flag and the toggle control.
//!
//! DESIGN
//! ======
//! The controller never touches the DOM directly. `Page` exposes the root
//! element's class flags and control lookup, and `ToggleControl` exposes the
//! label and activation hook. `dom` implements both over web-sys; the
//! `Memory*` types here back native tests and headless use.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

/// Callback run when the control is activated.
pub type ActivateHandler = Box<dyn FnMut()>;

/// Document the theme is applied to.
pub trait Page {
    type Control: ToggleControl;

    /// Look up the toggle control by element id.
    fn control(&self, id: &str) -> Option<Self::Control>;

    /// Whether `class` is set on the root element.
    fn has_flag(&self, class: &str) -> bool;

    /// Set or clear `class` on the root element.
    fn set_flag(&self, class: &str, on: bool);

    /// Flip `class` on the root element and return whether it is now set.
    fn toggle_flag(&self, class: &str) -> bool {
        let on = !self.has_flag(class);
        self.set_flag(class, on);
        on
    }
}

/// Interactive element the user activates to switch themes.
pub trait ToggleControl {
    fn set_label(&self, label: &str);

    /// Register `handler` to run on every activation.
    fn on_activate(&self, handler: ActivateHandler);
}

// =============================================================================
// IN-MEMORY PAGE
// =============================================================================

/// In-memory page. Clones share the same root flags and controls.
#[derive(Clone, Debug, Default)]
pub struct MemoryPage {
    flags: Rc<RefCell<HashSet<String>>>,
    controls: Rc<RefCell<HashMap<String, MemoryControl>>>,
}

impl MemoryPage {
    /// Page without any toggle control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with a control under `id` showing `label`.
    pub fn with_control(id: &str, label: &str) -> Self {
        let page = Self::new();
        page.add_control(id, MemoryControl::new(label));
        page
    }

    pub fn add_control(&self, id: &str, control: MemoryControl) {
        self.controls.borrow_mut().insert(id.to_owned(), control);
    }
}

impl Page for MemoryPage {
    type Control = MemoryControl;

    fn control(&self, id: &str) -> Option<MemoryControl> {
        self.controls.borrow().get(id).cloned()
    }

    fn has_flag(&self, class: &str) -> bool {
        self.flags.borrow().contains(class)
    }

    fn set_flag(&self, class: &str, on: bool) {
        let mut flags = self.flags.borrow_mut();
        if on {
            flags.insert(class.to_owned());
        } else {
            flags.remove(class);
        }
    }
}

#[derive(Default)]
struct ControlInner {
    label: RefCell<String>,
    handlers: RefCell<Vec<ActivateHandler>>,
}

/// In-memory toggle control. Clones refer to the same control.
#[derive(Clone, Default)]
pub struct MemoryControl {
    inner: Rc<ControlInner>,
}

impl MemoryControl {
    pub fn new(label: &str) -> Self {
        let control = Self::default();
        *control.inner.label.borrow_mut() = label.to_owned();
        control
    }

    pub fn label(&self) -> String {
        self.inner.label.borrow().clone()
    }

    pub fn handler_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }

    /// Simulate a user activation, running every registered handler.
    ///
    /// Handlers may use this control while running; any they register are
    /// kept and run from the next click on.
    pub fn click(&self) {
        let mut handlers = std::mem::take(&mut *self.inner.handlers.borrow_mut());
        for handler in &mut handlers {
            handler();
        }
        let mut slot = self.inner.handlers.borrow_mut();
        let added = std::mem::replace(&mut *slot, handlers);
        slot.extend(added);
    }
}

impl fmt::Debug for MemoryControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryControl")
            .field("label", &self.label())
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl ToggleControl for MemoryControl {
    fn set_label(&self, label: &str) {
        *self.inner.label.borrow_mut() = label.to_owned();
    }

    fn on_activate(&self, handler: ActivateHandler) {
        self.inner.handlers.borrow_mut().push(handler);
    }
}
