//! Theme toggle controller.
//!
//! DESIGN
//! ======
//! `attach` runs once when the page is ready. If the toggle control is
//! missing it does nothing at all: no store read, no handler. Otherwise it
//! restores a stored `"light"` preference and registers the click handler.
//!
//! Every toggle updates the root flag, the control label, and the store in
//! one synchronous call, so all three always describe the same theme.
//! Storage failures are logged and swallowed; the page still switches.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::page::{Page, ToggleControl};
use crate::store::PreferenceStore;
use crate::theme::Theme;

/// Keeps the page flag, control label, and stored preference in agreement.
pub struct ThemeController<P: Page, S> {
    page: P,
    control: P::Control,
    store: S,
    config: ThemeConfig,
}

impl<P, S> ThemeController<P, S>
where
    P: Page + 'static,
    P::Control: 'static,
    S: PreferenceStore + 'static,
{
    /// Initialize the theme on `page` and wire up its toggle control.
    ///
    /// Returns `None` when the page has no control with `config.control_id`.
    /// The registered handler only holds a weak reference, so activations
    /// stop once the caller drops the returned controller.
    pub fn attach(page: P, store: S, config: ThemeConfig) -> Option<Rc<Self>> {
        let Some(control) = page.control(&config.control_id) else {
            log::debug!(
                "theme: no #{} control on page, skipping init",
                config.control_id
            );
            return None;
        };

        let controller = Rc::new(Self {
            page,
            control,
            store,
            config,
        });
        controller.restore();

        let handle = Rc::downgrade(&controller);
        controller.control.on_activate(Box::new(move || {
            if let Some(controller) = handle.upgrade() {
                controller.toggle();
            }
        }));

        Some(controller)
    }

    /// Theme currently shown on the page.
    pub fn theme(&self) -> Theme {
        Theme::from_light(self.page.has_flag(&self.config.light_class))
    }

    /// Flip the theme, relabel the control, and persist the result.
    pub fn toggle(&self) -> Theme {
        let theme = Theme::from_light(self.page.toggle_flag(&self.config.light_class));
        self.control.set_label(theme.glyph());
        if let Err(err) = self.store.set(&self.config.storage_key, theme.as_str()) {
            log::warn!("theme: failed to persist {theme}: {err}");
        }
        log::debug!("theme: toggled to {theme}");
        theme
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn control(&self) -> &P::Control {
        &self.control
    }

    fn stored(&self) -> Theme {
        match self.store.get(&self.config.storage_key) {
            Ok(raw) => Theme::from_stored(raw.as_deref()),
            Err(err) => {
                log::warn!("theme: failed to read preference: {err}");
                Theme::Dark
            }
        }
    }

    /// Dark is the markup's default, so only a stored light theme is applied.
    fn restore(&self) {
        let theme = self.stored();
        if theme.is_light() {
            self.page.set_flag(&self.config.light_class, true);
            self.control.set_label(theme.glyph());
        }
        log::debug!("theme: initialized as {theme}");
    }
}
