//! Names shared with the page markup, stylesheet, and browser storage.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the serialized theme.
pub const STORAGE_KEY: &str = "theme";

/// Element id of the toggle control.
pub const CONTROL_ID: &str = "themeToggle";

/// Class set on the document body while the light theme is active.
pub const LIGHT_CLASS: &str = "light-theme";

/// Where the controller finds its collaborators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub control_id: String,
    pub light_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            control_id: CONTROL_ID.to_owned(),
            light_class: LIGHT_CLASS.to_owned(),
        }
    }
}
