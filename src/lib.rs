//! # theme-toggle
//!
//! Dark/light theme toggle for web pages, persisted across page loads.
//!
//! The controller, theme value type, and storage/page abstractions are plain
//! Rust and run natively (tests, SSR). Browser bindings live behind the
//! `hydrate` feature, and a Leptos `<ThemeToggle/>` component is provided for
//! reactive UIs.

pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod page;
pub mod store;
pub mod theme;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::{ParseThemeError, StoreError};
pub use page::{Page, ToggleControl};
pub use store::PreferenceStore;
pub use theme::Theme;

/// WASM entry point: install console logging and attach the controller.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    dom::boot(ThemeConfig::default());
}
