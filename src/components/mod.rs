//! Leptos UI components.

pub mod theme_toggle;
