//! Theme toggle button for Leptos-rendered pages.
//!
//! Shares the storage key and body class with `ThemeController`, so a page
//! toggled here restores the same way on a plain-markup page and vice versa.
//! The button carries no element id so `dom::boot` never double-binds it.
//!
//! The server always renders the dark label. The stored preference is only
//! read in an effect, after hydration, so the label is updated through the
//! signal rather than diverging from server-rendered text.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::dom;
use crate::theme::Theme;

/// Button that flips between dark and light themes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = RwSignal::new(Theme::Dark);

    Effect::new(move || {
        let stored = dom::read_preference();
        if stored.is_light() {
            dom::apply(stored);
            theme.set(stored);
        }
    });

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let next = dom::toggle(theme.get_untracked());
                theme.set(next);
            }
            title="Toggle theme"
        >
            {move || theme.get().glyph()}
        </button>
    }
}
