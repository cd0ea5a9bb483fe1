#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_dark_outside_browser() {
    assert_eq!(read_preference(), Theme::Dark);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Dark), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}

#[test]
fn apply_and_persist_are_noops_but_callable() {
    apply(Theme::Light);
    persist(Theme::Light);
}
