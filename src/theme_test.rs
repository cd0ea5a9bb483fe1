use super::*;

// =============================================================
// Defaults and serialization
// =============================================================

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn as_str_matches_stored_values() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(parsed, Theme::Dark);
}

// =============================================================
// Stored value resolution
// =============================================================

#[test]
fn from_stored_only_exact_light_is_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("garbage")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
}

#[test]
fn from_str_is_strict() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(
        "garbage".parse::<Theme>(),
        Err(ParseThemeError("garbage".to_owned()))
    );
}

// =============================================================
// Transitions and labels
// =============================================================

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn glyphs_match_theme() {
    assert_eq!(Theme::Light.glyph(), "☀️");
    assert_eq!(Theme::Dark.glyph(), "🌙");
}

#[test]
fn from_light_round_trips_is_light() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(Theme::from_light(theme.is_light()), theme);
    }
}
