//! Theme preference value type.
//!
//! DESIGN
//! ======
//! There are two parsing paths. `from_stored` is what page load uses:
//! only the exact string `"light"` selects the light theme and anything else,
//! including garbage left in storage, falls back to dark. `FromStr` is strict
//! for callers that want to reject bad input.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Serialized form written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Label shown on the toggle control while this theme is active.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀️",
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    pub fn from_light(light: bool) -> Self {
        if light { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_light(!self.is_light())
    }

    /// Resolve a raw store value. Absent or unrecognized values are dark.
    pub fn from_stored(raw: Option<&str>) -> Self {
        Self::from_light(raw == Some(Self::Light.as_str()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}
