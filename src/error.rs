//! Error types for theme parsing and preference storage.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure reading or writing the persisted preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage failed: {0}")]
    Backend(String),
}

/// A string that is not a recognized theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme: {0:?}")]
pub struct ParseThemeError(pub String);
