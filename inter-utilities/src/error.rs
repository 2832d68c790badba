//! Errors returned by this crate.

use thiserror::Error;

/// An error loading metadata or generating rules.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid typeface metadata: {0}")]
    Metadata(#[source] serde_json::Error),
    #[error("typeface metadata has no single-class utility to scope rules to")]
    MissingFamilyClass,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A theme or option value with the wrong shape.
///
/// These indicate a misconfiguration by the caller, and are reported
/// before any rules are generated.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid value for theme key '{key}': {message}")]
    InvalidThemeKey { key: String, message: String },
    #[error("invalid option '{name}': {message}")]
    InvalidOption { name: &'static str, message: String },
}
