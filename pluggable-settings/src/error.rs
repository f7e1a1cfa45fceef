//! Errors raised while loading or normalizing settings.

use std::path::PathBuf;
use thiserror::Error;

/// Settings errors. Every variant is a configuration defect: the host
/// should surface it at load time rather than retry.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON settings failed to parse.
    #[error("invalid JSON settings in {origin}: {source}")]
    Json {
        /// File path or `<string>` for in-memory input.
        origin: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// TOML settings failed to parse.
    #[error("invalid TOML settings in {origin}: {source}")]
    Toml {
        /// File path or `<string>` for in-memory input.
        origin: String,
        /// Parser error.
        #[source]
        source: toml::de::Error,
    },

    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported settings format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The settings document is not a top-level object/table.
    #[error("settings in {0} must be a top-level object")]
    NotATable(String),

    /// A value cannot be read as an override setting.
    #[error("invalid override setting {key}: {reason}")]
    InvalidSetting {
        /// The settings key.
        key: String,
        /// What was wrong with the value.
        reason: String,
    },
}
