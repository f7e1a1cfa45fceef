//! Loading [`Settings`] from JSON and TOML documents.

use crate::{Settings, SettingsError};
use serde_json::{Map, Value};
use std::path::Path;

const INLINE: &str = "<string>";

impl Settings {
    /// Parse settings from a JSON document whose top level is an object.
    pub fn from_json_str(input: &str) -> Result<Self, SettingsError> {
        parse_json(input, INLINE)
    }

    /// Parse settings from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, SettingsError> {
        parse_toml(input, INLINE)
    }

    /// Read settings from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse = match extension.as_deref() {
            Some("json") => parse_json,
            Some("toml") => parse_toml,
            _ => return Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        };

        let input = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let origin = path.display().to_string();
        let settings = parse(&input, &origin)?;
        tracing::debug!(path = %origin, keys = settings.len(), "pluggable.settings.load");
        Ok(settings)
    }
}

fn parse_json(input: &str, origin: &str) -> Result<Settings, SettingsError> {
    let value: Value = serde_json::from_str(input).map_err(|source| SettingsError::Json {
        origin: origin.to_owned(),
        source,
    })?;
    match value {
        Value::Object(values) => Ok(Settings::from(values)),
        _ => Err(SettingsError::NotATable(origin.to_owned())),
    }
}

fn parse_toml(input: &str, origin: &str) -> Result<Settings, SettingsError> {
    let values: Map<String, Value> =
        toml::from_str(input).map_err(|source| SettingsError::Toml {
            origin: origin.to_owned(),
            source,
        })?;
    Ok(Settings::from(values))
}
