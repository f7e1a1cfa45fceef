//! Normalization of raw settings values into override name lists.

use crate::SettingsError;
use serde_json::Value;

/// The normalized value of an override setting: an ordered list of
/// qualified function names, first entry outermost.
///
/// An empty setting means "call the original function unmodified".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSetting {
    names: Vec<String>,
}

impl OverrideSetting {
    /// An empty setting (no overrides).
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a setting from names, preserving order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Normalize a raw value stored under `key`.
    ///
    /// - `null`, `false`, `""` and `[]` are empty.
    /// - A string is a one-element list.
    /// - An array of strings is used as given.
    /// - Anything else is [`SettingsError::InvalidSetting`].
    pub fn from_value(key: &str, value: &Value) -> Result<Self, SettingsError> {
        match value {
            Value::Null | Value::Bool(false) => Ok(Self::none()),
            Value::String(name) if name.is_empty() => Ok(Self::none()),
            Value::String(name) => Ok(Self::from_names([name.as_str()])),
            Value::Array(items) => {
                let mut names = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match item {
                        Value::String(name) => names.push(name.clone()),
                        other => {
                            return Err(SettingsError::InvalidSetting {
                                key: key.to_owned(),
                                reason: format!(
                                    "entry {index} must be a string, found {}",
                                    kind(other)
                                ),
                            });
                        }
                    }
                }
                Ok(Self { names })
            }
            other => Err(SettingsError::InvalidSetting {
                key: key.to_owned(),
                reason: format!(
                    "expected a string or a list of strings, found {}",
                    kind(other)
                ),
            }),
        }
    }

    /// The qualified names, outermost first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of configured overrides.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no override is configured.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consume into the name list.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
