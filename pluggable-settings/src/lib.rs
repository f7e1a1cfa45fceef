#![deny(missing_docs)]
//! Process-wide settings for pluggable overrides.
//!
//! A [`SettingsSource`] maps string keys to raw JSON values. The host loads
//! settings once at startup and treats them as read-only while serving
//! calls, so sources are plain `Send + Sync` values with no locking.
//!
//! | Source | Backing |
//! |--------|---------|
//! | [`Settings`] | In-memory map, loadable from JSON or TOML |
//! | [`EnvSettings`] | Snapshot of prefixed process environment variables |
//! | [`LayeredSettings`] | Ordered stack of sources, first definition wins |
//!
//! Override keys are normalized through [`OverrideSetting`].

mod env;
mod error;
mod file;
mod value;

pub use env::EnvSettings;
pub use error::SettingsError;
pub use value::OverrideSetting;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// A read-only key→value settings lookup.
pub trait SettingsSource: Send + Sync {
    /// The raw value stored under `key`, or `None` when the key is absent.
    fn lookup(&self, key: &str) -> Result<Option<Value>, SettingsError>;

    /// The normalized override list stored under `key`.
    ///
    /// Absent keys normalize to an empty setting.
    fn override_setting(&self, key: &str) -> Result<OverrideSetting, SettingsError> {
        match self.lookup(key)? {
            Some(value) => OverrideSetting::from_value(key, &value),
            None => Ok(OverrideSetting::none()),
        }
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for Arc<T> {
    fn lookup(&self, key: &str) -> Result<Option<Value>, SettingsError> {
        (**self).lookup(key)
    }
}

/// In-memory settings map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    /// Empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Borrow the value under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// True if `key` is defined (even as a falsy value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Defined keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of defined keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no key is defined.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy every key of `other` into `self`, overwriting existing keys.
    pub fn merge(&mut self, other: Settings) {
        self.values.extend(other.values);
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl SettingsSource for Settings {
    fn lookup(&self, key: &str) -> Result<Option<Value>, SettingsError> {
        Ok(self.values.get(key).cloned())
    }
}

/// An ordered stack of sources. The first source that defines a key wins,
/// even when its value is falsy.
#[derive(Clone, Default)]
pub struct LayeredSettings {
    layers: Vec<Arc<dyn SettingsSource>>,
}

impl LayeredSettings {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer below the existing ones.
    #[must_use]
    pub fn layer(mut self, source: impl SettingsSource + 'static) -> Self {
        self.layers.push(Arc::new(source));
        self
    }

    /// Add a shared layer below the existing ones.
    pub fn push(&mut self, source: Arc<dyn SettingsSource>) {
        self.layers.push(source);
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True if there are no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl std::fmt::Debug for LayeredSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredSettings")
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl SettingsSource for LayeredSettings {
    fn lookup(&self, key: &str) -> Result<Option<Value>, SettingsError> {
        for layer in &self.layers {
            if let Some(value) = layer.lookup(key)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn _assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn object_safety() {
        _assert_send_sync::<Box<dyn SettingsSource>>();
        _assert_send_sync::<Arc<dyn SettingsSource>>();
        _assert_send_sync::<LayeredSettings>();
        let _: Arc<dyn SettingsSource> = Arc::new(Settings::new());
    }

    #[test]
    fn absent_key_is_empty_setting() {
        let settings = Settings::new();
        assert!(settings.override_setting("MISSING").unwrap().is_empty());
    }

    #[test]
    fn builder_and_lookup() {
        let settings = Settings::new()
            .with("ONE", "m.f")
            .with("MANY", json!(["m.f", "n.g"]));
        assert_eq!(settings.len(), 2);
        assert_eq!(settings.override_setting("ONE").unwrap().names(), ["m.f"]);
        assert_eq!(
            settings.override_setting("MANY").unwrap().names(),
            ["m.f", "n.g"]
        );
    }

    #[test]
    fn first_layer_defining_key_wins() {
        let top = Settings::new().with("A", json!(null));
        let bottom = Settings::new().with("A", "m.f").with("B", "n.g");
        let layered = LayeredSettings::new().layer(top).layer(bottom);

        // top defines A (as null), so bottom's value is shadowed
        assert!(layered.override_setting("A").unwrap().is_empty());
        assert_eq!(layered.override_setting("B").unwrap().names(), ["n.g"]);
        assert_eq!(layered.lookup("C").unwrap(), None);
    }

    #[test]
    fn merge_overwrites() {
        let mut base = Settings::new().with("A", "x.a").with("B", "x.b");
        base.merge(Settings::new().with("B", "y.b"));
        assert_eq!(base.get("A"), Some(&json!("x.a")));
        assert_eq!(base.get("B"), Some(&json!("y.b")));
    }
}
