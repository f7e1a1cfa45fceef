//! Settings read from process environment variables.

use crate::{SettingsError, SettingsSource};
use serde_json::Value;
use std::collections::HashMap;

/// A snapshot of prefixed environment variables.
///
/// Key `K` is read from variable `{prefix}K`. A value starting with `[` is
/// parsed as a JSON list, so one variable can configure a chain:
///
/// ```text
/// APP_GRADE_REPORT_IMPL='["reports.weighted", "reports.curve"]'
/// ```
///
/// The snapshot is taken at construction; later changes to the process
/// environment are not observed.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    prefix: String,
    vars: HashMap<String, String>,
}

impl EnvSettings {
    /// Snapshot every variable starting with `prefix`.
    pub fn from_env(prefix: impl Into<String>) -> Self {
        Self::from_vars(prefix, std::env::vars())
    }

    /// Build from explicit `(name, value)` pairs. Names without `prefix`
    /// are ignored.
    pub fn from_vars<I, K, V>(prefix: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let prefix = prefix.into();
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with(&prefix))
            .collect();
        Self { prefix, vars }
    }

    /// The variable prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl SettingsSource for EnvSettings {
    fn lookup(&self, key: &str) -> Result<Option<Value>, SettingsError> {
        let name = format!("{}{key}", self.prefix);
        let Some(raw) = self.vars.get(&name) else {
            return Ok(None);
        };
        if raw.trim_start().starts_with('[') {
            let value = serde_json::from_str(raw).map_err(|source| SettingsError::Json {
                origin: format!("${name}"),
                source,
            })?;
            return Ok(Some(value));
        }
        Ok(Some(Value::String(raw.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvSettings {
        EnvSettings::from_vars("APP_", pairs.iter().copied())
    }

    #[test]
    fn reads_prefixed_string() {
        let settings = env(&[("APP_SCORE_IMPL", "scores.curve")]);
        assert_eq!(
            settings.override_setting("SCORE_IMPL").unwrap().names(),
            ["scores.curve"]
        );
    }

    #[test]
    fn parses_json_list() {
        let settings = env(&[("APP_SCORE_IMPL", r#"["a.first", "b.second"]"#)]);
        assert_eq!(
            settings.override_setting("SCORE_IMPL").unwrap().names(),
            ["a.first", "b.second"]
        );
    }

    #[test]
    fn ignores_unprefixed_variables() {
        let settings = env(&[("SCORE_IMPL", "scores.curve")]);
        assert_eq!(settings.lookup("SCORE_IMPL").unwrap(), None);
    }

    #[test]
    fn empty_variable_is_empty_setting() {
        let settings = env(&[("APP_SCORE_IMPL", "")]);
        assert!(settings.override_setting("SCORE_IMPL").unwrap().is_empty());
    }

    #[test]
    fn malformed_list_is_an_error() {
        let settings = env(&[("APP_SCORE_IMPL", "[a.first")]);
        let err = settings.lookup("SCORE_IMPL").unwrap_err();
        assert!(matches!(err, SettingsError::Json { .. }));
        assert!(err.to_string().contains("$APP_SCORE_IMPL"));
    }
}
