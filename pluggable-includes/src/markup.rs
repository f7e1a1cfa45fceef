use serde::Serialize;

/// Markup the host's template engine may emit without escaping.
///
/// Only plugin output ends up here; plugins are trusted code registered
/// by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeMarkup(String);

impl SafeMarkup {
    /// Mark `markup` as trusted.
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if nothing was contributed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the markup.
    pub fn into_string(self) -> String {
        self.0
    }

    pub(crate) fn push(&mut self, fragment: &str) {
        self.0.push_str(fragment);
    }
}

impl std::fmt::Display for SafeMarkup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeMarkup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
