//! Override resolution errors.

use pluggable_settings::SettingsError;
use thiserror::Error;

/// Configuration errors raised while resolving an override chain.
///
/// These are raised before any override or the original function runs.
/// Errors produced by the functions themselves travel inside the return
/// type and are never translated into this enum.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OverrideError {
    /// The qualified name is not of the form `<module.path>.<function>`.
    #[error("malformed override name {name:?}: expected <module.path>.<function>")]
    MalformedName {
        /// The offending name.
        name: String,
    },

    /// No module is registered under this path.
    #[error("override module {module} not found (resolving {name})")]
    UnknownModule {
        /// The module path.
        module: String,
        /// The full qualified name being resolved.
        name: String,
    },

    /// The module exists but has no function of this name.
    #[error("override module {module} has no function {function}")]
    UnknownFunction {
        /// The module path.
        module: String,
        /// The missing function name.
        function: String,
    },

    /// The registered function's signature differs from the decorated one.
    #[error("override {name} for {setting} has signature {found}, expected {expected}")]
    SignatureMismatch {
        /// The qualified name.
        name: String,
        /// The settings key being resolved.
        setting: String,
        /// Signature of the decorated function, as `(args, return)`.
        expected: &'static str,
        /// Signature the override was registered with.
        found: &'static str,
    },

    /// The settings value itself was unreadable.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
