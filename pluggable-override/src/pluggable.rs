//! The decorator: a base function plus the settings key that can override it.

use crate::chain::{BaseFn, Chain};
use crate::error::OverrideError;
use crate::resolve::OverrideEnv;
use std::sync::Arc;

/// A function whose behavior settings can replace.
///
/// Each [`call`](Self::call) reads the setting, resolves the named
/// overrides, and runs them around the base function, first-configured
/// outermost. With nothing configured, `call` is the base function.
///
/// Multiple arguments are passed as a tuple or struct `A`.
pub struct PluggableOverride<A, R> {
    setting_key: String,
    base: BaseFn<A, R>,
}

impl<A: 'static, R: 'static> PluggableOverride<A, R> {
    /// Decorate `base`, overridable through `setting_key`.
    pub fn new<F>(setting_key: impl Into<String>, base: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self {
            setting_key: setting_key.into(),
            base: Arc::new(base),
        }
    }

    /// The settings key consulted on every call.
    pub fn setting_key(&self) -> &str {
        &self.setting_key
    }

    /// Resolve and build the chain without invoking it.
    ///
    /// Hosts can call this at startup to fail fast on bad configuration.
    pub fn resolve(&self, env: &OverrideEnv) -> Result<Chain<A, R>, OverrideError> {
        let overrides = env.resolve::<A, R>(&self.setting_key)?;
        Ok(Chain::new(Arc::clone(&self.base), overrides))
    }

    /// Resolve, build and invoke the chain.
    ///
    /// `Err` means the configuration is broken and nothing ran. Errors from
    /// the functions themselves come back inside `R` untouched.
    pub fn call(&self, env: &OverrideEnv, args: &A) -> Result<R, OverrideError> {
        let chain = self.resolve(env)?;
        tracing::debug!(
            setting = %self.setting_key,
            overrides = chain.len(),
            "pluggable.override.invoke"
        );
        Ok(chain.invoke(args))
    }

    /// Invoke the base function, ignoring settings.
    pub fn call_base(&self, args: &A) -> R {
        (self.base)(args)
    }
}

impl<A, R> Clone for PluggableOverride<A, R> {
    fn clone(&self) -> Self {
        Self {
            setting_key: self.setting_key.clone(),
            base: Arc::clone(&self.base),
        }
    }
}

impl<A, R> std::fmt::Debug for PluggableOverride<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluggableOverride")
            .field("setting_key", &self.setting_key)
            .finish_non_exhaustive()
    }
}
