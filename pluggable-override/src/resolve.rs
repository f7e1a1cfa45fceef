//! Resolving a settings key into override functions.

use crate::chain::OverrideFn;
use crate::error::OverrideError;
use crate::registry::OverrideRegistry;
use pluggable_settings::SettingsSource;
use std::sync::Arc;

/// Resolve the overrides configured under `setting_key`, outermost first.
///
/// An absent or falsy setting resolves to no overrides. The first name
/// that fails to resolve aborts resolution.
pub fn resolve_overrides<A: 'static, R: 'static>(
    settings: &dyn SettingsSource,
    registry: &OverrideRegistry,
    setting_key: &str,
) -> Result<Vec<OverrideFn<A, R>>, OverrideError> {
    let setting = settings.override_setting(setting_key).inspect_err(|e| {
        tracing::warn!(setting = setting_key, error = %e, "pluggable.override.resolve_failed");
    })?;

    let mut resolved = Vec::with_capacity(setting.len());
    for name in setting.names() {
        match registry.lookup::<A, R>(setting_key, name) {
            Ok(func) => {
                tracing::debug!(setting = setting_key, override_name = %name, "pluggable.override.resolve");
                resolved.push(func);
            }
            Err(e) => {
                tracing::warn!(
                    setting = setting_key,
                    override_name = %name,
                    error = %e,
                    "pluggable.override.resolve_failed"
                );
                return Err(e);
            }
        }
    }
    Ok(resolved)
}

/// The settings source and override registry a host resolves against.
///
/// Cheap to clone; share one per process.
#[derive(Clone)]
pub struct OverrideEnv {
    settings: Arc<dyn SettingsSource>,
    registry: Arc<OverrideRegistry>,
}

impl OverrideEnv {
    /// Bundle a settings source and a populated registry.
    pub fn new(settings: impl SettingsSource + 'static, registry: OverrideRegistry) -> Self {
        Self {
            settings: Arc::new(settings),
            registry: Arc::new(registry),
        }
    }

    /// Bundle already-shared parts.
    pub fn from_shared(settings: Arc<dyn SettingsSource>, registry: Arc<OverrideRegistry>) -> Self {
        Self { settings, registry }
    }

    /// The settings source.
    pub fn settings(&self) -> &dyn SettingsSource {
        &*self.settings
    }

    /// The override registry.
    pub fn registry(&self) -> &OverrideRegistry {
        &self.registry
    }

    /// Resolve the overrides configured under `setting_key`.
    pub fn resolve<A: 'static, R: 'static>(
        &self,
        setting_key: &str,
    ) -> Result<Vec<OverrideFn<A, R>>, OverrideError> {
        resolve_overrides(&*self.settings, &self.registry, setting_key)
    }
}

impl std::fmt::Debug for OverrideEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideEnv")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
