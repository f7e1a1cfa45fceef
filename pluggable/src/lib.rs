#![deny(missing_docs)]
//! # pluggable: umbrella crate
//!
//! A single import surface for settings-driven override chains and
//! template include plugins. Re-exports the member crates behind feature
//! flags, plus a `prelude` for the common path.

#[cfg(feature = "includes")]
pub use pluggable_includes;
#[cfg(feature = "override")]
pub use pluggable_override;
#[cfg(feature = "settings")]
pub use pluggable_settings;

/// Common imports for wiring overrides and include plugins.
pub mod prelude {
    #[cfg(feature = "settings")]
    pub use pluggable_settings::{
        EnvSettings, LayeredSettings, OverrideSetting, Settings, SettingsError, SettingsSource,
    };

    #[cfg(feature = "override")]
    pub use pluggable_override::{
        Chain, Next, OverrideEnv, OverrideError, OverrideRegistry, PluggableOverride,
    };

    #[cfg(feature = "includes")]
    pub use pluggable_includes::{
        Environment, IncludesRegistry, SafeMarkup, TemplateIncludePlugin, include_fn,
    };
}
