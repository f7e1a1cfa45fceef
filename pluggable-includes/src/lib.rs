#![deny(missing_docs)]
//! Template include plugins.
//!
//! Plugins register under a namespace, one per host [`Environment`]
//! (`lms.template_includes`, `studio.template_includes`). When a template
//! renders a named slot, [`IncludesRegistry::plugin_includes`] asks every
//! plugin in the environment's namespace for a fragment and concatenates
//! the non-empty ones, in plugin-name order, into [`SafeMarkup`].
//!
//! An unknown environment renders nothing.

mod environment;
mod markup;
mod plugin;
mod registry;

pub use environment::{Environment, UnknownEnvironment};
pub use markup::SafeMarkup;
pub use plugin::{TemplateIncludePlugin, include_fn};
pub use registry::IncludesRegistry;

/// Namespace of LMS template include plugins.
pub const LMS_TEMPLATE_INCLUDES_NAMESPACE: &str = "lms.template_includes";

/// Namespace of Studio template include plugins.
pub const STUDIO_TEMPLATE_INCLUDES_NAMESPACE: &str = "studio.template_includes";
