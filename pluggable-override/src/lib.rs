#![deny(missing_docs)]
//! Settings-driven override chains.
//!
//! A [`PluggableOverride`] wraps a base function together with a settings
//! key. When the key names one or more override functions, each call runs
//! them as a chain: the first configured override is entered first and
//! receives a [`Next`] continuation leading to the second, and so on down
//! to the base function. An override may run its continuation once, or
//! return without it to short-circuit every inner stage.
//!
//! Override functions are registered explicitly in an [`OverrideRegistry`]
//! under `<module.path>.<function>` names, so settings stay plain strings
//! while signatures stay checked: resolving a name registered with a
//! different `(A, R)` is a [`OverrideError::SignatureMismatch`].
//!
//! ```ignore
//! use pluggable_override::*;
//! use pluggable_settings::Settings;
//!
//! fn curve(next: Next<'_, u32, u32>, _score: &u32) -> u32 {
//!     (next.run() + 10).min(100)
//! }
//!
//! let mut registry = OverrideRegistry::new();
//! registry.register("grading.curve", curve)?;
//!
//! let settings = Settings::new().with("SCORE_IMPL", "grading.curve");
//! let env = OverrideEnv::new(settings, registry);
//!
//! let score = PluggableOverride::new("SCORE_IMPL", |raw: &u32| *raw);
//! assert_eq!(score.call(&env, &85)?, 95);
//! ```
//!
//! Resolution happens per call against read-only settings, so one
//! [`OverrideEnv`] can be shared across threads without locking.

pub mod chain;
pub mod error;
pub mod pluggable;
pub mod registry;
pub mod resolve;

pub use chain::*;
pub use error::*;
pub use pluggable::*;
pub use registry::*;
pub use resolve::*;
