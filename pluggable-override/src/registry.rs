//! Explicit registration of override functions by qualified name.
//!
//! Hosts register every function that settings may name at startup.
//! Settings then refer to them as `<module.path>.<function>`, and
//! resolution recovers the function by its exact signature.

use crate::chain::{Next, OverrideFn, override_fn};
use crate::error::OverrideError;
use std::any::Any;
use std::collections::HashMap;

/// A `<module.path>.<function>` name, split on the last `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualifiedName<'a> {
    module: &'a str,
    function: &'a str,
}

impl<'a> QualifiedName<'a> {
    /// Split `name` into module path and function name.
    ///
    /// Every dotted segment must be non-empty and free of whitespace.
    pub fn parse(name: &'a str) -> Result<Self, OverrideError> {
        let malformed = || OverrideError::MalformedName {
            name: name.to_owned(),
        };
        let (module, function) = name.rsplit_once('.').ok_or_else(malformed)?;
        let bad_segment = |s: &str| s.is_empty() || s.chars().any(char::is_whitespace);
        if bad_segment(function) || module.split('.').any(bad_segment) {
            return Err(malformed());
        }
        Ok(Self { module, function })
    }

    /// The module path.
    pub fn module(&self) -> &'a str {
        self.module
    }

    /// The function name.
    pub fn function(&self) -> &'a str {
        self.function
    }
}

impl std::fmt::Display for QualifiedName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.module, self.function)
    }
}

fn signature<A: 'static, R: 'static>() -> &'static str {
    std::any::type_name::<fn(&A) -> R>()
}

struct Entry {
    // Always an `OverrideFn<A, R>` for the `A`, `R` named in `signature`.
    func: Box<dyn Any + Send + Sync>,
    signature: &'static str,
}

/// The functions registered under one module path.
pub struct OverrideModule {
    path: String,
    functions: HashMap<String, Entry>,
}

impl OverrideModule {
    fn new(path: String) -> Self {
        Self {
            path,
            functions: HashMap::new(),
        }
    }

    /// The module path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Register `f` as `function` in this module. Replaces any earlier
    /// function of the same name.
    pub fn insert<A, R, F>(&mut self, function: impl Into<String>, f: F) -> &mut Self
    where
        A: 'static,
        R: 'static,
        F: for<'a> Fn(Next<'a, A, R>, &'a A) -> R + Send + Sync + 'static,
    {
        let function = function.into();
        let entry = Entry {
            func: Box::new(override_fn(f)),
            signature: signature::<A, R>(),
        };
        if self.functions.insert(function.clone(), entry).is_some() {
            tracing::warn!(
                module = %self.path,
                function = %function,
                "pluggable.override.replaced"
            );
        }
        self
    }

    /// True if `function` is registered here.
    pub fn contains(&self, function: &str) -> bool {
        self.functions.contains_key(function)
    }

    /// Registered function names, in no particular order.
    pub fn functions(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for OverrideModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut functions: Vec<(&str, &str)> = self
            .functions
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.signature))
            .collect();
        functions.sort_unstable();
        f.debug_struct("OverrideModule")
            .field("path", &self.path)
            .field("functions", &functions)
            .finish()
    }
}

/// Every override function the host can name from settings.
///
/// Populated at startup, then shared read-only (usually behind an `Arc`).
#[derive(Default)]
pub struct OverrideRegistry {
    modules: HashMap<String, OverrideModule>,
}

impl OverrideRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The module at `path`, created on first use.
    pub fn module(&mut self, path: impl Into<String>) -> &mut OverrideModule {
        let path = path.into();
        self.modules
            .entry(path.clone())
            .or_insert_with(|| OverrideModule::new(path))
    }

    /// Register `f` under a qualified name such as
    /// `"reports.grades.weighted_average"`.
    pub fn register<A, R, F>(&mut self, qualified_name: &str, f: F) -> Result<&mut Self, OverrideError>
    where
        A: 'static,
        R: 'static,
        F: for<'a> Fn(Next<'a, A, R>, &'a A) -> R + Send + Sync + 'static,
    {
        let name = QualifiedName::parse(qualified_name)?;
        self.module(name.module()).insert(name.function(), f);
        tracing::debug!(override_name = %name, "pluggable.override.register");
        Ok(self)
    }

    /// True if `qualified_name` parses and names a registered function.
    pub fn contains(&self, qualified_name: &str) -> bool {
        match QualifiedName::parse(qualified_name) {
            Ok(name) => self
                .modules
                .get(name.module())
                .is_some_and(|module| module.contains(name.function())),
            Err(_) => false,
        }
    }

    /// Total number of registered functions.
    pub fn len(&self) -> usize {
        self.modules.values().map(|m| m.functions.len()).sum()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up `qualified_name` with the decorated function's signature.
    ///
    /// `setting` is only used for error reporting.
    pub fn lookup<A: 'static, R: 'static>(
        &self,
        setting: &str,
        qualified_name: &str,
    ) -> Result<OverrideFn<A, R>, OverrideError> {
        let name = QualifiedName::parse(qualified_name)?;
        let module = self
            .modules
            .get(name.module())
            .ok_or_else(|| OverrideError::UnknownModule {
                module: name.module().to_owned(),
                name: qualified_name.to_owned(),
            })?;
        let entry = module
            .functions
            .get(name.function())
            .ok_or_else(|| OverrideError::UnknownFunction {
                module: name.module().to_owned(),
                function: name.function().to_owned(),
            })?;
        entry
            .func
            .downcast_ref::<OverrideFn<A, R>>()
            .cloned()
            .ok_or_else(|| OverrideError::SignatureMismatch {
                name: qualified_name.to_owned(),
                setting: setting.to_owned(),
                expected: signature::<A, R>(),
                found: entry.signature,
            })
    }
}

impl std::fmt::Debug for OverrideRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut modules: Vec<&OverrideModule> = self.modules.values().collect();
        modules.sort_unstable_by(|a, b| a.path.cmp(&b.path));
        f.debug_struct("OverrideRegistry")
            .field("modules", &modules)
            .finish()
    }
}
