//! The continuation chain.
//!
//! Overrides wrap the original function the same way axum's `from_fn`
//! middleware wraps a handler: each override receives a [`Next`] it can run
//! to fall through to the remaining chain, or drop to short-circuit.

use std::sync::Arc;

/// The undecorated function.
pub type BaseFn<A, R> = Arc<dyn Fn(&A) -> R + Send + Sync>;

/// A replacement function. Receives the continuation and the original
/// arguments, returns the decorated function's return type.
pub type OverrideFn<A, R> = Arc<dyn for<'a> Fn(Next<'a, A, R>, &'a A) -> R + Send + Sync>;

/// Wrap a closure or fn item as an [`OverrideFn`].
pub fn override_fn<A, R, F>(f: F) -> OverrideFn<A, R>
where
    F: for<'a> Fn(Next<'a, A, R>, &'a A) -> R + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The remaining overrides plus the original function, bound to the call's
/// arguments.
///
/// Consumed on [`run`](Next::run), so a stage can fall through at most once.
pub struct Next<'a, A, R> {
    base: &'a (dyn Fn(&A) -> R + Send + Sync),
    overrides: &'a [OverrideFn<A, R>],
    args: &'a A,
}

impl<'a, A, R> Next<'a, A, R> {
    /// Continue the chain, eventually calling the original function.
    pub fn run(self) -> R {
        match self.overrides.split_first() {
            Some((outer, inner)) => {
                let next = Next {
                    base: self.base,
                    overrides: inner,
                    args: self.args,
                };
                outer(next, self.args)
            }
            // End of chain: the original function
            None => (self.base)(self.args),
        }
    }

    /// Overrides still ahead of the original function.
    pub fn remaining(&self) -> usize {
        self.overrides.len()
    }

    /// The arguments the chain was invoked with.
    pub fn args(&self) -> &'a A {
        self.args
    }
}

impl<A, R> std::fmt::Debug for Next<'_, A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.overrides.len())
            .finish_non_exhaustive()
    }
}

/// A resolved chain: overrides in configured order (first = outermost)
/// around the original function.
pub struct Chain<A, R> {
    base: BaseFn<A, R>,
    overrides: Vec<OverrideFn<A, R>>,
}

impl<A, R> Chain<A, R> {
    /// Compose `overrides` around `base`.
    pub fn new(base: BaseFn<A, R>, overrides: Vec<OverrideFn<A, R>>) -> Self {
        Self { base, overrides }
    }

    /// Number of overrides in the chain.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// True when the chain is just the original function.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Bind the arguments, producing the outermost continuation.
    pub fn bind<'a>(&'a self, args: &'a A) -> Next<'a, A, R> {
        Next {
            base: &*self.base,
            overrides: &self.overrides,
            args,
        }
    }

    /// Run the whole chain.
    pub fn invoke(&self, args: &A) -> R {
        self.bind(args).run()
    }
}

impl<A, R> Clone for Chain<A, R> {
    fn clone(&self) -> Self {
        Self {
            base: Arc::clone(&self.base),
            overrides: self.overrides.clone(),
        }
    }
}

impl<A, R> std::fmt::Debug for Chain<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("overrides", &self.overrides.len())
            .finish_non_exhaustive()
    }
}
