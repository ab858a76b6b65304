//! Sequential or parallel evaluation of independent effects.
//!
//! Applicative combination (`ap`, `map2_with`, `traverse`, `sequence`) runs
//! effects whose inputs do not depend on each other, so they may run
//! concurrently. Whether they do is chosen per call with [`ApplyMode`];
//! there is no crate-wide default.

use rayon::prelude::*;

/// How independent effects are evaluated.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::{ApplyMode, IO};
///
/// for mode in [ApplyMode::Sequential, ApplyMode::Parallel] {
///     let sum = IO::pure(20).map2_with(IO::pure(22), mode, |a, b| a + b);
///     assert_eq!(sum.run_unsafe(), 42);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplyMode {
    /// One after the other on the calling thread, left side first.
    Sequential,
    /// Both sides on the rayon thread pool, joined before combining.
    Parallel,
}

impl ApplyMode {
    /// Runs both thunks and returns both results.
    ///
    /// Both always run to completion, in either mode.
    pub(crate) fn join<A, B, L, R>(self, left: L, right: R) -> (A, B)
    where
        A: Send,
        B: Send,
        L: FnOnce() -> A + Send,
        R: FnOnce() -> B + Send,
    {
        match self {
            Self::Sequential => {
                let a = left();
                let b = right();
                (a, b)
            }
            Self::Parallel => rayon::join(left, right),
        }
    }

    /// Applies `function` to every item, keeping the input order.
    pub(crate) fn map_all<T, B, F>(self, items: Vec<T>, function: F) -> Vec<B>
    where
        T: Send,
        B: Send,
        F: Fn(T) -> B + Send + Sync,
    {
        match self {
            Self::Sequential => items.into_iter().map(function).collect(),
            Self::Parallel => items.into_par_iter().map(function).collect(),
        }
    }
}
