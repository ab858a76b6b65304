//! Monad type class - sequencing computations that depend on each other.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// An applicative whose next step may depend on the previous value.
///
/// The function passed to [`Monad::flat_map`] is a Kleisli arrow: it maps a
/// plain value to a value in the context.
pub trait Monad: Applicative {
    /// Sequences `function` after this computation.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after this computation, discarding this value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Some(value) => function(value),
            None => None,
        }
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        match self {
            Ok(value) => function(value),
            Err(error) => Err(error),
        }
    }
}
