//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is the two-branch sum type used for:
//!
//! - the step result of [`tail_rec`](super::tail_rec) (`Left` continues,
//!   `Right` finishes)
//! - error handling where `Left` is the failure and `Right` the success
//!
//! It is right-biased: [`Functor`] and [`Monad`] act on the `Right` value,
//! and it converts losslessly to and from `Result<R, L>`.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(7);
//! let message = parsed.fold(|error| format!("failed: {error}"), |n| format!("got {n}"));
//! assert_eq!(message, "got 7");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

use super::outcome::IntoResult;

/// A value that is either `Left(L)` or `Right(R)`, never both, never neither.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left alternative: failure, or "keep going" in a tail-recursive step.
    Left(L),
    /// The right alternative: success, or the final value of a tail-recursive step.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Consumes the either and returns the left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Consumes the either and returns the right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Maps the left value, leaving a `Right` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let failed: Either<&str, i32> = Either::Left("timeout");
    /// assert_eq!(failed.map_left(str::len), Either::Left(7));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the right value, leaving a `Left` untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps whichever side is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the either by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the right value, or computes one from the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let failed: Either<&str, usize> = Either::Left("four");
    /// assert_eq!(failed.right_or_else(str::len), 4);
    /// ```
    #[inline]
    pub fn right_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L, R> IntoResult for Either<L, R> {
    type Value = R;
    type Error = L;

    #[inline]
    fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

// =============================================================================
// Type class instances (right-biased)
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}
