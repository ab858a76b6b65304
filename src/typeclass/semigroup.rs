//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Semigroup;
//! use std::cmp::Ordering;
//!
//! // Lexicographic comparison: the first non-equal ordering wins.
//! assert_eq!(Ordering::Equal.combine(Ordering::Less), Ordering::Less);
//! assert_eq!(Ordering::Greater.combine(Ordering::Less), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::time::Duration;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Semigroup;
///
/// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
/// ```
pub trait Semigroup {
    /// Combines two values. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements with [`Semigroup::combine`].
    ///
    /// Returns `None` for an empty iterator; see
    /// [`Monoid::combine_all`](super::Monoid::combine_all) for a total version.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

// Comparators compose lexicographically: keep the first decisive ordering.
impl Semigroup for Ordering {
    fn combine(self, other: Self) -> Self {
        self.then(other)
    }
}

impl Semigroup for Duration {
    fn combine(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}
