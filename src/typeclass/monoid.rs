//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{Monoid, Semigroup};
//! use std::time::Duration;
//!
//! let total = Duration::combine_all([Duration::from_millis(5), Duration::from_millis(7)]);
//! assert_eq!(total, Duration::from_millis(12));
//! ```

use std::cmp::Ordering;
use std::time::Duration;

use super::semigroup::Semigroup;

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element of [`Semigroup::combine`].
    fn empty() -> Self;

    /// Combines every element, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl Monoid for Ordering {
    fn empty() -> Self {
        Self::Equal
    }
}

impl Monoid for Duration {
    fn empty() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ordering::Less)]
    #[case(Ordering::Equal)]
    #[case(Ordering::Greater)]
    fn ordering_identity_laws(#[case] ordering: Ordering) {
        assert_eq!(Ordering::empty().combine(ordering), ordering);
        assert_eq!(ordering.combine(Ordering::empty()), ordering);
    }

    #[rstest]
    fn combine_all_of_empty_is_identity() {
        assert_eq!(String::combine_all(Vec::<String>::new()), "");
    }

    #[rstest]
    fn option_combine_all_skips_none() {
        let values = vec![None, Some("a".to_string()), None, Some("b".to_string())];
        assert_eq!(Option::combine_all(values), Some("ab".to_string()));
    }
}
