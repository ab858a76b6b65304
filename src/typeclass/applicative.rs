//! Applicative type class - lifting values and combining independent contexts.
//!
//! # Laws
//!
//! ```text
//! F::pure(a).map2(F::pure(b), f) == F::pure(f(a, b))
//! fa.map2(F::pure(()), |a, _| a) == fa
//! ```
//!
//! The deferred effects in [`crate::effect`] additionally offer an
//! `ap(mode)` that can evaluate both sides in parallel; this trait only
//! covers the strict, already-evaluated contexts.

use super::functor::Functor;

/// A functor that can lift plain values and combine two contexts.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Applicative;
///
/// let lifted: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(lifted, Some(42));
///
/// let sum = Some(1).map2(Some(2), |a, b| a + b);
/// assert_eq!(sum, Some(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two contexts.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    /// The first failure wins.
    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_map2_with_none_is_none() {
        assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
    }

    #[rstest]
    fn result_map2_keeps_first_error() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.map2(second, |a, b| a + b), Err("first"));
    }

    #[rstest]
    fn result_product_pairs_values() {
        let left: Result<i32, String> = Ok(1);
        assert_eq!(left.product(Ok("one")), Ok((1, "one")));
    }

    #[rstest]
    fn result_pure_lifts_into_ok() {
        let lifted: Result<&str, String> = <Result<(), String>>::pure("value");
        assert_eq!(lifted, Ok("value"));
    }
}
