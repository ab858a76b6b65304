//! Functor type class - mapping over a value inside a context.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Functor;
//!
//! let parsed: Result<i32, String> = Ok(20);
//! assert_eq!(parsed.fmap(|n| n + 1), Ok(21));
//! ```

use super::higher::TypeConstructor;

/// A type class for contexts that can be mapped over.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value inside the context.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the inner value with `value`, keeping the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Functor;
    ///
    /// let failed: Result<i32, &str> = Err("boom");
    /// assert_eq!(Functor::replace(failed, "unused"), Err("boom"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the inner value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}
