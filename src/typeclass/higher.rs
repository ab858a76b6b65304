//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Option<_>` or `Result<_, E>` as type
//! constructors directly. [`TypeConstructor`] records the currently applied
//! type (`Inner`) and how to re-apply the constructor to a different type
//! (`WithType<B>`), which is enough to state `Functor` and `Monad`.
//!
//! # Example
//!
//! ```rust
//! use kleisli::typeclass::TypeConstructor;
//!
//! fn reapply<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = reapply(Some(42));
//! assert_eq!(none, None);
//! ```

/// A type constructor applied to some type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
