//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: mapping over a value in a context
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroups with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses generic
//! associated types so that `Functor` and `Monad` can be stated once and
//! implemented for `Option`, `Result` and [`Either`](crate::control::Either).
//!
//! The deferred effects in [`crate::effect`] box `'static` closures and
//! therefore expose `fmap`/`flat_map`/`pure` as inherent methods instead.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{Functor, Monad, Monoid, Semigroup};
//!
//! let doubled = Some(21).fmap(|n| n * 2);
//! assert_eq!(doubled, Some(42));
//!
//! let chained: Result<i32, String> = Ok(4).flat_map(|n| Ok(n + 1));
//! assert_eq!(chained, Ok(5));
//!
//! assert_eq!(String::combine_all(["a".to_string(), "b".to_string()]), "ab");
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
