//! # kleisli
//!
//! Composable control flow for effectful computations.
//!
//! ## Overview
//!
//! - **Control**: [`Either`](control::Either), `bracket` for guaranteed
//!   resource release, stack-safe `tail_rec`
//! - **Retry**: composable [`RetryPolicy`](retry::RetryPolicy) values and a
//!   single policy-driven retry loop
//! - **Effects**: deferred [`IO`](effect::IO), [`IOEither`](effect::IOEither),
//!   [`IOOption`](effect::IOOption) and
//!   [`ReaderIOEither`](effect::ReaderIOEither) with sequential or parallel
//!   applicative combination
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid
//!
//! The control algorithms are written once against plain `Result`-like
//! outcomes; each effect type delegates to them.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: `Either`, `bracket`, `tail_rec`
//! - `retry`: Retry policies and the retry loop
//! - `effect`: Deferred effects and filesystem helpers
//!
//! All features are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use kleisli::prelude::*;
//! use std::time::Duration;
//!
//! let policy = RetryPolicy::exponential_backoff(Duration::from_millis(1))
//!     .capped_delay(Duration::from_millis(4))
//!     .combine(RetryPolicy::limit_retries(3));
//!
//! let io = IOEither::<String, u32>::retrying(
//!     &policy,
//!     |status| {
//!         let attempt = status.iter_number;
//!         IOEither::new(move || if attempt == 2 { Ok(7) } else { Err("busy".to_string()) })
//!     },
//!     Result::is_err,
//! )
//! .fmap(|n| n * 6);
//!
//! assert_eq!(io.run_unsafe(), Ok(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "retry")]
    pub use crate::retry::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "retry")]
pub mod retry;

#[cfg(feature = "effect")]
pub mod effect;
