//! Policy-driven retries.
//!
//! - [`RetryStatus`]: iteration and delay bookkeeping
//! - [`RetryPolicy`]: decides whether and how long to wait; a [`Monoid`]
//! - [`retrying`], [`retrying_with`], [`retrying_detailed`]: the retry loop
//! - [`RetryConfig`]: a policy described as configuration data
//!
//! The loop is generic over the outcome type, so one implementation serves
//! plain `Result`s as well as every effect in [`crate::effect`].
//!
//! # Examples
//!
//! ```rust
//! use kleisli::retry::{RetryPolicy, retrying};
//! use kleisli::typeclass::Semigroup;
//! use std::time::Duration;
//!
//! let policy = RetryPolicy::constant_delay(Duration::from_millis(1))
//!     .combine(RetryPolicy::limit_retries(5));
//!
//! let result: Result<usize, String> = retrying(
//!     &policy,
//!     |status| {
//!         if status.iter_number < 2 {
//!             Err(format!("attempt {} failed", status.iter_number))
//!         } else {
//!             Ok(status.iter_number)
//!         }
//!     },
//!     Result::is_err,
//! );
//! assert_eq!(result, Ok(2));
//! ```
//!
//! [`Monoid`]: crate::typeclass::Monoid

mod config;
mod policy;
mod retrying;
mod status;

pub use config::{BackoffStrategy, RetryConfig};
pub use policy::RetryPolicy;
pub use retrying::{Retried, Sleeper, ThreadSleeper, retrying, retrying_detailed, retrying_with};
pub use status::RetryStatus;
