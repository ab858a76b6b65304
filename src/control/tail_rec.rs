//! Stack-safe tail recursion as an explicit loop.
//!
//! Rust does not guarantee tail call elimination, so a deeply recursive
//! function overflows the stack. Here a recursive definition is written as a
//! step function returning [`Either`]: `Left(next)` means "recurse with
//! `next`", `Right(result)` means "done". The driver is a plain `loop`, so
//! stack depth is constant no matter how many logical calls happen.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::{Either, tail_rec};
//!
//! // sum of 1..=n, written as an accumulator-passing recursion
//! let sum = tail_rec((1_000_000_u64, 0_u64), |(n, accumulator)| {
//!     if n == 0 {
//!         Either::Right(accumulator)
//!     } else {
//!         Either::Left((n - 1, accumulator + n))
//!     }
//! });
//! assert_eq!(sum, 500_000_500_000);
//! ```

use super::either::Either;
use super::outcome::IntoResult;

/// Runs `step` from `initial` until it returns `Right`.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::{Either, tail_rec};
///
/// fn is_even(n: u64) -> bool {
///     tail_rec((n, true), |(remaining, even)| {
///         if remaining == 0 {
///             Either::Right(even)
///         } else {
///             Either::Left((remaining - 1, !even))
///         }
///     })
/// }
///
/// assert!(is_even(100_000));
/// assert!(!is_even(100_001));
/// ```
pub fn tail_rec<A, B, F>(initial: A, mut step: F) -> B
where
    F: FnMut(A) -> Either<A, B>,
{
    let mut state = initial;
    loop {
        match step(state) {
            Either::Left(next) => state = next,
            Either::Right(result) => return result,
        }
    }
}

/// Fallible [`tail_rec`]: each step may fail, and the first failure ends
/// the loop.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::{Either, try_tail_rec};
///
/// let result: Result<u32, String> = try_tail_rec(10_u32, |n| match n {
///     0 => Ok(Either::Right(0)),
///     3 => Err(format!("stopped at {n}")),
///     _ => Ok(Either::Left(n - 1)),
/// });
/// assert_eq!(result, Err("stopped at 3".to_string()));
/// ```
pub fn try_tail_rec<A, B, U, F>(initial: A, mut step: F) -> Result<B, U::Error>
where
    F: FnMut(A) -> U,
    U: IntoResult<Value = Either<A, B>>,
{
    let mut state = initial;
    loop {
        match step(state).into_result()? {
            Either::Left(next) => state = next,
            Either::Right(result) => return Ok(result),
        }
    }
}
