//! Retry policies: when to try again and how long to wait first.
//!
//! A [`RetryPolicy`] maps the current [`RetryStatus`] to `Some(delay)`
//! ("wait, then retry") or `None` ("give up"). Policies compose:
//!
//! - [`Semigroup::combine`]: retry only while *both* policies retry, waiting
//!   the longer of the two delays
//! - [`Monoid::empty`]: retry immediately, forever (the identity)
//! - [`RetryPolicy::capped_delay`], [`RetryPolicy::limit_retries_by_delay`],
//!   [`RetryPolicy::limit_retries_by_cumulative_delay`]: adapt one policy
//!
//! # Examples
//!
//! ```rust
//! use kleisli::retry::{RetryPolicy, RetryStatus};
//! use kleisli::typeclass::Semigroup;
//! use std::time::Duration;
//!
//! let policy = RetryPolicy::exponential_backoff(Duration::from_millis(10))
//!     .capped_delay(Duration::from_millis(50))
//!     .combine(RetryPolicy::limit_retries(5));
//!
//! let mut status = RetryStatus::default();
//! let mut delays = Vec::new();
//! while let Some(next) = policy.apply(&status) {
//!     delays.push(next.previous_delay.unwrap_or_default().as_millis());
//!     status = next;
//! }
//! assert_eq!(delays, vec![10, 20, 40, 50, 50]);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::typeclass::{Monoid, Semigroup};

use super::status::RetryStatus;

type Decide = dyn Fn(&RetryStatus) -> Option<Duration> + Send + Sync;

/// A decision function from [`RetryStatus`] to an optional delay.
///
/// Cheap to clone; clones share the same decision function.
#[derive(Clone)]
pub struct RetryPolicy {
    decide: Arc<Decide>,
}

impl RetryPolicy {
    /// Wraps a decision function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::retry::{RetryPolicy, RetryStatus};
    /// use std::time::Duration;
    ///
    /// // linear backoff: 100ms, 200ms, 300ms, ...
    /// let linear = RetryPolicy::new(|status| {
    ///     Some(Duration::from_millis(100) * (status.iter_number as u32 + 1))
    /// });
    /// assert_eq!(
    ///     linear.next_delay(&RetryStatus::default()),
    ///     Some(Duration::from_millis(100))
    /// );
    /// ```
    pub fn new<F>(decide: F) -> Self
    where
        F: Fn(&RetryStatus) -> Option<Duration> + Send + Sync + 'static,
    {
        Self {
            decide: Arc::new(decide),
        }
    }

    /// Retries immediately, at most `max_retries` times.
    pub fn limit_retries(max_retries: usize) -> Self {
        Self::new(move |status| (status.iter_number < max_retries).then_some(Duration::ZERO))
    }

    /// Always retries after `delay`. Unbounded on its own.
    pub fn constant_delay(delay: Duration) -> Self {
        Self::new(move |_| Some(delay))
    }

    /// Retries after `base * 2^n` for the `n`th retry. Unbounded on its own.
    ///
    /// Delays saturate at `Duration::MAX` instead of overflowing.
    pub fn exponential_backoff(base: Duration) -> Self {
        Self::new(move |status| {
            let factor = u32::try_from(status.iter_number)
                .ok()
                .and_then(|exponent| 1_u128.checked_shl(exponent));
            Some(saturating_scale(base, factor))
        })
    }

    /// Retries after `base * fib(n + 1)` for the `n`th retry
    /// (`base`, `base`, `2 * base`, `3 * base`, `5 * base`, ...).
    /// Unbounded on its own.
    pub fn fibonacci_backoff(base: Duration) -> Self {
        Self::new(move |status| {
            Some(saturating_scale(
                base,
                fibonacci(status.iter_number.saturating_add(1)),
            ))
        })
    }

    /// Clamps every delay this policy chooses to at most `max_delay`.
    #[must_use]
    pub fn capped_delay(self, max_delay: Duration) -> Self {
        Self::new(move |status| self.next_delay(status).map(|delay| delay.min(max_delay)))
    }

    /// Gives up as soon as this policy would wait longer than `max_delay`.
    #[must_use]
    pub fn limit_retries_by_delay(self, max_delay: Duration) -> Self {
        Self::new(move |status| self.next_delay(status).filter(|delay| *delay <= max_delay))
    }

    /// Gives up before the total time spent waiting would exceed `budget`.
    #[must_use]
    pub fn limit_retries_by_cumulative_delay(self, budget: Duration) -> Self {
        Self::new(move |status| {
            self.next_delay(status).filter(|delay| {
                status
                    .cumulative_delay
                    .checked_add(*delay)
                    .is_some_and(|total| total <= budget)
            })
        })
    }

    /// The delay before the next retry, or `None` to give up.
    #[inline]
    pub fn next_delay(&self, status: &RetryStatus) -> Option<Duration> {
        (self.decide)(status)
    }

    /// The status of the next attempt, or `None` to give up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::retry::{RetryPolicy, RetryStatus};
    ///
    /// let policy = RetryPolicy::limit_retries(1);
    /// let first = policy.apply(&RetryStatus::default()).expect("one retry allowed");
    /// assert_eq!(first.iter_number, 1);
    /// assert_eq!(policy.apply(&first), None);
    /// ```
    pub fn apply(&self, status: &RetryStatus) -> Option<RetryStatus> {
        self.next_delay(status).map(|delay| status.advance(delay))
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// `base * factor`, saturating at `Duration::MAX` only when the product does
/// not fit. `None` stands for a factor too large for `u128`.
fn saturating_scale(base: Duration, factor: Option<u128>) -> Duration {
    let nanos = base.as_nanos();
    if nanos == 0 {
        return Duration::ZERO;
    }
    factor
        .and_then(|factor| nanos.checked_mul(factor))
        .map_or(Duration::MAX, duration_from_nanos)
}

fn duration_from_nanos(nanos: u128) -> Duration {
    let subsec = u32::try_from(nanos % NANOS_PER_SEC).unwrap_or_default();
    u64::try_from(nanos / NANOS_PER_SEC)
        .map_or(Duration::MAX, |secs| Duration::new(secs, subsec))
}

/// `fib(1) = fib(2) = 1`; `None` once the value no longer fits in a `u128`.
fn fibonacci(n: usize) -> Option<u128> {
    let (mut previous, mut current) = (0_u128, 1_u128);
    for _ in 1..n {
        let next = previous.checked_add(current)?;
        previous = current;
        current = next;
    }
    Some(current)
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RetryPolicy")
            .field("decide", &"<function>")
            .finish()
    }
}

impl Semigroup for RetryPolicy {
    fn combine(self, other: Self) -> Self {
        Self::new(move |status| {
            let left = self.next_delay(status)?;
            let right = other.next_delay(status)?;
            Some(left.max(right))
        })
    }
}

impl Monoid for RetryPolicy {
    fn empty() -> Self {
        Self::constant_delay(Duration::ZERO)
    }
}
