//! The policy-driven retry loop.
//!
//! ```text
//! Attempting(status0) --action--> outcome
//!     check(outcome) == false           -> Done(outcome)
//!     policy.apply(status) == None      -> Done(outcome)
//!     policy.apply(status) == Some(next) -> sleep(next delay), Attempting(next)
//! ```
//!
//! The loop has no error of its own: it always ends with the outcome of the
//! last attempt. [`retrying_detailed`] additionally reports whether the
//! policy ran out, for callers that need to tell "gave up" from "succeeded
//! or failed for good".

use std::time::Duration;

use super::policy::RetryPolicy;
use super::status::RetryStatus;

/// Something that can wait between attempts.
///
/// Any `FnMut(Duration)` is a sleeper, which makes a recording closure a
/// convenient test double.
pub trait Sleeper {
    /// Blocks for `duration`.
    fn sleep(&mut self, duration: Duration);
}

impl<F> Sleeper for F
where
    F: FnMut(Duration),
{
    fn sleep(&mut self, duration: Duration) {
        self(duration);
    }
}

/// Blocks the calling thread with [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// The result of a retry loop together with how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retried<A> {
    /// The outcome of the final attempt.
    pub value: A,
    /// The status the final attempt ran with.
    pub status: RetryStatus,
    /// `true` when the check still asked for a retry but the policy gave up.
    pub exhausted: bool,
}

impl<A> Retried<A> {
    /// Number of times the action ran.
    pub const fn attempts(&self) -> usize {
        self.status.iter_number.saturating_add(1)
    }
}

/// Runs `action` until `check` is satisfied or `policy` gives up, sleeping
/// on the calling thread between attempts.
///
/// `check` returns `true` when the outcome should be retried.
///
/// # Examples
///
/// ```rust
/// use kleisli::retry::{RetryPolicy, retrying};
///
/// let mut calls = 0;
/// let result: Result<i32, &str> = retrying(
///     &RetryPolicy::limit_retries(2),
///     |_| {
///         calls += 1;
///         Err("unavailable")
///     },
///     Result::is_err,
/// );
///
/// assert_eq!(result, Err("unavailable"));
/// assert_eq!(calls, 3);
/// ```
pub fn retrying<A, F, C>(policy: &RetryPolicy, action: F, check: C) -> A
where
    F: FnMut(&RetryStatus) -> A,
    C: FnMut(&A) -> bool,
{
    retrying_detailed(policy, ThreadSleeper, action, check).value
}

/// [`retrying`] with an explicit [`Sleeper`].
///
/// # Examples
///
/// ```rust
/// use kleisli::retry::{RetryPolicy, retrying_with};
/// use std::time::Duration;
///
/// let mut waited = Vec::new();
/// let attempts = retrying_with(
///     &RetryPolicy::exponential_backoff(Duration::from_millis(10))
///         .limit_retries_by_cumulative_delay(Duration::from_millis(100)),
///     |delay: Duration| waited.push(delay.as_millis()),
///     |status| status.iter_number,
///     |_| true,
/// );
///
/// assert_eq!(attempts, 3);
/// assert_eq!(waited, vec![10, 20, 40]);
/// ```
pub fn retrying_with<A, S, F, C>(policy: &RetryPolicy, sleeper: S, action: F, check: C) -> A
where
    S: Sleeper,
    F: FnMut(&RetryStatus) -> A,
    C: FnMut(&A) -> bool,
{
    retrying_detailed(policy, sleeper, action, check).value
}

/// The retry loop, reporting the final status and whether the policy was
/// exhausted.
///
/// # Examples
///
/// ```rust
/// use kleisli::retry::{RetryPolicy, ThreadSleeper, retrying_detailed};
///
/// let retried = retrying_detailed(
///     &RetryPolicy::limit_retries(4),
///     ThreadSleeper,
///     |status| status.iter_number,
///     |attempt| *attempt < 2,
/// );
///
/// assert_eq!(retried.value, 2);
/// assert_eq!(retried.attempts(), 3);
/// assert!(!retried.exhausted);
/// ```
pub fn retrying_detailed<A, S, F, C>(
    policy: &RetryPolicy,
    mut sleeper: S,
    mut action: F,
    mut check: C,
) -> Retried<A>
where
    S: Sleeper,
    F: FnMut(&RetryStatus) -> A,
    C: FnMut(&A) -> bool,
{
    let mut status = RetryStatus::default();
    loop {
        let value = action(&status);
        if !check(&value) {
            return Retried {
                value,
                status,
                exhausted: false,
            };
        }

        let Some(next) = policy.apply(&status) else {
            tracing::debug!(
                attempts = status.iter_number.saturating_add(1),
                cumulative_delay = ?status.cumulative_delay,
                "retry policy exhausted"
            );
            return Retried {
                value,
                status,
                exhausted: true,
            };
        };

        let delay = next.previous_delay.unwrap_or_default();
        tracing::debug!(
            iteration = next.iter_number,
            delay = ?delay,
            "retrying after delay"
        );
        sleeper.sleep(delay);
        status = next;
    }
}
