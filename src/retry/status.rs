//! The state threaded through a retry loop.

use std::time::Duration;

/// Iteration counter and delay bookkeeping of a retry loop.
///
/// A fresh status (`RetryStatus::default()`) is created before the first
/// attempt. After every attempt the policy wants to repeat, the loop moves
/// to [`RetryStatus::advance`]d status; the value itself never changes.
///
/// # Examples
///
/// ```rust
/// use kleisli::retry::RetryStatus;
/// use std::time::Duration;
///
/// let start = RetryStatus::default();
/// let next = start.advance(Duration::from_millis(50));
///
/// assert_eq!(next.iter_number, 1);
/// assert_eq!(next.cumulative_delay, Duration::from_millis(50));
/// assert_eq!(next.previous_delay, Some(Duration::from_millis(50)));
/// assert_eq!(start.iter_number, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RetryStatus {
    /// Number of retries performed so far (0 before the first retry).
    pub iter_number: usize,
    /// Sum of every delay waited so far.
    pub cumulative_delay: Duration,
    /// The delay waited before the current attempt, `None` on the first attempt.
    pub previous_delay: Option<Duration>,
}

impl RetryStatus {
    /// The status after waiting `delay` once more.
    #[must_use]
    pub const fn advance(&self, delay: Duration) -> Self {
        Self {
            iter_number: self.iter_number.saturating_add(1),
            cumulative_delay: self.cumulative_delay.saturating_add(delay),
            previous_delay: Some(delay),
        }
    }
}
