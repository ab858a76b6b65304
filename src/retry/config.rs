//! Declarative retry configuration.
//!
//! [`RetryConfig`] describes a policy as data so it can live in a config
//! file. Durations use the humantime format (`"250ms"`, `"2s"`, `"1m"`).
//!
//! ```rust
//! use kleisli::retry::{BackoffStrategy, RetryConfig};
//! use std::time::Duration;
//!
//! let config: RetryConfig = serde_json::from_str(
//!     r#"{
//!         "max_retries": 4,
//!         "backoff": { "strategy": "exponential", "base": "50ms" },
//!         "max_delay": "300ms"
//!     }"#,
//! )?;
//!
//! assert_eq!(config.max_retries, Some(4));
//! assert_eq!(
//!     config.backoff,
//!     BackoffStrategy::Exponential { base: Duration::from_millis(50) }
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::typeclass::Semigroup;

use super::policy::RetryPolicy;

/// How the delay grows between retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum BackoffStrategy {
    /// Wait the same delay every time.
    Constant {
        /// The delay.
        #[serde(with = "humantime_serde")]
        delay: Duration,
    },
    /// Double the delay every time, starting at `base`.
    Exponential {
        /// The first delay.
        #[serde(with = "humantime_serde")]
        base: Duration,
    },
    /// Grow the delay along the Fibonacci sequence, starting at `base`.
    Fibonacci {
        /// The first delay.
        #[serde(with = "humantime_serde")]
        base: Duration,
    },
}

impl Default for BackoffStrategy {
    fn default() -> Self {
        Self::Exponential {
            base: default_base_delay(),
        }
    }
}

impl BackoffStrategy {
    /// The unbounded policy this strategy describes.
    pub fn policy(&self) -> RetryPolicy {
        match *self {
            Self::Constant { delay } => RetryPolicy::constant_delay(delay),
            Self::Exponential { base } => RetryPolicy::exponential_backoff(base),
            Self::Fibonacci { base } => RetryPolicy::fibonacci_backoff(base),
        }
    }
}

/// A serialisable description of a [`RetryPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries; `None` for no count limit.
    #[serde(default = "default_max_retries")]
    pub max_retries: Option<usize>,

    /// Delay growth.
    #[serde(default)]
    pub backoff: BackoffStrategy,

    /// Upper bound for a single delay.
    #[serde(default, with = "humantime_serde")]
    pub max_delay: Option<Duration>,

    /// Upper bound for the sum of all delays.
    #[serde(default, with = "humantime_serde")]
    pub max_total_delay: Option<Duration>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            backoff: BackoffStrategy::default(),
            max_delay: None,
            max_total_delay: None,
        }
    }
}

impl RetryConfig {
    /// Builds the policy: backoff, then the per-delay cap, then the count
    /// limit, then the cumulative budget.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::retry::{RetryConfig, RetryStatus};
    /// use std::time::Duration;
    ///
    /// let policy = RetryConfig::default().policy();
    /// let first = policy.apply(&RetryStatus::default()).expect("retries by default");
    /// assert_eq!(first.previous_delay, Some(Duration::from_millis(100)));
    /// ```
    pub fn policy(&self) -> RetryPolicy {
        let mut policy = self.backoff.policy();
        if let Some(max_delay) = self.max_delay {
            policy = policy.capped_delay(max_delay);
        }
        if let Some(max_retries) = self.max_retries {
            policy = policy.combine(RetryPolicy::limit_retries(max_retries));
        }
        if let Some(budget) = self.max_total_delay {
            policy = policy.limit_retries_by_cumulative_delay(budget);
        }
        policy
    }
}

#[allow(clippy::unnecessary_wraps)]
const fn default_max_retries() -> Option<usize> {
    Some(3)
}

const fn default_base_delay() -> Duration {
    Duration::from_millis(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::RetryStatus;
    use rstest::rstest;

    fn delays(policy: &RetryPolicy) -> Vec<u128> {
        let mut status = RetryStatus::default();
        let mut delays = Vec::new();
        while let Some(next) = policy.apply(&status) {
            delays.push(next.previous_delay.unwrap_or_default().as_millis());
            status = next;
            if delays.len() > 64 {
                break;
            }
        }
        delays
    }

    #[rstest]
    fn default_config_is_three_exponential_retries() {
        assert_eq!(delays(&RetryConfig::default().policy()), vec![100, 200, 400]);
    }

    #[rstest]
    fn empty_document_uses_defaults() {
        let config: RetryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RetryConfig::default());
    }

    #[rstest]
    fn constant_backoff_with_cap_and_budget() {
        let config: RetryConfig = serde_json::from_str(
            r#"{
                "max_retries": null,
                "backoff": { "strategy": "constant", "delay": "40ms" },
                "max_delay": "25ms",
                "max_total_delay": "100ms"
            }"#,
        )
        .unwrap();

        assert_eq!(delays(&config.policy()), vec![25, 25, 25, 25]);
    }

    #[rstest]
    fn fibonacci_strategy_parses() {
        let config: RetryConfig = serde_json::from_str(
            r#"{ "max_retries": 5, "backoff": { "strategy": "fibonacci", "base": "1s" } }"#,
        )
        .unwrap();
        assert_eq!(delays(&config.policy()), vec![1000, 1000, 2000, 3000, 5000]);
    }

    #[rstest]
    fn config_round_trips_through_json() {
        let config = RetryConfig {
            max_retries: Some(2),
            backoff: BackoffStrategy::Constant {
                delay: Duration::from_secs(2),
            },
            max_delay: Some(Duration::from_secs(1)),
            max_total_delay: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"strategy\":\"constant\""));
        assert_eq!(serde_json::from_str::<RetryConfig>(&json).unwrap(), config);
    }

    #[rstest]
    fn unknown_strategy_is_rejected() {
        let parsed = serde_json::from_str::<RetryConfig>(
            r#"{ "backoff": { "strategy": "random", "base": "1s" } }"#,
        );
        assert!(parsed.is_err());
    }
}
