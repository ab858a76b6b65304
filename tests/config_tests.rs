#![cfg(feature = "retry")]
//! Loading retry policies from configuration.

use std::time::Duration;

use kleisli::retry::{BackoffStrategy, RetryConfig, RetryStatus};
use rstest::rstest;

fn delays(config: &RetryConfig) -> Vec<Duration> {
    let policy = config.policy();
    let mut status = RetryStatus::default();
    let mut delays = Vec::new();
    while let Some(next) = policy.apply(&status) {
        delays.push(next.previous_delay.unwrap_or_default());
        status = next;
        if delays.len() > 32 {
            break;
        }
    }
    delays
}

#[rstest]
fn empty_object_uses_defaults() {
    let config: RetryConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config, RetryConfig::default());
    assert_eq!(
        delays(&config),
        vec![Duration::from_millis(100), Duration::from_millis(200), Duration::from_millis(400)]
    );
}

#[rstest]
#[case(
    r#"{"strategy": "constant", "delay": "1s"}"#,
    BackoffStrategy::Constant { delay: Duration::from_secs(1) }
)]
#[case(
    r#"{"strategy": "exponential", "base": "20ms"}"#,
    BackoffStrategy::Exponential { base: Duration::from_millis(20) }
)]
#[case(
    r#"{"strategy": "fibonacci", "base": "2m"}"#,
    BackoffStrategy::Fibonacci { base: Duration::from_secs(120) }
)]
fn backoff_strategies_parse(#[case] json: &str, #[case] expected: BackoffStrategy) {
    assert_eq!(serde_json::from_str::<BackoffStrategy>(json).unwrap(), expected);
}

#[rstest]
fn unknown_strategy_is_rejected() {
    assert!(serde_json::from_str::<BackoffStrategy>(r#"{"strategy": "random"}"#).is_err());
}

#[rstest]
fn caps_and_budget_apply() {
    let config: RetryConfig = serde_json::from_str(
        r#"{
            "max_retries": null,
            "backoff": { "strategy": "exponential", "base": "10ms" },
            "max_delay": "25ms",
            "max_total_delay": "80ms"
        }"#,
    )
    .unwrap();

    let millis: Vec<u128> = delays(&config).iter().map(Duration::as_millis).collect();
    assert_eq!(millis, vec![10, 20, 25, 25]);
}

#[rstest]
fn serialises_durations_in_humantime() {
    let config = RetryConfig {
        max_retries: Some(1),
        backoff: BackoffStrategy::Constant {
            delay: Duration::from_millis(1500),
        },
        max_delay: None,
        max_total_delay: Some(Duration::from_secs(5)),
    };

    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["backoff"]["delay"], "1s 500ms");
    assert_eq!(json["max_total_delay"], "5s");
    assert_eq!(serde_json::from_value::<RetryConfig>(json).unwrap(), config);
}
