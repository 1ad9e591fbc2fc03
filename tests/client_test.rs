use std::time::Duration;

use featnet::spotify::client::{PacingPolicy, RetryPolicy, retry_after_secs};
use reqwest::header::{HeaderMap, HeaderValue};

#[test]
fn test_retry_after_header_parsing() {
    // Missing header falls back to 60 seconds
    let headers = HeaderMap::new();
    assert_eq!(retry_after_secs(&headers), 60);

    // A numeric header is honored as-is
    let mut headers = HeaderMap::new();
    headers.insert("retry-after", HeaderValue::from_static("30"));
    assert_eq!(retry_after_secs(&headers), 30);

    // A malformed header falls back to 60 seconds
    let mut headers = HeaderMap::new();
    headers.insert("retry-after", HeaderValue::from_static("soon"));
    assert_eq!(retry_after_secs(&headers), 60);
}

#[test]
fn test_retry_after_accepts_long_waits() {
    // The server's number is taken at face value, even when large
    let mut headers = HeaderMap::new();
    headers.insert("retry-after", HeaderValue::from_static("86400"));
    assert_eq!(retry_after_secs(&headers), 86400);
}

#[test]
fn test_retry_policy_caps_waits() {
    let policy = RetryPolicy {
        max_rate_limit_waits: 2,
    };

    // Waits below the ceiling are allowed
    assert!(policy.allows(0));
    assert!(policy.allows(1));

    // Reaching the ceiling stops further waits
    assert!(!policy.allows(2));
    assert!(!policy.allows(3));
}

#[test]
fn test_retry_policy_zero_means_unlimited() {
    let policy = RetryPolicy {
        max_rate_limit_waits: 0,
    };

    // A zero ceiling removes the cap entirely
    assert!(policy.allows(0));
    assert!(policy.allows(999));
}

#[test]
fn test_policy_defaults() {
    // Defaults mirror the compiled-in pacing configuration
    assert_eq!(
        PacingPolicy::default().request_delay,
        Duration::from_millis(200)
    );
    assert_eq!(RetryPolicy::default().max_rate_limit_waits, 10);
}
