use chrono::Utc;
use featnet::{config::Credentials, management::TokenManager, types::Token};

// Helper function to create credentials for tests
fn create_test_credentials() -> Credentials {
    Credentials {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
    }
}

// Helper function to create a token with the given timing fields
fn create_test_token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "test-access-token".to_string(),
        token_type: "Bearer".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_fresh_token_is_not_expired() {
    let now = Utc::now().timestamp() as u64;
    let manager =
        TokenManager::with_token(create_test_credentials(), create_test_token(now, 3600));

    assert!(!manager.is_expired());
}

#[test]
fn test_token_renews_inside_expiry_buffer() {
    let now = Utc::now().timestamp() as u64;

    // 120s of nominal validity left, inside the 240s renewal buffer
    let manager = TokenManager::with_token(
        create_test_credentials(),
        create_test_token(now - 3480, 3600),
    );

    assert!(manager.is_expired());
}

#[test]
fn test_missing_token_counts_as_expired() {
    let manager = TokenManager::new(create_test_credentials());

    assert!(manager.is_expired());
}

#[test]
fn test_zeroed_cache_timing_reads_as_expired() {
    // A hand-edited cache can hold timing fields smaller than the renewal
    // buffer; that must read as expired instead of underflowing
    let manager = TokenManager::with_token(create_test_credentials(), create_test_token(0, 0));

    assert!(manager.is_expired());
}
