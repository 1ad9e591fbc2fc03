use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Credentials, error, management::TokenManager, spotify, success, warning};

/// Requests an access token from Spotify and caches it for later builds.
///
/// Runs the client credentials grant with the credentials from the
/// environment, then persists the resulting token to the local cache so the
/// next `featnet build` starts without an extra token round trip. Builds do
/// not require running this first; they request their own token on demand.
/// The command exists to verify a credential pair in isolation.
///
/// # Process Flow
///
/// 1. **Credential Loading**: Reads client id and secret from the environment
/// 2. **Token Request**: Exchanges the credentials for a bearer token
/// 3. **Caching**: Persists the token to the local data directory
///
/// # Error Handling
///
/// Missing credentials and rejected token requests terminate the process
/// with an error message. A failed cache write only warns; the token was
/// still valid, it just won't be reused.
///
/// # Example Usage
///
/// ```bash
/// featnet auth
/// ```
///
/// # Output Examples
///
/// ```text
/// [+] Authentication successful! Token valid for 3600 seconds.
/// ```
pub async fn auth() {
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("{}", e);
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message("Requesting access token...");

    let http = reqwest::Client::new();

    match spotify::auth::request_token(&http, &credentials).await {
        Ok(token) => {
            pb.finish_and_clear();

            let manager = TokenManager::with_token(credentials, token.clone());
            if let Err(e) = manager.persist().await {
                warning!("Failed to save token to cache: {}", e);
            }

            success!(
                "Authentication successful! Token valid for {} seconds.",
                token.expires_in
            );
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Authentication failed: {}", e);
        }
    }
}
