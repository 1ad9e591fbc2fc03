use std::time::Duration;

use reqwest::{Client, StatusCode, header::HeaderMap};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{config, management::TokenManager, warning};

/// Errors surfaced by [`SpotifyClient`] requests.
///
/// Not-found and forbidden get their own variants because discovery treats
/// them as "this source has no data" rather than as failures: a rotated
/// chart playlist id answers 404, a region-locked one 403.
#[derive(Debug)]
pub enum ApiError {
    /// The request was rate limited more often than the retry policy allows.
    RateLimited { waits: u32 },
    /// The requested resource does not exist (404).
    NotFound,
    /// Access to the resource was denied (403).
    Forbidden,
    /// Network failure or any other HTTP error status.
    Http(reqwest::Error),
    /// A usable access token could not be obtained.
    Token(String),
    /// The request URL could not be constructed.
    InvalidUrl(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::RateLimited { waits } => {
                write!(f, "rate limited after {} waits", waits)
            }
            ApiError::NotFound => write!(f, "resource not found (404)"),
            ApiError::Forbidden => write!(f, "access denied (403)"),
            ApiError::Http(err) => write!(f, "http error: {}", err),
            ApiError::Token(msg) => write!(f, "token error: {}", msg),
            ApiError::InvalidUrl(msg) => write!(f, "invalid url: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

/// Caps how many rate-limit waits a single request may absorb before the
/// client gives up and reports [`ApiError::RateLimited`].
///
/// A ceiling of zero removes the cap entirely; the request then sleeps and
/// retries for as long as the API keeps answering 429.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_rate_limit_waits: u32,
}

impl RetryPolicy {
    pub fn allows(&self, waits_so_far: u32) -> bool {
        self.max_rate_limit_waits == 0 || waits_so_far < self.max_rate_limit_waits
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_rate_limit_waits: config::DEFAULT_MAX_RATE_LIMIT_WAITS,
        }
    }
}

/// Fixed pause inserted after each successful request.
///
/// A zero delay disables proactive pacing; the client then waits only when
/// the API pushes back with a rate-limit response.
#[derive(Debug, Clone, Copy)]
pub struct PacingPolicy {
    pub request_delay: Duration,
}

impl PacingPolicy {
    pub async fn pace(&self) {
        if !self.request_delay.is_zero() {
            sleep(self.request_delay).await;
        }
    }
}

impl Default for PacingPolicy {
    fn default() -> Self {
        PacingPolicy {
            request_delay: Duration::from_millis(config::DEFAULT_REQUEST_DELAY_MS),
        }
    }
}

/// Authenticated Spotify Web API client with pacing and rate-limit retry.
///
/// Owns the HTTP connection pool, the token manager and both throttling
/// policies, so every endpoint call made through it behaves the same way:
///
/// 1. Obtain a valid access token (re-requesting it when expired)
/// 2. Issue the GET request with bearer authentication
/// 3. On 429: sleep for the `Retry-After` seconds and retry the same URL,
///    up to the retry policy's ceiling
/// 4. On success: deserialize, then apply the proactive pacing delay
///
/// The client is handed down through the pipeline by mutable reference;
/// nothing about it is global.
pub struct SpotifyClient {
    http: Client,
    tokens: TokenManager,
    pacing: PacingPolicy,
    retry: RetryPolicy,
}

impl SpotifyClient {
    pub fn new(tokens: TokenManager, pacing: PacingPolicy, retry: RetryPolicy) -> Self {
        SpotifyClient {
            http: Client::new(),
            tokens,
            pacing,
            retry,
        }
    }

    /// Fetches the given token upfront so a credential problem surfaces
    /// before any collection work starts.
    pub async fn ensure_token(&mut self) -> Result<(), ApiError> {
        self.tokens
            .get_valid_token(&self.http)
            .await
            .map(|_| ())
            .map_err(ApiError::Token)
    }

    /// Performs an authenticated GET request and deserializes the JSON body.
    ///
    /// Handles the full request lifecycle described on [`SpotifyClient`].
    /// Rate-limit waits longer than 120 seconds are flagged as unusual but
    /// still honored; the API knows its own load better than we do.
    pub async fn get_json<T: DeserializeOwned>(&mut self, url: &str) -> Result<T, ApiError> {
        let mut waits: u32 = 0;

        loop {
            let token = self
                .tokens
                .get_valid_token(&self.http)
                .await
                .map_err(ApiError::Token)?;

            let response = self.http.get(url).bearer_auth(token).send().await?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                if !self.retry.allows(waits) {
                    return Err(ApiError::RateLimited { waits });
                }

                let secs = retry_after_secs(response.headers());
                if secs > 120 {
                    warning!("Rate limited: server asked for an unusually long {}s wait", secs);
                } else {
                    warning!("Rate limited: waiting {}s...", secs);
                }
                sleep(Duration::from_secs(secs)).await;
                waits += 1;
                continue;
            }

            let response = match response.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => match err.status() {
                    Some(StatusCode::NOT_FOUND) => return Err(ApiError::NotFound),
                    Some(StatusCode::FORBIDDEN) => return Err(ApiError::Forbidden),
                    _ => return Err(ApiError::Http(err)),
                },
            };

            let json = response.json::<T>().await?;
            self.pacing.pace().await;

            return Ok(json);
        }
    }
}

/// Seconds to wait before retrying a rate-limited request, taken from the
/// `Retry-After` header. Missing or malformed headers fall back to 60.
pub fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get("retry-after")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(60)
}
