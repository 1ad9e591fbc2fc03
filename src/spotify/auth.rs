use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, config::Credentials, types::Token};

/// Exchanges application credentials for an access token.
///
/// Performs the OAuth 2.0 client-credentials grant against Spotify's token
/// endpoint. This grant covers public catalog data only, which is all the
/// network builder needs; there is no user consent step and no refresh
/// token, so expiry is handled by calling this function again.
///
/// # Arguments
///
/// * `http` - Shared HTTP client used for the token request
/// * `credentials` - Client id and secret from the developer dashboard
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Bearer token with expiry metadata and an `obtained_at`
///   timestamp for expiration tracking
/// - `Err(String)` - Network failure or a non-success response status
///
/// # Protocol
///
/// The request carries `Authorization: Basic base64(client_id:client_secret)`
/// and a form body of `grant_type=client_credentials`, per the Spotify
/// authorization guide.
///
/// # Example
///
/// ```
/// let credentials = Credentials::from_env()?;
/// let token = request_token(&Client::new(), &credentials).await?;
/// println!("Token valid for {} seconds", token.expires_in);
/// ```
pub async fn request_token(http: &Client, credentials: &Credentials) -> Result<Token, String> {
    let basic = STANDARD.encode(format!(
        "{}:{}",
        credentials.client_id, credentials.client_secret
    ));

    let res = http
        .post(config::token_url())
        .header("Authorization", format!("Basic {}", basic))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
        return Err(format!(
            "Token request failed with status {}. Check your client id and secret.",
            res.status()
        ));
    }

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        token_type: json["token_type"].as_str().unwrap_or("Bearer").to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
