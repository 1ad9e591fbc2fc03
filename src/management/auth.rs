use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{config::Credentials, spotify, types::Token, warning};

pub struct TokenManager {
    credentials: Credentials,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(credentials: Credentials) -> Self {
        TokenManager {
            credentials,
            token: None,
        }
    }

    pub fn with_token(credentials: Credentials, token: Token) -> Self {
        TokenManager {
            credentials,
            token: Some(token),
        }
    }

    pub async fn load(credentials: Credentials) -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self {
            credentials,
            token: Some(token),
        })
    }

    pub async fn load_or_new(credentials: Credentials) -> Self {
        match Self::load(credentials.clone()).await {
            Ok(manager) => manager,
            Err(_) => Self::new(credentials),
        }
    }

    pub async fn persist(&self) -> Result<(), String> {
        let Some(token) = &self.token else {
            return Ok(());
        };

        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub async fn get_valid_token(&mut self, http: &Client) -> Result<String, String> {
        if self.is_expired() {
            let token = spotify::auth::request_token(http, &self.credentials).await?;
            self.token = Some(token);
            if let Err(e) = self.persist().await {
                warning!("Failed to cache token: {}", e);
            }
        }

        match &self.token {
            Some(token) => Ok(token.access_token.clone()),
            None => Err("No access token available".to_string()),
        }
    }

    pub fn is_expired(&self) -> bool {
        match &self.token {
            // 240s buffer so a token never expires mid-batch; saturate so a
            // hand-edited cache with tiny timing fields reads as expired
            Some(token) => {
                let now = Utc::now().timestamp() as u64;
                now >= (token.obtained_at + token.expires_in).saturating_sub(240)
            }
            None => true,
        }
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("featnet/cache/token.json");
        path
    }
}
