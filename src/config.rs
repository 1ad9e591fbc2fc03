//! Configuration management for the featuring-network builder.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files, and holds the compiled-in defaults
//! for the build pipeline: discovery targets, pacing, chart playlist ids and
//! the genre keyword list used by search-based discovery.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Default base URL for the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default URL for the client-credentials token exchange.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Number of unique artists the discovery phase tries to accumulate.
pub const DEFAULT_TARGET_ARTISTS: usize = 700;

/// Upper bound on artists whose discographies are traversed during
/// graph construction.
pub const DEFAULT_MAX_ARTISTS: usize = 700;

/// Tracks collected per artist before the graph sees them.
pub const DEFAULT_TRACKS_PER_ARTIST: usize = 100;

/// Fixed pause between successful API requests, in milliseconds.
///
/// Zero switches to reactive-only pacing: the client never sleeps between
/// requests and waits only when the API answers with a rate-limit response.
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 200;

/// How many rate-limit waits a single request may absorb before giving up.
/// Zero removes the ceiling entirely.
pub const DEFAULT_MAX_RATE_LIMIT_WAITS: u32 = 10;

/// Market passed to catalog queries.
pub const DEFAULT_MARKET: &str = "JP";

/// Genre label attached to collaboration track entries in the output.
pub const DEFAULT_GENRE_LABEL: &str = "J-Pop";

/// Where the network JSON lands unless overridden on the command line.
pub const DEFAULT_OUTPUT_PATH: &str = "public/japanese_featuring_network.json";

/// Share of the artist target filled from the new-releases feed before the
/// mixed discovery strategy falls back to charts and genre search.
pub const NEW_RELEASES_SHARE: f64 = 0.6;

/// Pages fetched per genre keyword during search-based discovery.
pub const MAX_PAGES_PER_GENRE: u32 = 5;

/// Pages fetched from the new-releases feed before giving up on it.
pub const MAX_NEW_RELEASE_PAGES: u32 = 10;

/// Genre keywords used by the search-based discovery strategy, ordered from
/// most to least specific.
pub const DEFAULT_GENRES: [&str; 15] = [
    "j-pop",
    "j-rock",
    "j-idol",
    "anime",
    "japanese",
    "japanese pop",
    "japanese rock",
    "j-rap",
    "japanese hip hop",
    "japanese indie",
    "japanese alternative",
    "japanese electronic",
    "japanese r&b",
    "japanese metal",
    "japanese punk",
];

/// Japan Top 50 chart playlist.
///
/// Editorial playlist ids shift over time; a 404 from this id means Spotify
/// rotated it and the current one has to be looked up manually.
pub const JAPAN_TOP_50_PLAYLIST_ID: &str = "37i9dQZEVXbKXQ4mDTEBXq";

/// Japan Viral 50 chart playlist.
pub const JAPAN_VIRAL_50_PLAYLIST_ID: &str = "37i9dQZEVXbINTEnbFeb8d";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory
/// under `featnet/.env` first, then falls back to a `.env` in the current
/// working directory. Variables already present in the environment are never
/// overwritten, so the data-directory file takes precedence over the local
/// one. Missing files are fine; only unreadable ones are errors.
///
/// # Directory Structure
///
/// The function looks for the primary `.env` file in:
/// - Linux: `~/.local/share/featnet/.env`
/// - macOS: `~/Library/Application Support/featnet/.env`
/// - Windows: `%LOCALAPPDATA%/featnet/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use featnet::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("featnet/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    // A .env in the working directory fills in anything still unset.
    dotenv::dotenv().ok();

    Ok(())
}

/// Spotify application credentials for the client-credentials grant.
///
/// Obtained from the Spotify developer dashboard when registering the
/// application. The secret never appears in logs or output.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Reads credentials from `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error when either variable is unset or empty,
    /// naming both variables so the user knows what to configure.
    pub fn from_env() -> Result<Self, String> {
        let client_id = env::var("SPOTIFY_CLIENT_ID").unwrap_or_default();
        let client_secret = env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default();

        if client_id.is_empty() || client_secret.is_empty() {
            return Err(
                "SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET must be set in the environment or a .env file"
                    .to_string(),
            );
        }

        Ok(Credentials {
            client_id,
            client_secret,
        })
    }
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable and falls back to the
/// public production endpoint when it is unset. The override exists mainly
/// so integration setups can point the client at a local stand-in.
pub fn api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the Spotify token exchange URL.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable and falls back to
/// the public accounts endpoint when it is unset.
pub fn token_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}
