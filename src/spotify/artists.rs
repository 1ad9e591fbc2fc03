use reqwest::Url;

use crate::{
    config,
    spotify::client::{ApiError, SpotifyClient},
    types::{Artist, ArtistSearchResponse},
};

/// Searches the catalog for artists tagged with a genre keyword.
///
/// Issues a `GET /search` with a quoted `genre:"..."` query. Quoting keeps
/// multi-word keywords like `japanese hip hop` together, and building the
/// URL through [`Url::parse_with_params`] percent-encodes the quotes, spaces
/// and `&` that the keyword list contains.
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `genre` - Genre keyword, e.g. `j-pop`
/// * `limit` - Page size (the API caps this at 50)
/// * `offset` - Page start for walking deeper result pages
/// * `market` - Market restriction, e.g. `JP`
///
/// # Returns
///
/// The page of matching artists; an empty page means the genre is
/// exhausted. Rate limiting is absorbed inside the client.
pub async fn search_artists_by_genre(
    client: &mut SpotifyClient,
    genre: &str,
    limit: u32,
    offset: u32,
    market: &str,
) -> Result<Vec<Artist>, ApiError> {
    let url = Url::parse_with_params(
        &format!("{uri}/search", uri = &config::api_url()),
        &[
            ("q", format!("genre:\"{}\"", genre)),
            ("type", "artist".to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("market", market.to_string()),
        ],
    )
    .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

    let res: ArtistSearchResponse = client.get_json(url.as_str()).await?;

    Ok(res.artists.items)
}

/// Fetches full artist details (name, popularity) for a single artist id.
///
/// Discovery strategies that encounter artists only as track or album
/// credits use this to upgrade the bare id into a ranked artist record.
pub async fn get_artist(client: &mut SpotifyClient, artist_id: &str) -> Result<Artist, ApiError> {
    let api_url = format!(
        "{uri}/artists/{id}",
        uri = &config::api_url(),
        id = artist_id
    );

    client.get_json(&api_url).await
}
