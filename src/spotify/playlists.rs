use crate::{
    config,
    spotify::client::{ApiError, SpotifyClient},
    types::{PlaylistInfo, PlaylistItem, PlaylistTracksResponse},
};

/// Fetches playlist metadata (name and track count).
///
/// Used as an existence check before paging through a chart playlist:
/// editorial playlist ids rotate, and a 404 or 403 here tells the caller to
/// skip the whole source instead of paging into errors. No market parameter
/// is sent; under the client-credentials grant only public playlists are
/// reachable anyway.
pub async fn get_playlist(
    client: &mut SpotifyClient,
    playlist_id: &str,
) -> Result<PlaylistInfo, ApiError> {
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = &config::api_url(),
        id = playlist_id
    );

    client.get_json(&api_url).await
}

/// Fetches one page of playlist entries.
///
/// Entries can be null (removed or region-locked tracks), and episode
/// entries carry no artist list; both deserialize to empty items the caller
/// filters out.
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `playlist_id` - Playlist to page through
/// * `limit` - Page size (the API caps this at 100)
/// * `offset` - Page start
pub async fn get_playlist_tracks(
    client: &mut SpotifyClient,
    playlist_id: &str,
    limit: u32,
    offset: u32,
) -> Result<Vec<PlaylistItem>, ApiError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit={limit}&offset={offset}",
        uri = &config::api_url(),
        id = playlist_id,
        limit = limit,
        offset = offset
    );

    let res: PlaylistTracksResponse = client.get_json(&api_url).await?;

    Ok(res.items)
}
