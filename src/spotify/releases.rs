use crate::{
    config,
    spotify::client::{ApiError, SpotifyClient},
    types::{
        AlbumPage, AlbumTrack, AlbumTracksResponse, NewReleasesResponse, SeveralTracksResponse,
        SimplifiedAlbum, Track,
    },
};

/// Fetches one page of the new-releases feed for a country.
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `limit` - Page size (the API caps this at 50)
/// * `offset` - Page start
/// * `country` - Country whose feed to read, e.g. `JP`
///
/// # Returns
///
/// The page of simplified albums; an empty page means the feed is
/// exhausted.
pub async fn get_new_releases(
    client: &mut SpotifyClient,
    limit: u32,
    offset: u32,
    country: &str,
) -> Result<Vec<SimplifiedAlbum>, ApiError> {
    let api_url = format!(
        "{uri}/browse/new-releases?limit={limit}&offset={offset}&country={country}",
        uri = &config::api_url(),
        limit = limit,
        offset = offset,
        country = country
    );

    let res: NewReleasesResponse = client.get_json(&api_url).await?;

    Ok(res.albums.items)
}

/// Retrieves an artist's discography, filtered by release group.
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `artist_id` - Spotify ID of the artist
/// * `include_groups` - Comma-separated release groups, e.g. `album,single`
/// * `limit` - Maximum number of albums to return (1-50)
pub async fn get_artist_albums(
    client: &mut SpotifyClient,
    artist_id: &str,
    include_groups: &str,
    limit: u32,
) -> Result<Vec<SimplifiedAlbum>, ApiError> {
    let api_url = format!(
        "{uri}/artists/{id}/albums?include_groups={include_groups}&limit={limit}",
        uri = &config::api_url(),
        id = artist_id,
        include_groups = include_groups,
        limit = limit
    );

    let res: AlbumPage = client.get_json(&api_url).await?;

    Ok(res.items)
}

/// Retrieves the simplified track listing of one album.
///
/// Simplified tracks carry no popularity; the collector only needs the ids
/// here and upgrades them through [`get_several_tracks`] afterwards. Local
/// tracks have a null id and are skipped by the caller.
pub async fn get_album_tracks(
    client: &mut SpotifyClient,
    album_id: &str,
) -> Result<Vec<AlbumTrack>, ApiError> {
    let api_url = format!(
        "{uri}/albums/{id}/tracks?limit=50",
        uri = &config::api_url(),
        id = album_id
    );

    let res: AlbumTracksResponse = client.get_json(&api_url).await?;

    Ok(res.items)
}

/// Retrieves full track details for a batch of track ids.
///
/// The endpoint accepts at most 50 ids per call; callers chunk accordingly.
/// Unknown ids come back as nulls in the response array and are dropped
/// here, so the result can be shorter than the input.
pub async fn get_several_tracks(
    client: &mut SpotifyClient,
    track_ids: &[String],
) -> Result<Vec<Track>, ApiError> {
    let ids = track_ids.join(",");

    let api_url = format!("{uri}/tracks?ids={ids}", uri = &config::api_url(), ids = ids);

    let res: SeveralTracksResponse = client.get_json(&api_url).await?;

    Ok(res.tracks.into_iter().flatten().collect())
}
