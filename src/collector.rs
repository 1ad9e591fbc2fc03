//! Per-artist track collection.
//!
//! Turns one artist id into the list of full track records the graph is
//! built from: albums and singles are listed, their simplified tracks
//! yield ids up to the per-artist cap, and the ids are then upgraded to
//! full records (popularity, complete artist credits) in batches.

use crate::{
    spotify::{self, client::SpotifyClient},
    types::Track,
    warning,
};

/// Track ids accepted per detail-lookup batch.
const TRACK_BATCH_SIZE: usize = 50;

/// Collects up to `limit` full track records from an artist's discography.
///
/// Walks the artist's albums and singles in listing order, gathers track
/// ids until the cap, then fetches full details in batches of
/// [`TRACK_BATCH_SIZE`]. Failures are absorbed at the smallest enclosing
/// step: one unreadable album or one failed batch never discards what the
/// other albums and batches produced.
///
/// Local tracks carry a null id in album listings and are skipped. The
/// result can be shorter than `limit` even for prolific artists, since
/// detail lookups drop ids the API no longer knows.
pub async fn collect_artist_tracks(
    client: &mut SpotifyClient,
    artist_id: &str,
    limit: usize,
) -> Vec<Track> {
    if limit == 0 {
        return Vec::new();
    }

    let albums =
        match spotify::releases::get_artist_albums(client, artist_id, "album,single", 50).await {
            Ok(albums) => albums,
            Err(e) => {
                warning!("Failed to list albums for artist {}: {}", artist_id, e);
                return Vec::new();
            }
        };

    let mut track_ids: Vec<String> = Vec::new();

    'albums: for album in albums {
        let album_tracks = match spotify::releases::get_album_tracks(client, &album.id).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warning!("Failed to fetch tracks for album {}: {}", album.id, e);
                continue;
            }
        };

        for track in album_tracks {
            if let Some(id) = track.id {
                track_ids.push(id);
            }
            if track_ids.len() >= limit {
                break 'albums;
            }
        }
    }

    if track_ids.is_empty() {
        return Vec::new();
    }

    let mut tracks: Vec<Track> = Vec::new();
    for batch in track_ids.chunks(TRACK_BATCH_SIZE) {
        match spotify::releases::get_several_tracks(client, batch).await {
            Ok(mut detailed) => tracks.append(&mut detailed),
            Err(e) => {
                warning!("Failed to fetch track details: {}", e);
            }
        }
    }

    tracks.truncate(limit);
    tracks
}
