use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    info,
    spotify::{
        self,
        client::{ApiError, SpotifyClient},
    },
    types::Artist,
    warning,
};

/// Discovers artists from a list of chart playlists, in order.
///
/// Later playlists only run while earlier ones have left the target unmet.
pub async fn collect_from_charts(
    client: &mut SpotifyClient,
    playlist_ids: &[String],
    target_count: usize,
    seen: &mut HashSet<String>,
) -> Vec<Artist> {
    let mut collected = Vec::new();

    for playlist_id in playlist_ids {
        if seen.len() >= target_count {
            break;
        }

        let artists = collect_from_playlist(client, playlist_id, target_count, seen).await;
        collected.extend(artists);
    }

    collected
}

/// Collects artists credited on a single playlist's tracks.
///
/// Probes the playlist first: a 404 (rotated or private id) or a 403 turns
/// the whole playlist into "no data from this source" instead of an error.
/// Every unseen artist id found on a track is upgraded to a full artist
/// record via a detail lookup, so the result carries popularity for later
/// ranking.
pub async fn collect_from_playlist(
    client: &mut SpotifyClient,
    playlist_id: &str,
    target_count: usize,
    seen: &mut HashSet<String>,
) -> Vec<Artist> {
    info!("Collecting artists from playlist {}...", playlist_id);

    let playlist = match spotify::playlists::get_playlist(client, playlist_id).await {
        Ok(playlist) => playlist,
        Err(ApiError::NotFound) => {
            warning!(
                "Playlist {} not found (404). Editorial playlist ids rotate; look the current one up and pass it with --playlist.",
                playlist_id
            );
            return Vec::new();
        }
        Err(ApiError::Forbidden) => {
            warning!(
                "Access to playlist {} denied (403); it may be private or region-locked.",
                playlist_id
            );
            return Vec::new();
        }
        Err(e) => {
            warning!("Failed to fetch playlist {}: {}", playlist_id, e);
            return Vec::new();
        }
    };

    info!("{} ({} tracks)", playlist.name, playlist.tracks.total);

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(format!("Reading {}...", playlist.name));

    let mut collected: Vec<Artist> = Vec::new();
    let limit = 100;
    let mut offset = 0;

    'pages: loop {
        if seen.len() >= target_count {
            break;
        }

        let items =
            match spotify::playlists::get_playlist_tracks(client, playlist_id, limit, offset).await
            {
                Ok(items) => items,
                Err(e) => {
                    warning!("Failed to read playlist page: {}", e);
                    break;
                }
            };

        if items.is_empty() {
            break;
        }

        let page_len = items.len() as u32;

        for item in items {
            let Some(track) = item.track else { continue };

            for track_artist in track.artists {
                let Some(artist_id) = track_artist.id else { continue };
                if seen.contains(&artist_id) {
                    continue;
                }

                match spotify::artists::get_artist(client, &artist_id).await {
                    Ok(artist) => {
                        seen.insert(artist_id);
                        collected.push(artist);
                        pb.set_message(format!(
                            "Reading {}... ({} artists)",
                            playlist.name,
                            collected.len()
                        ));
                    }
                    Err(ApiError::NotFound) => {}
                    Err(e) => {
                        warning!("Failed to fetch artist {}: {}", artist_id, e);
                    }
                }

                if seen.len() >= target_count {
                    break 'pages;
                }
            }
        }

        if page_len < limit {
            break;
        }

        offset += page_len;
    }

    pb.finish_and_clear();
    info!("{} contributed {} artists", playlist.name, collected.len());

    collected
}
