use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, info,
    spotify::{
        self,
        client::{ApiError, SpotifyClient},
    },
    types::Artist,
    utils, warning,
};

/// Discovers artists from the new-releases feed, ranked by popularity.
///
/// Walks up to [`config::MAX_NEW_RELEASE_PAGES`] feed pages, upgrading
/// every unseen album artist to a full record. The feed tracks current
/// activity, which is why the mixed strategy runs it first.
pub async fn collect_from_new_releases(
    client: &mut SpotifyClient,
    target_count: usize,
    seen: &mut HashSet<String>,
    market: &str,
) -> Vec<Artist> {
    info!("Collecting artists from new releases (market: {})...", market);

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message("Reading new releases...");

    let mut collected: Vec<Artist> = Vec::new();
    let limit = 50;
    let mut offset = 0;
    let mut pages = 0;

    'pages: while seen.len() < target_count && pages < config::MAX_NEW_RELEASE_PAGES {
        let albums = match spotify::releases::get_new_releases(client, limit, offset, market).await
        {
            Ok(albums) => albums,
            Err(e) => {
                warning!("Failed to read new releases: {}", e);
                break;
            }
        };

        if albums.is_empty() {
            break;
        }

        let page_len = albums.len() as u32;

        for album in albums {
            for album_artist in album.artists {
                let Some(artist_id) = album_artist.id else { continue };
                if seen.contains(&artist_id) {
                    continue;
                }

                match spotify::artists::get_artist(client, &artist_id).await {
                    Ok(artist) => {
                        seen.insert(artist_id);
                        collected.push(artist);
                        pb.set_message(format!(
                            "Reading new releases... ({} artists)",
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
        pages += 1;
    }

    utils::sort_artists_by_popularity(&mut collected);

    pb.finish_and_clear();
    info!("New releases contributed {} artists", collected.len());

    collected
}
