use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config, info, spotify, spotify::client::SpotifyClient, types::Artist, utils, warning};

/// Discovers artists through genre keyword searches, ranked by popularity.
///
/// Walks up to [`config::MAX_PAGES_PER_GENRE`] result pages per keyword,
/// collecting artists whose ids are not yet in `seen` until the combined
/// total reaches `target_count`. Newly found ids are added to `seen`; the
/// returned artists are sorted most popular first.
///
/// A failed search abandons the current keyword and moves on to the next.
pub async fn collect_by_genre_search(
    client: &mut SpotifyClient,
    genres: &[String],
    target_count: usize,
    seen: &mut HashSet<String>,
    market: &str,
) -> Vec<Artist> {
    info!("Searching artists by genre ({} keywords)...", genres.len());

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut collected: Vec<Artist> = Vec::new();
    let limit = 50;

    for genre in genres {
        if seen.len() >= target_count {
            break;
        }

        pb.set_message(format!("Searching genre \"{}\"...", genre));

        let mut offset = 0;
        let mut pages = 0;

        while seen.len() < target_count && pages < config::MAX_PAGES_PER_GENRE {
            let page = match spotify::artists::search_artists_by_genre(
                client, genre, limit, offset, market,
            )
            .await
            {
                Ok(page) => page,
                Err(e) => {
                    warning!("Search failed for genre \"{}\": {}", genre, e);
                    break;
                }
            };

            let page_len = page.len() as u32;

            for artist in page {
                if seen.len() >= target_count {
                    break;
                }
                if seen.insert(artist.id.clone()) {
                    collected.push(artist);
                }
            }

            pb.set_message(format!(
                "Searching genre \"{}\"... ({} artists)",
                genre,
                collected.len()
            ));

            // A page shorter than the requested limit is the end of this
            // genre's results.
            if page_len < limit {
                break;
            }

            offset += page_len;
            pages += 1;
        }
    }

    utils::sort_artists_by_popularity(&mut collected);

    pb.finish_and_clear();
    info!("Genre search contributed {} artists", collected.len());

    collected
}
