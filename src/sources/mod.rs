//! # Artist Discovery Module
//!
//! Strategies for assembling the artist pool the network is built from.
//! Each strategy walks a different corner of the catalog:
//!
//! - [`SourceKind::Genres`] - genre keyword searches, ranked by popularity
//! - [`SourceKind::Charts`] - chart playlists (Japan Top 50 / Viral 50)
//! - [`SourceKind::NewReleases`] - the new-releases feed for a market
//! - [`SourceKind::Mixed`] - new releases first, then charts, then genre
//!   search to fill up to the target
//!
//! All strategies share a `seen` id set so an artist discovered twice is
//! counted once, stop when the combined total reaches the target, and treat
//! remote failures as "this source is done" rather than aborting the run.

use std::collections::HashSet;

use crate::{info, spotify::client::SpotifyClient, types::Artist, utils};

mod charts;
mod genres;
mod new_releases;

pub use charts::collect_from_charts;
pub use charts::collect_from_playlist;
pub use genres::collect_by_genre_search;
pub use new_releases::collect_from_new_releases;

/// Which discovery strategy a build run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Genres,
    Charts,
    NewReleases,
    Mixed,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceKind::Genres => "genres",
            SourceKind::Charts => "charts",
            SourceKind::NewReleases => "new-releases",
            SourceKind::Mixed => "mixed",
        };
        write!(f, "{}", name)
    }
}

/// Parses a source name as given on the command line.
pub fn parse_source_kind(value: &str) -> Result<SourceKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "genres" | "genre-search" => Ok(SourceKind::Genres),
        "charts" => Ok(SourceKind::Charts),
        "new-releases" | "releases" => Ok(SourceKind::NewReleases),
        "mixed" => Ok(SourceKind::Mixed),
        other => Err(format!(
            "Unknown source '{}'. Valid sources: genres, charts, new-releases, mixed",
            other
        )),
    }
}

/// Tunables shared by all discovery strategies.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    pub target_artists: usize,
    pub genres: Vec<String>,
    pub playlists: Vec<String>,
    pub market: String,
}

/// Runs the chosen discovery strategy and returns the artist pool.
///
/// The mixed strategy reproduces the chart-priority collection order: the
/// new-releases feed fills a fixed share of the target first, chart
/// playlists run next, and genre search tops the pool up. The combined pool
/// is re-ranked by popularity at the end so seeding favors well-known
/// artists regardless of which source found them.
pub async fn collect(
    client: &mut SpotifyClient,
    kind: SourceKind,
    options: &DiscoveryOptions,
) -> Vec<Artist> {
    let mut seen: HashSet<String> = HashSet::new();

    match kind {
        SourceKind::Genres => {
            collect_by_genre_search(
                client,
                &options.genres,
                options.target_artists,
                &mut seen,
                &options.market,
            )
            .await
        }
        SourceKind::Charts => {
            collect_from_charts(client, &options.playlists, options.target_artists, &mut seen)
                .await
        }
        SourceKind::NewReleases => {
            collect_from_new_releases(
                client,
                options.target_artists,
                &mut seen,
                &options.market,
            )
            .await
        }
        SourceKind::Mixed => {
            let new_release_target =
                (options.target_artists as f64 * crate::config::NEW_RELEASES_SHARE) as usize;

            let mut artists = collect_from_new_releases(
                client,
                new_release_target,
                &mut seen,
                &options.market,
            )
            .await;
            let from_new_releases = artists.len();

            if seen.len() < options.target_artists {
                let chart_artists = collect_from_charts(
                    client,
                    &options.playlists,
                    options.target_artists,
                    &mut seen,
                )
                .await;
                artists.extend(chart_artists);
            }
            let from_charts = artists.len() - from_new_releases;

            if seen.len() < options.target_artists {
                let genre_artists = collect_by_genre_search(
                    client,
                    &options.genres,
                    options.target_artists,
                    &mut seen,
                    &options.market,
                )
                .await;
                artists.extend(genre_artists);
            }
            let from_genres = artists.len() - from_new_releases - from_charts;

            utils::sort_artists_by_popularity(&mut artists);

            info!(
                "Discovery breakdown: {} new releases, {} charts, {} genre search",
                from_new_releases, from_charts, from_genres
            );

            artists
        }
    }
}
