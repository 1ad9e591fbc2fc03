//! The end-to-end network build pipeline.
//!
//! One configurable run replaces what used to be separate per-source
//! scripts: discover an artist pool, collect every seed artist's tracks,
//! fold them into the co-occurrence graph and persist the result. All
//! tunables arrive through [`BuildConfig`]; nothing is read from globals
//! once the run starts.
//!
//! Failure policy: a missing credential or an unobtainable token aborts
//! before any collection work, and those are the only paths that exit
//! nonzero. Once collection has begun, remote failures only shrink the
//! result: the worst case is a smaller-than-target network, or a run that
//! ends with just a warning when discovery comes back empty.

use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    collector, config,
    config::Credentials,
    error,
    graph::{BuilderOptions, NetworkBuilder},
    info,
    management::{NetworkManager, TokenManager},
    sources::{self, DiscoveryOptions, SourceKind},
    spotify::client::{PacingPolicy, RetryPolicy, SpotifyClient},
    success, utils, warning,
};

/// Everything one build run needs, assembled by the CLI layer from flags
/// and defaults.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub source: SourceKind,
    pub target_artists: usize,
    pub max_artists: usize,
    pub tracks_per_artist: usize,
    pub include_featured_artists: bool,
    pub genres: Vec<String>,
    pub playlists: Vec<String>,
    pub market: String,
    pub genre_label: String,
    pub description: Option<String>,
    pub output: PathBuf,
    pub request_delay_ms: u64,
    pub max_rate_limit_waits: u32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            source: SourceKind::Mixed,
            target_artists: config::DEFAULT_TARGET_ARTISTS,
            max_artists: config::DEFAULT_MAX_ARTISTS,
            tracks_per_artist: config::DEFAULT_TRACKS_PER_ARTIST,
            include_featured_artists: true,
            genres: config::DEFAULT_GENRES.iter().map(|g| g.to_string()).collect(),
            playlists: vec![
                config::JAPAN_TOP_50_PLAYLIST_ID.to_string(),
                config::JAPAN_VIRAL_50_PLAYLIST_ID.to_string(),
            ],
            market: config::DEFAULT_MARKET.to_string(),
            genre_label: config::DEFAULT_GENRE_LABEL.to_string(),
            description: None,
            output: PathBuf::from(config::DEFAULT_OUTPUT_PATH),
            request_delay_ms: config::DEFAULT_REQUEST_DELAY_MS,
            max_rate_limit_waits: config::DEFAULT_MAX_RATE_LIMIT_WAITS,
        }
    }
}

/// Runs the full build: discovery, track collection, graph construction,
/// persistence.
///
/// Exits the process with an error message when credentials are missing or
/// the first token request fails, then hands the authenticated client to
/// [`execute`] for everything after that.
pub async fn run(build: BuildConfig) {
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("{}", e);
        }
    };

    let tokens = TokenManager::load_or_new(credentials).await;
    let mut client = SpotifyClient::new(
        tokens,
        PacingPolicy {
            request_delay: Duration::from_millis(build.request_delay_ms),
        },
        RetryPolicy {
            max_rate_limit_waits: build.max_rate_limit_waits,
        },
    );

    // A credential problem should surface before any collection work.
    if let Err(e) = client.ensure_token().await {
        error!("Failed to obtain an access token: {}", e);
    }

    execute(&mut client, build).await;
}

/// Drives discovery through persistence with an already-authenticated
/// client.
///
/// From here on remote failures shrink the result instead of ending the
/// run; an empty artist pool ends it early with a warning and no output
/// file, still with a zero exit code.
pub async fn execute(client: &mut SpotifyClient, build: BuildConfig) {
    if build.request_delay_ms > 0 {
        info!("Request pacing: {}ms between requests", build.request_delay_ms);
    } else {
        info!("Request pacing: reactive only (waiting on rate-limit responses)");
    }

    let discovery = DiscoveryOptions {
        target_artists: build.target_artists,
        genres: build.genres.clone(),
        playlists: build.playlists.clone(),
        market: build.market.clone(),
    };

    let mut artists = sources::collect(client, build.source, &discovery).await;
    utils::remove_duplicate_artists(&mut artists);

    if artists.is_empty() {
        warning!("No artists found; nothing to build.");
        return;
    }

    info!("Discovered {} unique artists", artists.len());
    if let Some(top) = artists.first() {
        let avg: f64 = artists.iter().map(|a| a.popularity as f64).sum::<f64>()
            / artists.len() as f64;
        info!("Top popularity: {} ({})", top.popularity, top.name);
        info!("Average popularity: {:.1}", avg);
    }

    let description = build.description.clone().unwrap_or_else(|| {
        default_description(build.source).to_string()
    });

    let mut builder = NetworkBuilder::new(BuilderOptions {
        max_artists: build.max_artists,
        include_featured_artists: build.include_featured_artists,
        genre_label: build.genre_label.clone(),
        description,
    });
    builder.seed_artists(&artists);

    let total = artists.len().min(build.max_artists);
    info!(
        "Building network from {} artists ({} tracks each)...",
        total, build.tracks_per_artist
    );

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut total_tracks: usize = 0;

    for (processed, artist) in artists.iter().take(build.max_artists).enumerate() {
        pb.set_message(format!(
            "Processing {}/{}: {} (nodes: {}, edges: {})",
            processed + 1,
            total,
            artist.name,
            builder.node_count(),
            builder.edge_count()
        ));

        let tracks =
            collector::collect_artist_tracks(client, &artist.id, build.tracks_per_artist).await;
        total_tracks += tracks.len();

        for track in &tracks {
            builder.record_track(artist, track);
        }
    }

    pb.finish_and_clear();
    info!("Processed {} tracks across {} artists", total_tracks, total);

    let network = builder.finish();

    let manager = NetworkManager::new(network, build.output.clone());
    if let Err(e) = manager.persist().await {
        error!(
            "Failed to save network to {}: {:?}",
            build.output.display(),
            e
        );
    }

    let network = manager.network();
    success!("Network saved to {}", build.output.display());
    info!("Nodes: {}", network.metadata.total_nodes);
    info!("Edges: {}", network.metadata.total_edges);
    info!("Collaborations: {}", network.metadata.total_collaborations);
}

fn default_description(source: SourceKind) -> &'static str {
    match source {
        SourceKind::Genres => "Japanese Music Featuring Network - Generated from Spotify API",
        _ => "Japanese Music Featuring Network - Generated from Spotify Charts and API",
    }
}
