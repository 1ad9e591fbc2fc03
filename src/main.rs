use std::path::PathBuf;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use featnet::{
    cli, config, error,
    pipeline::BuildConfig,
    sources::{self, SourceKind},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Verify credentials and cache an access token
    Auth,

    /// Build the featuring network from the Spotify catalog
    Build(BuildOptions),

    /// Show the most connected artists and strongest collaborations
    Top(TopOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct BuildOptions {
    /// Discovery strategy: genres, charts, new-releases or mixed
    #[clap(
        long,
        default_value = "mixed",
        value_parser = sources::parse_source_kind
    )]
    pub source: SourceKind,

    /// Number of unique artists discovery tries to accumulate
    #[clap(long, default_value_t = config::DEFAULT_TARGET_ARTISTS)]
    pub target_artists: usize,

    /// Upper bound on artists whose discographies are traversed
    #[clap(long, default_value_t = config::DEFAULT_MAX_ARTISTS)]
    pub max_artists: usize,

    /// Tracks collected per artist
    #[clap(long, default_value_t = config::DEFAULT_TRACKS_PER_ARTIST)]
    pub tracks_per_artist: usize,

    /// Only connect artists found during discovery; skip everyone else
    #[clap(long)]
    pub exclude_featured: bool,

    /// Genre keyword for search-based discovery; can be repeated
    #[clap(long = "genre", action = ArgAction::Append)]
    pub genres: Vec<String>,

    /// Chart playlist id for chart-based discovery; can be repeated
    #[clap(long = "playlist", action = ArgAction::Append)]
    pub playlists: Vec<String>,

    /// Market for catalog queries
    #[clap(long, default_value = config::DEFAULT_MARKET)]
    pub market: String,

    /// Genre label attached to collaboration tracks in the output
    #[clap(long, default_value = config::DEFAULT_GENRE_LABEL)]
    pub genre_label: String,

    /// Description stored in the network metadata
    #[clap(long)]
    pub description: Option<String>,

    /// Where to write the network JSON
    #[clap(long, default_value = config::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Pause between API requests in milliseconds; 0 disables pacing
    #[clap(long, default_value_t = config::DEFAULT_REQUEST_DELAY_MS)]
    pub request_delay_ms: u64,

    /// Rate-limit waits a single request may absorb; 0 removes the ceiling
    #[clap(long, default_value_t = config::DEFAULT_MAX_RATE_LIMIT_WAITS)]
    pub max_rate_limit_waits: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// Network JSON file to read
    #[clap(long, default_value = config::DEFAULT_OUTPUT_PATH)]
    pub input: PathBuf,

    /// Number of artists to show
    #[clap(long, default_value_t = 15)]
    pub nodes: usize,

    /// Number of collaborations to show
    #[clap(long, default_value_t = 15)]
    pub edges: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,

        Command::Build(opt) => {
            let genres = if opt.genres.is_empty() {
                config::DEFAULT_GENRES
                    .iter()
                    .map(|g| g.to_string())
                    .collect()
            } else {
                opt.genres
            };
            let playlists = if opt.playlists.is_empty() {
                vec![
                    config::JAPAN_TOP_50_PLAYLIST_ID.to_string(),
                    config::JAPAN_VIRAL_50_PLAYLIST_ID.to_string(),
                ]
            } else {
                opt.playlists
            };

            cli::build(BuildConfig {
                source: opt.source,
                target_artists: opt.target_artists,
                max_artists: opt.max_artists,
                tracks_per_artist: opt.tracks_per_artist,
                include_featured_artists: !opt.exclude_featured,
                genres,
                playlists,
                market: opt.market,
                genre_label: opt.genre_label,
                description: opt.description,
                output: opt.output,
                request_delay_ms: opt.request_delay_ms,
                max_rate_limit_waits: opt.max_rate_limit_waits,
            })
            .await
        }

        Command::Top(opt) => cli::top(opt.input, opt.nodes, opt.edges).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
