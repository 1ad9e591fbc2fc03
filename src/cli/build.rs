use crate::{info, pipeline, pipeline::BuildConfig};

/// Builds the featuring network and writes it to the configured output path.
///
/// Thin wrapper around [`pipeline::run`] that announces the run before
/// handing over. All behavior lives in the pipeline; this function exists so
/// `main` only ever talks to the `cli` module.
///
/// # Example Usage
///
/// ```bash
/// # Default mixed-source build
/// featnet build
///
/// # Chart playlists only, smaller network
/// featnet build --source charts --max-artists 100
/// ```
pub async fn build(config: BuildConfig) {
    info!("Featuring network build (source: {})", config.source);
    pipeline::run(config).await;
}
