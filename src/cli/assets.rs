use foodplan_assets::{Downloader, ImageManifest};
use std::path::PathBuf;

#[tracing::instrument(skip(config))]
pub async fn fetch_images(
    config: foodplan::Config,
    out_override: Option<PathBuf>,
    concurrency_override: Option<usize>,
) -> foodplan_shared::Result<()> {
    let catalog = foodplan::load_catalog(&config)?;

    let manifest = match &config.assets.manifest {
        Some(path) => ImageManifest::load(path)?,
        None => ImageManifest::builtin(),
    };

    let out_dir = out_override.unwrap_or(config.assets.output_dir.to_owned());
    let mut options = config.assets.download_options();
    if let Some(concurrency) = concurrency_override {
        options.concurrency = concurrency.max(1);
    }

    tracing::info!(out_dir = %out_dir.display(), "Downloading dish images...");

    let report = Downloader::new(options)?
        .fetch_all(manifest.jobs_for(&catalog), &out_dir)
        .await?;

    if !report.is_success() {
        foodplan_shared::bail!("{} image downloads failed", report.failed.len());
    }

    tracing::info!("All images downloaded successfully");

    Ok(())
}
