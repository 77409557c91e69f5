use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AssetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub slug: String,
    pub url: String,
}

impl DownloadJob {
    pub fn new(slug: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            url: url.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.slug)
    }

    /// Staging name; the image is renamed to `file_name` once complete.
    pub fn part_file_name(&self) -> String {
        format!("{}.jpg.part", self.slug)
    }
}

#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Maximum downloads in flight
    pub concurrency: usize,
    /// Extra attempts after the first failure
    pub retries: u32,
    /// Base backoff, multiplied by the attempt number
    pub retry_delay: Duration,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            concurrency: 4,
            retries: 2,
            retry_delay: Duration::from_millis(500),
            timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Default)]
pub struct DownloadReport {
    pub downloaded: Vec<PathBuf>,
    pub failed: Vec<(DownloadJob, AssetError)>,
}

impl DownloadReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Downloader {
    client: reqwest::Client,
    options: DownloadOptions,
}

impl Downloader {
    pub fn new(options: DownloadOptions) -> Result<Self, AssetError> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(concat!("foodplan/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, options })
    }

    /// Downloads every job into `out_dir`, at most `concurrency` at a time.
    ///
    /// A failed job never aborts the others; failures are collected in the
    /// report. Only creating `out_dir` itself is a hard error.
    #[tracing::instrument(skip(self, jobs), fields(jobs = jobs.len(), concurrency = self.options.concurrency))]
    pub async fn fetch_all(
        &self,
        jobs: Vec<DownloadJob>,
        out_dir: &Path,
    ) -> Result<DownloadReport, AssetError> {
        tokio::fs::create_dir_all(out_dir).await?;

        let results = futures::stream::iter(jobs)
            .map(|job| async move {
                let result = self.fetch_one(&job, out_dir).await;
                (job, result)
            })
            .buffer_unordered(self.options.concurrency.max(1))
            .collect::<Vec<_>>()
            .await;

        let mut report = DownloadReport::default();

        for (job, result) in results {
            match result {
                Ok(path) => report.downloaded.push(path),
                Err(e) => {
                    tracing::error!(slug = %job.slug, url = %job.url, "Download failed: {e}");
                    report.failed.push((job, e));
                }
            }
        }

        tracing::info!(
            downloaded = report.downloaded.len(),
            failed = report.failed.len(),
            "Image download finished"
        );

        Ok(report)
    }

    async fn fetch_one(&self, job: &DownloadJob, out_dir: &Path) -> Result<PathBuf, AssetError> {
        let path = out_dir.join(job.file_name());
        let part = out_dir.join(job.part_file_name());
        let mut attempt = 0;

        loop {
            match self.try_fetch(&job.url, &part, &path).await {
                Ok(()) => {
                    tracing::info!(slug = %job.slug, "Downloaded {}", job.file_name());
                    return Ok(path);
                }
                Err(e) if e.is_retryable() && attempt < self.options.retries => {
                    attempt += 1;
                    let delay = self.options.retry_delay * attempt;

                    tracing::warn!(
                        slug = %job.slug,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying download: {e}"
                    );

                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    match tokio::fs::remove_file(&part).await {
                        Ok(()) => {}
                        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                        Err(err) => {
                            tracing::warn!(path = %part.display(), "Failed to remove partial file: {err}");
                        }
                    }

                    return Err(e);
                }
            }
        }
    }

    /// An existing image at `path` is only replaced after a complete,
    /// validated download.
    async fn try_fetch(&self, url: &str, part: &Path, path: &Path) -> Result<(), AssetError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(AssetError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;

        if image::guess_format(&bytes).is_err() {
            return Err(AssetError::NotAnImage(url.to_owned()));
        }

        tokio::fs::write(part, &bytes).await?;
        tokio::fs::rename(part, path).await?;

        Ok(())
    }
}
