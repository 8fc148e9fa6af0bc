//! One PDF download: existence check, GET, validation, commit.
//!
//! The whole body is buffered and validated before anything touches the
//! output directory, so a rejected download never leaves a file behind.

mod verify;

pub use verify::{check_response, RejectReason};

use crate::config::ScrapeConfig;
use crate::events::{Event, EventSink};
use crate::http::HttpClient;
use crate::storage;
use crate::url_model::{derive_filename, NormalizedUrl};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Per-download settings.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub timeout: Duration,
    pub accepted_content_types: Vec<String>,
}

impl DownloadOptions {
    pub fn from_config(cfg: &ScrapeConfig) -> Self {
        Self {
            timeout: cfg.download_timeout(),
            accepted_content_types: cfg.accepted_content_types.clone(),
        }
    }
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self::from_config(&ScrapeConfig::default())
    }
}

/// What happened to one URL.
#[derive(Debug)]
pub enum CommitOutcome {
    Downloaded { path: PathBuf, bytes: u64 },
    /// A file with the derived name was already there; no request was made.
    Skipped { path: PathBuf },
    Rejected(RejectReason),
}

impl CommitOutcome {
    pub fn is_downloaded(&self) -> bool {
        matches!(self, CommitOutcome::Downloaded { .. })
    }
}

/// Local path a URL is stored under.
pub fn target_path(output_dir: &Path, url: &NormalizedUrl) -> PathBuf {
    output_dir.join(derive_filename(url.as_str()))
}

/// Downloads `url` into `output_dir` unless its derived filename already exists.
///
/// Never fails as a whole: every problem becomes [`CommitOutcome::Rejected`]
/// and is reported to `sink`.
pub fn download_pdf<C>(
    client: &C,
    url: &NormalizedUrl,
    output_dir: &Path,
    opts: &DownloadOptions,
    sink: &dyn EventSink,
) -> CommitOutcome
where
    C: HttpClient + ?Sized,
{
    let path = target_path(output_dir, url);
    if storage::file_exists(&path) {
        sink.emit(Event::Skipped {
            url: url.to_string(),
            path: path.clone(),
        });
        return CommitOutcome::Skipped { path };
    }

    match fetch_and_commit(client, url, &path, opts) {
        Ok(bytes) => {
            sink.emit(Event::Downloaded {
                url: url.to_string(),
                path: path.clone(),
                bytes,
            });
            CommitOutcome::Downloaded { path, bytes }
        }
        Err(reason) => {
            sink.emit(Event::Rejected {
                url: url.to_string(),
                reason: reason.to_string(),
            });
            CommitOutcome::Rejected(reason)
        }
    }
}

fn fetch_and_commit<C>(
    client: &C,
    url: &NormalizedUrl,
    path: &Path,
    opts: &DownloadOptions,
) -> Result<u64, RejectReason>
where
    C: HttpClient + ?Sized,
{
    let resp = client.get(url.request_url(), Some(opts.timeout))?;
    check_response(&resp, &opts.accepted_content_types)?;
    storage::commit_file(path, &resp.body).map_err(RejectReason::Storage)?;
    Ok(resp.body.len() as u64)
}
