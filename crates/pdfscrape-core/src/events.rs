//! Diagnostics emitted by the scrape pipeline.
//!
//! Every outcome of a run is handed to an [`EventSink`] as an [`Event`]; the
//! remaining direct `tracing` calls are debug traces and startup messages.
//! The CLI uses [`TracingSink`], tests use [`MemorySink`] and assert on what
//! was recorded.

use std::path::PathBuf;
use std::sync::Mutex;

/// Something worth reporting during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PageFetched { url: String, status: u32, bytes: usize },
    PageFetchFailed { url: String, error: String },
    SnapshotWritten { path: PathBuf },
    /// Removing the stale snapshot or writing the new one failed.
    SnapshotFailed { path: PathBuf, error: String },
    OutputDirFailed { path: PathBuf, error: String },
    LinksExtracted { found: usize, unique: usize },
    /// Link dropped before any request because it is not a usable absolute URL.
    UrlFiltered { raw: String, reason: String },
    Skipped { url: String, path: PathBuf },
    Downloaded { url: String, path: PathBuf, bytes: u64 },
    Rejected { url: String, reason: String },
}

pub trait EventSink {
    fn emit(&self, event: Event);
}

/// Forwards events to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: Event) {
        match event {
            Event::PageFetched { url, status, bytes } => {
                if (200..300).contains(&status) {
                    tracing::info!(%url, status, bytes, "fetched page");
                } else {
                    tracing::warn!(%url, status, bytes, "page returned non-success status");
                }
            }
            Event::PageFetchFailed { url, error } => {
                tracing::error!(%url, %error, "page fetch failed");
            }
            Event::SnapshotWritten { path } => {
                tracing::debug!(path = %path.display(), "wrote page snapshot");
            }
            Event::SnapshotFailed { path, error } => {
                tracing::warn!(path = %path.display(), %error, "page snapshot failed");
            }
            Event::OutputDirFailed { path, error } => {
                tracing::error!(path = %path.display(), %error, "cannot create output directory");
            }
            Event::LinksExtracted { found, unique } => {
                tracing::info!(found, unique, "extracted pdf links");
            }
            Event::UrlFiltered { raw, reason } => {
                tracing::debug!(%raw, %reason, "skipping unusable link");
            }
            Event::Skipped { url, path } => {
                tracing::info!(%url, path = %path.display(), "file already exists, skipping");
            }
            Event::Downloaded { url, path, bytes } => {
                tracing::info!(%url, path = %path.display(), bytes, "downloaded");
            }
            Event::Rejected { url, reason } => {
                tracing::warn!(%url, %reason, "download rejected");
            }
        }
    }
}

/// Records every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, in emission order.
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: Event) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
