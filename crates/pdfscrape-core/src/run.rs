//! One scrape run: page → snapshot → links → downloads, strictly in order.

use crate::config::ScrapeConfig;
use crate::downloader::{download_pdf, CommitOutcome, DownloadOptions};
use crate::events::{Event, EventSink};
use crate::http::HttpClient;
use crate::links::{dedupe, extract_pdf_links};
use crate::page::fetch_page;
use crate::storage;
use crate::url_model::{derive_filename, NormalizeError, NormalizedUrl, UrlNormalizer};
use serde::Serialize;

/// Counters for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// `href="….pdf"` matches on the page, repeats included.
    pub links_found: usize,
    pub unique_links: usize,
    /// Unique links dropped as unusable URLs.
    pub filtered: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub rejected: usize,
}

/// A link that survived normalization, with the name it would be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDownload {
    pub url: NormalizedUrl,
    pub filename: String,
}

#[derive(Debug, Clone, Default)]
pub struct LinkPlan {
    pub links_found: usize,
    pub unique_links: usize,
    pub filtered: usize,
    pub downloads: Vec<PlannedDownload>,
}

/// Extracts, dedupes and normalizes the PDF links of `page_body`.
/// Unusable links are dropped and reported as [`Event::UrlFiltered`].
pub fn plan_downloads(
    page_body: &str,
    normalizer: &UrlNormalizer,
    sink: &dyn EventSink,
) -> LinkPlan {
    let raw = extract_pdf_links(page_body);
    let links_found = raw.len();
    let unique = dedupe(raw);
    sink.emit(Event::LinksExtracted {
        found: links_found,
        unique: unique.len(),
    });

    let mut plan = LinkPlan {
        links_found,
        unique_links: unique.len(),
        ..LinkPlan::default()
    };
    for link in unique {
        match normalizer.normalize(&link) {
            Ok(url) => {
                let filename = derive_filename(url.as_str());
                plan.downloads.push(PlannedDownload { url, filename });
            }
            Err(e) => {
                plan.filtered += 1;
                sink.emit(Event::UrlFiltered {
                    raw: link,
                    reason: e.to_string(),
                });
            }
        }
    }
    plan
}

/// Fetches the configured page and plans its downloads without touching disk.
pub fn discover<C>(
    cfg: &ScrapeConfig,
    client: &C,
    sink: &dyn EventSink,
) -> Result<LinkPlan, NormalizeError>
where
    C: HttpClient + ?Sized,
{
    let normalizer = UrlNormalizer::from_config(cfg)?;
    let body = fetch_page(client, &cfg.page_url, cfg.page_timeout(), sink)
        .map(|page| page.body)
        .unwrap_or_default();
    Ok(plan_downloads(&body, &normalizer, sink))
}

/// Runs a full scrape.
///
/// Only an unusable `base_origin`/`page_url` fails the run. Everything else
/// (page fetch, snapshot, individual downloads) is reported to `sink` and the
/// run carries on with what it has.
pub fn run_scrape<C>(
    cfg: &ScrapeConfig,
    client: &C,
    sink: &dyn EventSink,
) -> Result<RunSummary, NormalizeError>
where
    C: HttpClient + ?Sized,
{
    let normalizer = UrlNormalizer::from_config(cfg)?;
    let opts = DownloadOptions::from_config(cfg);

    if let Err(e) = storage::ensure_output_dir(&cfg.output_dir) {
        sink.emit(Event::OutputDirFailed {
            path: cfg.output_dir.clone(),
            error: format!("{:#}", e),
        });
    }
    if let Err(e) = storage::remove_stale_snapshot(&cfg.snapshot_file) {
        sink.emit(Event::SnapshotFailed {
            path: cfg.snapshot_file.clone(),
            error: format!("{:#}", e),
        });
    }

    let body = match fetch_page(client, &cfg.page_url, cfg.page_timeout(), sink) {
        Ok(page) => page.body,
        Err(_) => String::new(),
    };

    match storage::write_snapshot(&cfg.snapshot_file, &body) {
        Ok(()) => sink.emit(Event::SnapshotWritten {
            path: cfg.snapshot_file.clone(),
        }),
        Err(e) => sink.emit(Event::SnapshotFailed {
            path: cfg.snapshot_file.clone(),
            error: format!("{:#}", e),
        }),
    }

    let plan = plan_downloads(&body, &normalizer, sink);
    let mut summary = RunSummary {
        links_found: plan.links_found,
        unique_links: plan.unique_links,
        filtered: plan.filtered,
        ..RunSummary::default()
    };

    for planned in &plan.downloads {
        match download_pdf(client, &planned.url, &cfg.output_dir, &opts, sink) {
            CommitOutcome::Downloaded { .. } => summary.downloaded += 1,
            CommitOutcome::Skipped { .. } => summary.skipped += 1,
            CommitOutcome::Rejected(_) => summary.rejected += 1,
        }
    }

    tracing::debug!(?summary, "scrape finished");
    Ok(summary)
}
