use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How links without a host are turned into absolute URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Prefix `base_origin` verbatim (`"docs/a.pdf"` becomes `"https://hostdocs/a.pdf"`).
    #[default]
    Naive,
    /// RFC 3986 resolution against `page_url`.
    Standard,
}

/// Scrape configuration loaded from `~/.config/pdfscrape/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Page scanned for PDF links.
    pub page_url: String,
    /// Origin prefixed to links that carry no host.
    pub base_origin: String,
    /// Directory receiving the PDFs; created on startup if missing.
    pub output_dir: PathBuf,
    /// Local copy of the fetched page, replaced on every run.
    pub snapshot_file: PathBuf,
    /// Timeout for each PDF download, in seconds.
    #[serde(default = "default_download_timeout_secs")]
    pub download_timeout_secs: u64,
    /// Optional timeout for the page fetch (None = no timeout).
    #[serde(default)]
    pub page_timeout_secs: Option<u64>,
    #[serde(default)]
    pub resolve_mode: ResolveMode,
    /// Content-Type substrings accepted as a PDF body.
    #[serde(default = "default_accepted_content_types")]
    pub accepted_content_types: Vec<String>,
    /// Optional User-Agent header (None = libcurl default).
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_download_timeout_secs() -> u64 {
    15 * 60
}

fn default_accepted_content_types() -> Vec<String> {
    vec!["application/pdf".to_string(), "binary/octet-stream".to_string()]
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            page_url: "https://www.uschem.com/en/products/body-fillers/index.html".to_string(),
            base_origin: "https://www.uschem.com".to_string(),
            output_dir: PathBuf::from("PDFs/"),
            snapshot_file: PathBuf::from("littletrees.html"),
            download_timeout_secs: default_download_timeout_secs(),
            page_timeout_secs: None,
            resolve_mode: ResolveMode::Naive,
            accepted_content_types: default_accepted_content_types(),
            user_agent: None,
        }
    }
}

impl ScrapeConfig {
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }

    pub fn page_timeout(&self) -> Option<Duration> {
        self.page_timeout_secs.map(Duration::from_secs)
    }

    /// Points the scrape at another page; `base_origin` follows the page's origin.
    pub fn set_page_url(&mut self, page_url: &str) -> Result<()> {
        let parsed =
            url::Url::parse(page_url).with_context(|| format!("invalid page URL {page_url:?}"))?;
        let origin = parsed.origin();
        if !origin.is_tuple() {
            anyhow::bail!("page URL {page_url:?} has no origin");
        }
        self.page_url = page_url.to_string();
        self.base_origin = origin.ascii_serialization();
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pdfscrape")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrapeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScrapeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys are an error except
/// the ones with serde defaults.
pub fn load_from(path: &Path) -> Result<ScrapeConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ScrapeConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
