//! `pdfscrape config` – print the effective configuration.

use anyhow::Result;
use pdfscrape_core::config::ScrapeConfig;
use std::path::Path;

pub fn run_config(cfg: &ScrapeConfig, source: &Path) -> Result<()> {
    println!("# {}", source.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
