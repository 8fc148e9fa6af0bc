//! `pdfscrape run` – fetch the page and download its PDFs.

use anyhow::Result;
use pdfscrape_core::config::ScrapeConfig;
use pdfscrape_core::events::TracingSink;
use pdfscrape_core::http::CurlClient;
use pdfscrape_core::run;

pub fn run_scrape(cfg: &ScrapeConfig, json: bool) -> Result<()> {
    let client = CurlClient::new(cfg.user_agent.clone());
    let summary = run::run_scrape(cfg, &client, &TracingSink)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} downloaded, {} skipped, {} rejected ({} unique links, {} unusable) -> {}",
            summary.downloaded,
            summary.skipped,
            summary.rejected,
            summary.unique_links,
            summary.filtered,
            cfg.output_dir.display()
        );
    }
    Ok(())
}
