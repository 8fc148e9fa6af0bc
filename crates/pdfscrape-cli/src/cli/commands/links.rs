//! `pdfscrape links` – show what a run would download.

use anyhow::Result;
use pdfscrape_core::config::ScrapeConfig;
use pdfscrape_core::events::TracingSink;
use pdfscrape_core::http::CurlClient;
use pdfscrape_core::run::discover;
use serde_json::json;

pub fn run_links(cfg: &ScrapeConfig, json: bool) -> Result<()> {
    let client = CurlClient::new(cfg.user_agent.clone());
    let plan = discover(cfg, &client, &TracingSink)?;

    if json {
        let items: Vec<_> = plan
            .downloads
            .iter()
            .map(|d| json!({ "url": d.url.as_str(), "filename": d.filename }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    for d in &plan.downloads {
        let exists = cfg.output_dir.join(&d.filename).is_file();
        println!(
            "{}\t{}{}",
            d.filename,
            d.url,
            if exists { "\t(exists)" } else { "" }
        );
    }
    Ok(())
}
