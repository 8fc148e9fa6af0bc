//! CLI for pdfscrape.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pdfscrape_core::config::{self, ScrapeConfig};
use std::path::PathBuf;

use commands::{run_completions, run_config, run_links, run_scrape};

/// Top-level CLI. With no subcommand, `run` is assumed.
#[derive(Debug, Parser)]
#[command(name = "pdfscrape")]
#[command(about = "Download every PDF linked from a web page", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/pdfscrape/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Page to scrape; the base origin for relative links follows it.
    #[arg(long, global = true, value_name = "URL")]
    pub page_url: Option<String>,

    /// Directory the PDFs are saved to.
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the page and download its PDFs.
    Run {
        /// Print the run summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the PDF links found on the page and their local filenames, without downloading.
    Links {
        /// Print the list as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML.
    Config,

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.dispatch()
    }

    fn dispatch(self) -> Result<()> {
        let command = self.command.unwrap_or(CliCommand::Run { json: false });
        // Only loaded by the commands that use it; `completions` does not.
        let load = || -> Result<(ScrapeConfig, PathBuf)> {
            let (cfg, source) = load_config(self.config, self.page_url, self.output_dir)?;
            tracing::debug!("loaded config from {}: {:?}", source.display(), cfg);
            Ok((cfg, source))
        };

        match command {
            CliCommand::Run { json } => run_scrape(&load()?.0, json)?,
            CliCommand::Links { json } => run_links(&load()?.0, json)?,
            CliCommand::Config => {
                let (cfg, source) = load()?;
                run_config(&cfg, &source)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

/// Loads the config file (explicit or XDG default) and applies flag overrides.
/// Returns the config and the file it came from.
fn load_config(
    path: Option<PathBuf>,
    page_url: Option<String>,
    output_dir: Option<PathBuf>,
) -> Result<(ScrapeConfig, PathBuf)> {
    let (mut cfg, source) = match path {
        Some(p) => (config::load_from(&p)?, p),
        None => (config::load_or_init()?, config::config_path()?),
    };
    if let Some(url) = page_url {
        cfg.set_page_url(&url)?;
    }
    if let Some(dir) = output_dir {
        cfg.output_dir = dir;
    }
    Ok((cfg, source))
}

#[cfg(test)]
mod tests;
