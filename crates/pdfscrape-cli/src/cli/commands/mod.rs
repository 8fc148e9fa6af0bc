//! CLI command handlers, one per file.

mod completions;
mod config;
mod links;
mod run;

pub use completions::run_completions;
pub use config::run_config;
pub use links::run_links;
pub use run::run_scrape;
