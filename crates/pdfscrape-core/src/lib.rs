//! pdfscrape core: fetch one page, pick out its PDF links and download each
//! one into a local directory, skipping files that are already there.

pub mod config;
pub mod downloader;
pub mod events;
pub mod http;
pub mod links;
pub mod logging;
pub mod page;
pub mod run;
pub mod storage;
pub mod url_model;
