//! HTTP GET seam.
//!
//! Everything that touches the network goes through [`HttpClient`], so the
//! page fetch and PDF downloads can be driven by a test double. The
//! production implementation is [`CurlClient`] (libcurl `Easy` handle).

mod curl_client;

pub use curl_client::CurlClient;

use std::time::Duration;

/// Transport-level failure: no HTTP status was obtained.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("{0}")]
    Transport(String),
}

/// A fully buffered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    /// `Content-Type` of the final response (after redirects), if any.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

pub trait HttpClient {
    /// Issues a GET and buffers the whole body. `timeout` bounds the entire
    /// transfer; `None` means no limit.
    fn get(&self, url: &str, timeout: Option<Duration>) -> Result<HttpResponse, FetchError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, url: &str, timeout: Option<Duration>) -> Result<HttpResponse, FetchError> {
        (**self).get(url, timeout)
    }
}
