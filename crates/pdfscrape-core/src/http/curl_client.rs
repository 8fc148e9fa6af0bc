//! libcurl-backed [`HttpClient`].

use super::{FetchError, HttpClient, HttpResponse};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: u32 = 10;

#[derive(Debug, Clone, Default)]
pub struct CurlClient {
    user_agent: Option<String>,
}

impl CurlClient {
    pub fn new(user_agent: Option<String>) -> Self {
        Self { user_agent }
    }
}

impl HttpClient for CurlClient {
    fn get(&self, url: &str, timeout: Option<Duration>) -> Result<HttpResponse, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.connect_timeout(CONNECT_TIMEOUT)?;
        if let Some(t) = timeout {
            easy.timeout(t)?;
        }
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let content_type = easy.content_type()?.map(str::to_string);
        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
