//! Page fetch.

use crate::events::{Event, EventSink};
use crate::http::{FetchError, HttpClient};
use std::time::Duration;

/// The scraped page as text.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub status: u32,
    /// Body decoded as UTF-8; invalid sequences become U+FFFD.
    pub body: String,
}

/// GETs `url` and returns the body whatever the status; a non-2xx status is
/// only reported. Transport errors are reported and returned.
pub fn fetch_page<C>(
    client: &C,
    url: &str,
    timeout: Option<Duration>,
    sink: &dyn EventSink,
) -> Result<Page, FetchError>
where
    C: HttpClient + ?Sized,
{
    tracing::debug!(%url, "scraping page");
    let resp = match client.get(url, timeout) {
        Ok(resp) => resp,
        Err(e) => {
            sink.emit(Event::PageFetchFailed {
                url: url.to_string(),
                error: e.to_string(),
            });
            return Err(e);
        }
    };

    sink.emit(Event::PageFetched {
        url: url.to_string(),
        status: resp.status,
        bytes: resp.body.len(),
    });
    Ok(Page {
        url: url.to_string(),
        status: resp.status,
        body: String::from_utf8_lossy(&resp.body).into_owned(),
    })
}
