//! Acceptance rules for a downloaded body.

use crate::http::{FetchError, HttpResponse};

/// Why a download produced no file.
#[derive(Debug, thiserror::Error)]
pub enum RejectReason {
    #[error("network: {0}")]
    Network(#[from] FetchError),
    /// Anything but `200 OK`, redirects already followed.
    #[error("HTTP {0}")]
    Status(u32),
    #[error("unexpected content type: {}", .0.as_deref().unwrap_or("<none>"))]
    ContentType(Option<String>),
    #[error("empty body")]
    Empty,
    #[error("storage: {0:#}")]
    Storage(anyhow::Error),
}

/// Checks status, content type and length, in that order.
///
/// `accepted` holds Content-Type substrings; matching is ASCII
/// case-insensitive so `application/PDF; charset=binary` still counts.
pub fn check_response(resp: &HttpResponse, accepted: &[String]) -> Result<(), RejectReason> {
    if resp.status != 200 {
        return Err(RejectReason::Status(resp.status));
    }
    if !content_type_accepted(resp.content_type.as_deref(), accepted) {
        return Err(RejectReason::ContentType(resp.content_type.clone()));
    }
    if resp.body.is_empty() {
        return Err(RejectReason::Empty);
    }
    Ok(())
}

fn content_type_accepted(content_type: Option<&str>, accepted: &[String]) -> bool {
    let Some(ct) = content_type else {
        return false;
    };
    let ct = ct.to_ascii_lowercase();
    accepted
        .iter()
        .any(|a| !a.is_empty() && ct.contains(&a.to_ascii_lowercase()))
}
