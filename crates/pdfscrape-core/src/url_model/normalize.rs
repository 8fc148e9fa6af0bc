//! Raw `href` value → absolute URL.

use crate::config::{ResolveMode, ScrapeConfig};
use std::fmt;
use url::Url;

/// Why a link was filtered out before any request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("empty link")]
    Empty,
    #[error("not an absolute URL: {0}")]
    Parse(url::ParseError),
    #[error("URL has no host")]
    NoHost,
    #[error("invalid base URL {base:?}: {source}")]
    InvalidBase {
        base: String,
        source: url::ParseError,
    },
}

/// An absolute URL with a host, kept exactly as it was produced.
///
/// The string is not re-serialized through [`Url`], so a link that already
/// had a host comes out byte-for-byte unchanged. Requests use
/// [`NormalizedUrl::request_url`] instead, which is percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    text: String,
    parsed: Url,
}

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &Url {
        &self.parsed
    }

    /// Serialized form sent on the wire: spaces and other unsafe bytes are
    /// percent-encoded, tabs and newlines dropped.
    pub fn request_url(&self) -> &str {
        self.parsed.as_str()
    }

    fn validate(text: String) -> Result<Self, NormalizeError> {
        let parsed = Url::parse(&text).map_err(NormalizeError::Parse)?;
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(NormalizeError::NoHost);
        }
        Ok(Self { text, parsed })
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// True when `raw` already names a host (absolute or protocol-relative).
fn has_host(raw: &str) -> bool {
    if raw.starts_with("//") {
        return true;
    }
    match Url::parse(raw) {
        Ok(u) => u.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Resolves links against a base origin (and, in [`ResolveMode::Standard`], the page URL).
#[derive(Debug, Clone)]
pub struct UrlNormalizer {
    base_origin: String,
    base_scheme: String,
    page_url: Url,
    mode: ResolveMode,
}

impl UrlNormalizer {
    pub fn new(
        base_origin: &str,
        page_url: &str,
        mode: ResolveMode,
    ) -> Result<Self, NormalizeError> {
        let origin = Url::parse(base_origin).map_err(|source| NormalizeError::InvalidBase {
            base: base_origin.to_string(),
            source,
        })?;
        let page_url = Url::parse(page_url).map_err(|source| NormalizeError::InvalidBase {
            base: page_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_origin: base_origin.to_string(),
            base_scheme: origin.scheme().to_string(),
            page_url,
            mode,
        })
    }

    pub fn from_config(cfg: &ScrapeConfig) -> Result<Self, NormalizeError> {
        Self::new(&cfg.base_origin, &cfg.page_url, cfg.resolve_mode)
    }

    /// Turns a raw link into an absolute URL, or explains why it cannot be used.
    ///
    /// Links that already carry a host pass through unchanged, which makes
    /// normalization idempotent. Protocol-relative links (`//host/x.pdf`) take
    /// the base origin's scheme. Anything else is resolved per [`ResolveMode`].
    pub fn normalize(&self, raw: &str) -> Result<NormalizedUrl, NormalizeError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(NormalizeError::Empty);
        }

        let candidate = if raw.starts_with("//") {
            format!("{}:{}", self.base_scheme, raw)
        } else if has_host(raw) {
            raw.to_string()
        } else {
            match self.mode {
                ResolveMode::Naive => format!("{}{}", self.base_origin, raw),
                ResolveMode::Standard => self
                    .page_url
                    .join(raw)
                    .map_err(NormalizeError::Parse)?
                    .to_string(),
            }
        };

        NormalizedUrl::validate(candidate)
    }
}

/// Naive normalization: prefixes `base_origin` to links without a host.
pub fn normalize(raw: &str, base_origin: &str) -> Result<NormalizedUrl, NormalizeError> {
    UrlNormalizer::new(base_origin, base_origin, ResolveMode::Naive)?.normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://example.com";

    #[test]
    fn relative_path_gets_origin() {
        let n = normalize("/docs/file.PDF", ORIGIN).unwrap();
        assert_eq!(n.as_str(), "https://example.com/docs/file.PDF");
        assert_eq!(n.url().host_str(), Some("example.com"));
    }

    #[test]
    fn absolute_passes_through_unchanged() {
        let raw = "https://cdn.example.org/a/b.pdf";
        assert_eq!(normalize(raw, ORIGIN).unwrap().as_str(), raw);
        // Url would serialize this with a trailing slash; we keep the original text.
        let bare = "https://cdn.example.org";
        assert_eq!(normalize(bare, ORIGIN).unwrap().as_str(), bare);
    }

    #[test]
    fn request_url_is_percent_encoded() {
        let n = normalize("/files/Body Filler TDS.pdf", ORIGIN).unwrap();
        assert_eq!(n.as_str(), "https://example.com/files/Body Filler TDS.pdf");
        assert_eq!(
            n.request_url(),
            "https://example.com/files/Body%20Filler%20TDS.pdf"
        );

        let n = normalize("/files/a\nb.pdf", ORIGIN).unwrap();
        assert_eq!(n.request_url(), "https://example.com/files/ab.pdf");
    }

    #[test]
    fn no_leading_slash_is_concatenated_naively() {
        let n = normalize("docs/a.pdf", ORIGIN).unwrap();
        assert_eq!(n.as_str(), "https://example.comdocs/a.pdf");
    }

    #[test]
    fn protocol_relative_takes_origin_scheme() {
        let n = normalize("//cdn.example.org/a.pdf", ORIGIN).unwrap();
        assert_eq!(n.as_str(), "https://cdn.example.org/a.pdf");
    }

    #[test]
    fn standard_mode_resolves_against_page() {
        let norm = UrlNormalizer::new(
            ORIGIN,
            "https://example.com/en/products/index.html",
            ResolveMode::Standard,
        )
        .unwrap();
        assert_eq!(
            norm.normalize("docs/a.pdf").unwrap().as_str(),
            "https://example.com/en/products/docs/a.pdf"
        );
        assert_eq!(
            norm.normalize("../b.pdf").unwrap().as_str(),
            "https://example.com/en/b.pdf"
        );
        assert_eq!(
            norm.normalize("/c.pdf").unwrap().as_str(),
            "https://example.com/c.pdf"
        );
    }

    #[test]
    fn rejects_empty_and_hostless() {
        assert_eq!(normalize("", ORIGIN).unwrap_err(), NormalizeError::Empty);
        assert_eq!(normalize("   ", ORIGIN).unwrap_err(), NormalizeError::Empty);
        assert_eq!(
            normalize("/a.pdf", "file:///srv").unwrap_err(),
            NormalizeError::NoHost
        );
    }

    #[test]
    fn rejects_unparseable_result() {
        let err = normalize("/a.pdf", "https://exa mple.com").unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidBase { .. }));
        // ":a.pdf" has no host, so it lands where the port would be.
        let err = normalize(":a.pdf", ORIGIN).unwrap_err();
        assert!(matches!(err, NormalizeError::Parse(_)));
    }

    #[test]
    fn invalid_base_is_reported() {
        let err = UrlNormalizer::new("not a url", ORIGIN, ResolveMode::Naive).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidBase { .. }));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn idempotent(path in "/[A-Za-z0-9_~-]{1,10}(/[A-Za-z0-9._~-]{0,10}){0,3}\\.pdf") {
                let once = normalize(&path, ORIGIN).unwrap();
                let twice = normalize(once.as_str(), ORIGIN).unwrap();
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn idempotent_standard(
                path in "[A-Za-z0-9_~-]{1,10}(/[A-Za-z0-9._~-]{0,10}){0,3}\\.pdf"
            ) {
                let norm = UrlNormalizer::new(
                    ORIGIN,
                    "https://example.com/a/b/index.html",
                    ResolveMode::Standard,
                ).unwrap();
                let once = norm.normalize(&path).unwrap();
                let twice = norm.normalize(once.as_str()).unwrap();
                prop_assert_eq!(once, twice);
            }
        }
    }
}
