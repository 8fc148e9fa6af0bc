//! URL modeling and filename derivation.
//!
//! Turns raw `href` values into absolute URLs and derives the local PDF
//! filename each download is stored under.

mod filename;
mod normalize;

pub use filename::derive_filename;
pub use normalize::{normalize, NormalizeError, NormalizedUrl, UrlNormalizer};
