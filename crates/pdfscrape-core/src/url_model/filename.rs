//! Safe local filename from a PDF URL.

const PDF_EXT: &str = ".pdf";
/// Leftover of an `.pdf` (or `-pdf`, `_pdf`...) once punctuation became `_`.
const PDF_FRAGMENT: &str = "_pdf";
/// Stem used when the URL's last segment has no ASCII alphanumerics at all.
const FALLBACK_STEM: &str = "document";

/// Derives the filename a PDF URL is saved under.
///
/// The last path segment of the lowercased URL is reduced to `[a-z0-9_]`
/// (other characters become `_`, runs collapse, edges are trimmed), every
/// `_pdf` fragment is dropped and `.pdf` is appended. The result always
/// matches `^[a-z0-9_]+\.pdf$` with no leading, trailing or doubled `_`.
///
/// # Examples
///
/// - `derive_filename("https://example.com/docs/file.PDF")` → `"file.pdf"`
/// - `derive_filename("https://example.com/a/Safety Data-Sheet.pdf")` → `"safety_data_sheet.pdf"`
pub fn derive_filename(url: &str) -> String {
    let lower = url.to_lowercase();
    let mut stem = underscore_non_alnum(last_segment(&lower));

    while stem.contains(PDF_FRAGMENT) {
        stem = stem.replace(PDF_FRAGMENT, "");
    }
    if stem.is_empty() {
        stem.push_str(FALLBACK_STEM);
    }

    // The stem holds no '.', so the extension is never already present.
    stem.push_str(PDF_EXT);
    stem
}

/// Text after the last `/`, ignoring trailing slashes. Query and fragment stay attached.
fn last_segment(s: &str) -> &str {
    let trimmed = s.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Replaces everything outside `[a-z0-9]` with `_`, collapsing runs and trimming the ends.
fn underscore_non_alnum(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut prev_underscore = false;

    for c in segment.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            out.push('_');
            prev_underscore = true;
        }
    }

    out.trim_matches('_').to_string()
}
