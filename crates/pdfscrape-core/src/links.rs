//! PDF link extraction from raw page text.
//!
//! A pattern scan, not an HTML parse: only double-quoted `href` values whose
//! text ends in a literal (case-sensitive) `.pdf` are picked up.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static PDF_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="([^"]+\.pdf)""#).expect("valid regex"));

/// Every `href="….pdf"` value in `html`, in order of appearance, repeats included.
pub fn extract_pdf_links(html: &str) -> Vec<String> {
    PDF_HREF_RE
        .captures_iter(html)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Drops exact repeats, keeping the first occurrence of each link.
pub fn dedupe<I>(links: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_pdf_hrefs_in_order() {
        let html = r#"
            <a href="/docs/b.pdf">B</a>
            <a href="https://cdn.example.com/a.pdf">A</a>
            <a href="/page.html">not a pdf</a>
        "#;
        assert_eq!(
            extract_pdf_links(html),
            vec!["/docs/b.pdf", "https://cdn.example.com/a.pdf"]
        );
    }

    #[test]
    fn duplicates_collapse_to_one() {
        let html = r#"<a href="a.pdf">x</a><a href="a.pdf">y</a>"#;
        let raw = extract_pdf_links(html);
        assert_eq!(raw.len(), 2);
        assert_eq!(dedupe(raw), vec!["a.pdf"]);
    }

    #[test]
    fn dedupe_keeps_first_seen_order() {
        let links = ["c.pdf", "a.pdf", "c.pdf", "b.pdf", "a.pdf"]
            .into_iter()
            .map(String::from);
        assert_eq!(dedupe(links), vec!["c.pdf", "a.pdf", "b.pdf"]);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let html = r#"<a href="/UPPER.PDF">x</a><a href="/lower.pdf">y</a>"#;
        assert_eq!(extract_pdf_links(html), vec!["/lower.pdf"]);
    }

    #[test]
    fn single_quotes_and_query_suffix_are_ignored() {
        let html = r#"<a href='/single.pdf'>x</a><a href="/q.pdf?v=1">y</a>"#;
        assert!(extract_pdf_links(html).is_empty());
    }

    #[test]
    fn no_links_yields_empty() {
        assert!(extract_pdf_links("").is_empty());
        assert!(extract_pdf_links("<html><body>nothing here</body></html>").is_empty());
    }

    #[test]
    fn value_cannot_span_quotes() {
        let html = r#"<a href="/a.html" data-x="b.pdf">x</a>"#;
        assert!(extract_pdf_links(html).is_empty());
    }
}
