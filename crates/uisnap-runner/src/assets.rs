//! Asset reference discovery in rendered markup.

use lazy_static::lazy_static;
use regex::Regex;

use uisnap_dom::Document;

lazy_static! {
    /// `src="..."` / `href="..."` attribute values
    static ref ATTR_REF: Regex = Regex::new(r#"(?:src|href)\s*=\s*"([^"]+)""#).unwrap();
    /// CSS `url(...)` references, with optional quotes
    static ref CSS_URL: Regex = Regex::new(r#"url\(\s*['"]?([^'")]+?)['"]?\s*\)"#).unwrap();
}

/// Collect asset references from the document body.
///
/// Scans the serialized markup for `src`/`href` attributes and CSS `url(...)`
/// references. Inline `data:` URIs and fragment anchors are not assets and
/// are skipped. Order of first occurrence is preserved; duplicates collapse.
pub fn collect_asset_paths(doc: &Document) -> Vec<String> {
    let markup = doc.inner_html(doc.body());
    let mut paths: Vec<String> = Vec::new();

    let candidates = ATTR_REF
        .captures_iter(&markup)
        .chain(CSS_URL.captures_iter(&markup))
        .map(|captures| captures[1].to_string());

    for candidate in candidates {
        if candidate.is_empty()
            || candidate.starts_with("data:")
            || candidate.starts_with('#')
        {
            continue;
        }
        if !paths.contains(&candidate) {
            paths.push(candidate);
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_markup(markup: &str) -> Document {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append_markup(body, markup).unwrap();
        doc
    }

    #[test]
    fn test_collects_src_and_href() {
        let doc = doc_with_markup(
            r#"<img src="/img/logo.png"><a href="/docs/page.html">docs</a>"#,
        );
        assert_eq!(
            collect_asset_paths(&doc),
            ["/img/logo.png", "/docs/page.html"]
        );
    }

    #[test]
    fn test_collects_css_urls() {
        let doc = doc_with_markup(
            r#"<div style="background-image: url('/img/bg.jpg')"></div>"#,
        );
        assert_eq!(collect_asset_paths(&doc), ["/img/bg.jpg"]);
    }

    #[test]
    fn test_unquoted_css_url() {
        let doc = doc_with_markup(r#"<div style="background: url(/img/tile.png)"></div>"#);
        assert_eq!(collect_asset_paths(&doc), ["/img/tile.png"]);
    }

    #[test]
    fn test_skips_data_uris_and_anchors() {
        let doc = doc_with_markup(
            r##"<img src="data:image/png;base64,AAAA"><a href="#section">jump</a>"##,
        );
        assert!(collect_asset_paths(&doc).is_empty());
    }

    #[test]
    fn test_deduplicates_preserving_order() {
        let doc = doc_with_markup(
            r#"<img src="/img/a.png"><img src="/img/b.png"><img src="/img/a.png">"#,
        );
        assert_eq!(collect_asset_paths(&doc), ["/img/a.png", "/img/b.png"]);
    }

    #[test]
    fn test_empty_body_has_no_assets() {
        let doc = Document::new();
        assert!(collect_asset_paths(&doc).is_empty());
    }
}
