//! Style content extraction from rendered markup.

use lazy_static::lazy_static;
use regex::Regex;

use uisnap_dom::Document;

lazy_static! {
    /// `<style>` blocks, attributes allowed, content spanning lines
    static ref STYLE_BLOCK: Regex = Regex::new(r"(?s)<style[^>]*>(.*?)</style>").unwrap();
}

/// Collect the text of every `<style>` block in the document.
///
/// Scans the serialized body markup, so style element nodes and style tags
/// inside raw markup chunks are treated alike. Block contents are joined with
/// newlines; a document without styles yields an empty string.
pub fn collect_style_contents(doc: &Document) -> String {
    let markup = doc.inner_html(doc.body());
    STYLE_BLOCK
        .captures_iter(&markup)
        .map(|captures| captures[1].to_string())
        .collect::<Vec<_>>()
        .join("\n")
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
    fn test_collects_style_block_content() {
        let doc = doc_with_markup("<style>.btn { color: red; }</style><p>x</p>");
        assert_eq!(collect_style_contents(&doc), ".btn { color: red; }");
    }

    #[test]
    fn test_joins_multiple_blocks_with_newlines() {
        let doc = doc_with_markup("<style>.a {}</style><div><style>.b {}</style></div>");
        assert_eq!(collect_style_contents(&doc), ".a {}\n.b {}");
    }

    #[test]
    fn test_style_tag_attributes_are_ignored() {
        let doc = doc_with_markup(r#"<style type="text/css">.a {}</style>"#);
        assert_eq!(collect_style_contents(&doc), ".a {}");
    }

    #[test]
    fn test_multiline_content_is_kept_verbatim() {
        let doc = doc_with_markup("<style>.a {\n  color: red;\n}</style>");
        assert_eq!(collect_style_contents(&doc), ".a {\n  color: red;\n}");
    }

    #[test]
    fn test_style_element_nodes_are_found() {
        let mut doc = Document::new();
        let style = doc.create_element("style");
        let body = doc.body();
        doc.append_child(body, style).unwrap();
        doc.append_markup(style, ".late { opacity: 0; }").unwrap();
        assert_eq!(collect_style_contents(&doc), ".late { opacity: 0; }");
    }

    #[test]
    fn test_document_without_styles_yields_empty() {
        let doc = doc_with_markup("<p>no styles here</p>");
        assert_eq!(collect_style_contents(&doc), "");
    }
}
