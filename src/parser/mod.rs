//! Dictionary page parsing.
//!
//! This module turns saved HTML pages into the flat element sequence the
//! tree builder consumes, and chains the two together.
//!
//! HTML is parsed with `tl`. Every node is visited in document order and
//! `h2`..`h6`, `p`, `ul` and `ol` elements are kept; `h1` is the page title
//! and never part of the outline.

pub mod utils;

use std::path::Path;

use tracing::{debug, info};

use crate::error::DocumentError;
use crate::locale::HeadingNormalizer;
use crate::tree::{BuildOptions, HeadingTree, RankedElement, TreeBuilder};

/// Tag names that become tree elements.
pub const COLLECTED_TAGS: &[&str] = &["h2", "h3", "h4", "h5", "h6", "p", "ul", "ol"];

/// Parse a saved page from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the page cannot be parsed.
pub fn parse_file(
    path: &Path,
    normalizer: &HeadingNormalizer,
    options: BuildOptions,
) -> Result<HeadingTree, DocumentError> {
    let content = std::fs::read_to_string(path)?;
    parse_html(&content, normalizer, options)
}

/// Parse page HTML into a heading tree.
///
/// # Examples
///
/// ```
/// use wiktree::locale::HeadingNormalizer;
/// use wiktree::parser::parse_html;
/// use wiktree::tree::BuildOptions;
///
/// let html = "<h2>French[edit]</h2><h3>Noun[edit]</h3><ol><li>bread</li></ol>";
/// let tree = parse_html(html, &HeadingNormalizer::new("[edit]"), BuildOptions::default()).unwrap();
/// assert_eq!(tree.text_at(&["French", "Noun"]).unwrap(), Some("bread"));
/// ```
pub fn parse_html(
    html: &str,
    normalizer: &HeadingNormalizer,
    options: BuildOptions,
) -> Result<HeadingTree, DocumentError> {
    let elements = extract_elements(html, normalizer)?;
    let tree = TreeBuilder::build(elements, options)?;
    info!(
        headings = tree.len(),
        depth = tree.max_depth(),
        "built heading tree"
    );
    Ok(tree)
}

/// Classify page HTML into ranked elements, in document order.
///
/// Heading text is normalised; content blocks that are empty after
/// clean-up are skipped.
pub fn extract_elements(
    html: &str,
    normalizer: &HeadingNormalizer,
) -> Result<Vec<RankedElement>, DocumentError> {
    let dom = tl::parse(html, tl::ParserOptions::default())
        .map_err(|e| DocumentError::Html(e.to_string()))?;
    let parser = dom.parser();
    let mut elements = Vec::new();

    for node in dom.nodes().iter() {
        let Some(tag) = node.as_tag() else {
            continue;
        };
        let name = tag.name().as_utf8_str().to_ascii_lowercase();
        if !COLLECTED_TAGS.contains(&name.as_str()) {
            continue;
        }

        let raw = tag.inner_text(parser);
        let element = RankedElement::from_tag(&name, String::new())?;
        let element = if element.is_heading() {
            RankedElement {
                text: normalizer.normalize(&utils::normalize_inline(&raw)),
                ..element
            }
        } else {
            let text = utils::normalize_block(&raw);
            if text.is_empty() {
                debug!(tag = %name, "skipping empty content block");
                continue;
            }
            RankedElement { text, ..element }
        };
        elements.push(element);
    }

    debug!(count = elements.len(), "classified page elements");
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ElementKind;

    fn en() -> HeadingNormalizer {
        HeadingNormalizer::new("[edit]")
    }

    #[test]
    fn test_extract_elements_in_document_order() {
        let html = r#"
<html><body>
<h1>pain</h1>
<div class="mw-heading"><h2>English<span class="mw-editsection">[edit]</span></h2></div>
<h3>Etymology<span>[edit]</span></h3>
<p>From Middle English <i>peine</i>.</p>
<h3>Noun</h3>
<ol><li>Ache.</li><li>Suffering.</li></ol>
<table><tr><td>ignored</td></tr></table>
</body></html>"#;

        let elements = extract_elements(html, &en()).unwrap();
        let kinds: Vec<_> = elements.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Heading { level: 2 },
                ElementKind::Heading { level: 3 },
                ElementKind::Content,
                ElementKind::Heading { level: 3 },
                ElementKind::Content,
            ]
        );
        assert_eq!(elements[0].text, "English");
        assert_eq!(elements[1].text, "Etymology");
        assert_eq!(elements[2].text, "From Middle English peine.");
        assert!(elements[4].text.contains("Ache."));
        assert!(elements[4].text.contains("Suffering."));
    }

    #[test]
    fn test_empty_content_is_skipped() {
        let html = "<h2>A</h2><p>first</p><p>   </p>";
        let elements = extract_elements(html, &en()).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].text, "first");
    }

    #[test]
    fn test_entities_are_decoded() {
        let html = "<h2>Etymology&nbsp;1</h2><p>bread &amp; butter</p>";
        let elements = extract_elements(html, &en()).unwrap();
        assert_eq!(elements[0].text, "Etymology 1");
        assert_eq!(elements[1].text, "bread & butter");
    }

    #[test]
    fn test_encoded_edit_suffix_is_stripped() {
        let html = "<h2>Caf&eacute;&#91;edit&#93;</h2><p>d&#8217;autres &hellip;</p>";
        let elements = extract_elements(html, &en()).unwrap();
        assert_eq!(elements[0].text, "Café");
        assert_eq!(elements[1].text, "d\u{2019}autres \u{2026}");
    }

    #[test]
    fn test_parse_html_builds_tree() {
        let html = r#"
<p>Lead paragraph.</p>
<h2>French[edit]</h2>
<h3>Etymology[edit]</h3><p>From Latin panis.</p>
<h3>Noun[edit]</h3><ol><li>bread</li></ol>
<h4>Derived terms[edit]</h4><ul><li>pain perdu</li></ul>
<h2>Navigation menu</h2>
"#;
        let tree = parse_html(html, &en(), BuildOptions::default()).unwrap();

        let seen: Vec<_> = tree.traverse().collect();
        assert_eq!(
            seen,
            vec![
                (1, "French"),
                (2, "Etymology"),
                (2, "Noun"),
                (3, "Derived terms"),
                (1, "Navigation menu"),
            ]
        );
        assert_eq!(tree.node(tree.root()).text.as_deref(), Some("Lead paragraph."));
        assert_eq!(
            tree.text_at(&["French", "Etymology"]).unwrap(),
            Some("From Latin panis.")
        );
        assert_eq!(tree.text_at(&["French", "Noun"]).unwrap(), Some("bread"));
    }

    #[test]
    fn test_parse_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pain.html");
        std::fs::write(&path, "<h2>French</h2><p>bread</p>").unwrap();

        let tree = parse_file(&path, &en(), BuildOptions::default()).unwrap();
        assert_eq!(tree.text_at(&["French"]).unwrap(), Some("bread"));

        let err = parse_file(&dir.path().join("missing.html"), &en(), BuildOptions::default())
            .unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }
}
