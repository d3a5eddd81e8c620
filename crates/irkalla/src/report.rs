//! Tag report building
//!
//! Sweeps a buffer for recognizable tags and records what the recognizer
//! and the safety classifier make of each one.

use std::collections::BTreeMap;

use irkalla_html::HtmlTag;
use irkalla_scan::Scanner;
use serde::Serialize;

/// One recognized tag, located in its source buffer
#[derive(Debug, Serialize)]
pub struct TagReport {
    /// Byte offset of the tag's `<`
    pub start: usize,
    /// Byte offset just past the recognized unit
    pub end: usize,
    pub name: String,
    pub kind: &'static str,
    pub classification: String,
    /// Sorted for stable output
    pub attributes: BTreeMap<String, String>,
    pub safe: bool,
}

impl TagReport {
    fn new(tag: &HtmlTag, start: usize, end: usize) -> Self {
        let kind = if tag.name() == "!" {
            "comment"
        } else if tag.closing() {
            "closing"
        } else if tag.closed() {
            "self-closing"
        } else {
            "opening"
        };

        Self {
            start,
            end,
            name: tag.name().to_string(),
            kind,
            classification: tag.flags().to_string(),
            attributes: tag
                .attributes()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            safe: tag.is_safe(),
        }
    }
}

/// Recognize every tag in the buffer.
///
/// A `<` that fails recognition is stepped over as literal text.
pub fn scan_tags(input: &str) -> Vec<TagReport> {
    let mut scanner = Scanner::new(input);
    let mut tags = Vec::new();

    while scanner.find_char('<') {
        let start = scanner.position();
        match HtmlTag::parse_at(&mut scanner) {
            Some(tag) => tags.push(TagReport::new(&tag, start, scanner.position())),
            None => scanner.skip_forward(1),
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_mixed_buffer() {
        let tags = scan_tags(r#"a <b>x</b> 1 < 2 <script>boom</script> <!-- c -->"#);
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["b", "b", "script", "script", "!"]);

        assert_eq!(tags[0].kind, "opening");
        assert_eq!(tags[1].kind, "closing");
        assert_eq!(tags[4].kind, "comment");

        assert!(tags[0].safe);
        assert!(!tags[2].safe);
        assert!(!tags[4].safe);
    }

    #[test]
    fn test_offsets_span_the_source() {
        let input = "xx<em>yy";
        let tags = scan_tags(input);
        assert_eq!(tags.len(), 1);
        assert_eq!(&input[tags[0].start..tags[0].end], "<em>");
    }

    #[test]
    fn test_empty_and_tagless_buffers() {
        assert!(scan_tags("").is_empty());
        assert!(scan_tags("no markup here").is_empty());
        assert!(scan_tags("1 < 2 and 3 < 4").is_empty());
    }

    #[test]
    fn test_self_closing_kind() {
        let tags = scan_tags("<hr/>");
        assert_eq!(tags[0].kind, "self-closing");
        assert_eq!(tags[0].classification, "block|no-closing");
    }
}
