//! Static tag classification and safe-mode whitelist tables
//!
//! Process-wide constant data, initialized on first use and read-only from
//! then on.

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::LazyLock;

use crate::tag::TagFlags;

/// Default content model per known (lowercase) tag name
static TAG_FLAGS: LazyLock<FxHashMap<&'static str, TagFlags>> = LazyLock::new(|| {
    let mut m = FxHashMap::default();

    // === Block-level tags ===
    m.insert("p", TagFlags::BLOCK);
    m.insert("div", TagFlags::BLOCK);
    m.insert("h1", TagFlags::BLOCK);
    m.insert("h2", TagFlags::BLOCK);
    m.insert("h3", TagFlags::BLOCK);
    m.insert("h4", TagFlags::BLOCK);
    m.insert("h5", TagFlags::BLOCK);
    m.insert("h6", TagFlags::BLOCK);
    m.insert("blockquote", TagFlags::BLOCK);
    m.insert("pre", TagFlags::BLOCK);
    m.insert("table", TagFlags::BLOCK);
    m.insert("dl", TagFlags::BLOCK);
    m.insert("ol", TagFlags::BLOCK);
    m.insert("ul", TagFlags::BLOCK);
    m.insert("script", TagFlags::BLOCK);
    m.insert("noscript", TagFlags::BLOCK);
    m.insert("form", TagFlags::BLOCK);
    m.insert("fieldset", TagFlags::BLOCK);
    m.insert("iframe", TagFlags::BLOCK);
    m.insert("math", TagFlags::BLOCK);

    // === Tags that render block- or inline-level ===
    m.insert("ins", TagFlags::BLOCK | TagFlags::INLINE);
    m.insert("del", TagFlags::BLOCK | TagFlags::INLINE);
    m.insert("img", TagFlags::BLOCK | TagFlags::INLINE);

    // === Tags with no closing counterpart ===
    m.insert("hr", TagFlags::BLOCK | TagFlags::NO_CLOSING);
    m.insert("!", TagFlags::BLOCK | TagFlags::NO_CLOSING);

    m
});

/// Tag names permitted to pass through unescaped in safe output mode
pub(crate) static ALLOWED_TAGS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "b", "blockquote", "code", "dd", "dt", "dl", "del", "em", "h1", "h2", "h3", "h4", "h5",
        "h6", "i", "kbd", "li", "ol", "ul", "p", "pre", "s", "sub", "sup", "strong", "strike",
        "img", "a",
    ]
    .into_iter()
    .collect()
});

/// Attribute names permitted per whitelisted tag.
///
/// Tags absent from this table allow no attributes at all.
pub(crate) static ALLOWED_ATTRIBUTES: LazyLock<FxHashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut m = FxHashMap::default();
        m.insert("a", &["href", "title"] as &[_]);
        m.insert("img", &["src", "width", "height", "alt", "title"] as &[_]);
        m
    });

/// Look up the default content model for a tag name.
///
/// Comparison is case-insensitive; unknown names classify as inline.
pub fn classification_of(name: &str) -> TagFlags {
    TAG_FLAGS
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(TagFlags::INLINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_tags() {
        assert_eq!(classification_of("p"), TagFlags::BLOCK);
        assert_eq!(classification_of("blockquote"), TagFlags::BLOCK);
        assert_eq!(classification_of("iframe"), TagFlags::BLOCK);
    }

    #[test]
    fn test_dual_mode_tags() {
        assert_eq!(classification_of("img"), TagFlags::BLOCK | TagFlags::INLINE);
        assert_eq!(classification_of("del"), TagFlags::BLOCK | TagFlags::INLINE);
    }

    #[test]
    fn test_non_closing_tags() {
        assert_eq!(
            classification_of("hr"),
            TagFlags::BLOCK | TagFlags::NO_CLOSING
        );
        assert_eq!(
            classification_of("!"),
            TagFlags::BLOCK | TagFlags::NO_CLOSING
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(classification_of("DIV"), TagFlags::BLOCK);
        assert_eq!(classification_of("Img"), TagFlags::BLOCK | TagFlags::INLINE);
    }

    #[test]
    fn test_unknown_defaults_to_inline() {
        assert_eq!(classification_of("span"), TagFlags::INLINE);
        assert_eq!(classification_of("custom-element"), TagFlags::INLINE);
    }

    #[test]
    fn test_whitelist_membership() {
        assert!(ALLOWED_TAGS.contains("a"));
        assert!(ALLOWED_TAGS.contains("strong"));
        assert!(!ALLOWED_TAGS.contains("script"));
        assert!(!ALLOWED_TAGS.contains("iframe"));
    }

    #[test]
    fn test_attribute_whitelist_shape() {
        let a_attrs = ALLOWED_ATTRIBUTES.get("a").copied().unwrap();
        assert!(a_attrs.contains(&"href"));
        assert!(a_attrs.contains(&"title"));
        assert_eq!(a_attrs.len(), 2);
        assert!(ALLOWED_ATTRIBUTES.get("b").is_none());
    }
}
