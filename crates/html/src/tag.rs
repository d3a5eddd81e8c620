//! Recognized tag representation

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::tables::classification_of;

/// Default rendering category of a tag name.
///
/// Stored as a bitset because some tags belong to more than one category
/// (e.g. `img` renders block- or inline-level, `hr` is block-level with no
/// closing counterpart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagFlags(u8);

impl TagFlags {
    /// Block-level tag
    pub const BLOCK: TagFlags = TagFlags(0b001);
    /// Inline-level tag
    pub const INLINE: TagFlags = TagFlags(0b010);
    /// Tag with no closing counterpart (e.g. `<hr>`, comments)
    pub const NO_CLOSING: TagFlags = TagFlags(0b100);

    /// Check if all bits of `other` are set
    pub const fn contains(self, other: TagFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_block(self) -> bool {
        self.contains(Self::BLOCK)
    }

    pub fn is_inline(self) -> bool {
        self.contains(Self::INLINE)
    }

    pub fn is_no_closing(self) -> bool {
        self.contains(Self::NO_CLOSING)
    }
}

impl std::ops::BitOr for TagFlags {
    type Output = TagFlags;

    fn bitor(self, rhs: TagFlags) -> TagFlags {
        TagFlags(self.0 | rhs.0)
    }
}

impl fmt::Display for TagFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (bit, label) in [
            (Self::BLOCK, "block"),
            (Self::INLINE, "inline"),
            (Self::NO_CLOSING, "no-closing"),
        ] {
            if self.contains(bit) {
                write!(f, "{}{}", sep, label)?;
                sep = "|";
            }
        }
        Ok(())
    }
}

/// One recognized unit of raw markup: an opening tag, a closing tag, or a
/// comment.
///
/// Produced only by a successful [`HtmlTag::parse`] run and immutable from
/// then on, apart from the one-time classification cache fill.
#[derive(Debug)]
pub struct HtmlTag {
    name: String,
    attributes: FxHashMap<String, String>,
    closed: bool,
    closing: bool,
    flags: OnceLock<TagFlags>,
}

impl HtmlTag {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: FxHashMap::default(),
            closed: false,
            closing: false,
            flags: OnceLock::new(),
        }
    }

    pub(crate) fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub(crate) fn set_closing(&mut self, closing: bool) {
        self.closing = closing;
    }

    /// Store an attribute, keyed case-insensitively.
    ///
    /// Returns false if the name (ignoring case) is already present; the
    /// existing value is left untouched.
    pub(crate) fn insert_attribute(&mut self, name: &str, value: &str) -> bool {
        let key = name.to_ascii_lowercase();
        if self.attributes.contains_key(&key) {
            return false;
        }
        let _ = self.attributes.insert(key, value.to_string());
        true
    }

    /// The tag name, case-preserved as written (`"!"` for comments)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute names mapped to their raw, undecoded values
    pub fn attributes(&self) -> &FxHashMap<String, String> {
        &self.attributes
    }

    /// Look up a single attribute value, ignoring name case
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Was the tag written self-closing, e.g. `<br/>`?
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Is this an end tag, e.g. `</div>`?
    pub fn closing(&self) -> bool {
        self.closing
    }

    /// The tag's default rendering category.
    ///
    /// Computed from the lowercase name on first access and cached; unknown
    /// names classify as inline.
    pub fn flags(&self) -> TagFlags {
        *self.flags.get_or_init(|| classification_of(&self.name))
    }
}

impl Clone for HtmlTag {
    fn clone(&self) -> Self {
        let flags = OnceLock::new();
        if let Some(&resolved) = self.flags.get() {
            let _ = flags.set(resolved);
        }
        Self {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            closed: self.closed,
            closing: self.closing,
            flags,
        }
    }
}

impl PartialEq for HtmlTag {
    fn eq(&self, other: &Self) -> bool {
        // The classification cache is derived state and never compared
        self.name == other.name
            && self.attributes == other.attributes
            && self.closed == other.closed
            && self.closing == other.closing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_bits() {
        let both = TagFlags::BLOCK | TagFlags::INLINE;
        assert!(both.is_block());
        assert!(both.is_inline());
        assert!(!both.is_no_closing());
        assert!(both.contains(TagFlags::BLOCK));
        assert!(!both.contains(TagFlags::NO_CLOSING));
    }

    #[test]
    fn test_flags_display() {
        assert_eq!(TagFlags::INLINE.to_string(), "inline");
        assert_eq!(
            (TagFlags::BLOCK | TagFlags::NO_CLOSING).to_string(),
            "block|no-closing"
        );
    }

    #[test]
    fn test_classification_is_lazy_and_idempotent() {
        let tag = HtmlTag::new("DIV");
        let first = tag.flags();
        let second = tag.flags();
        assert_eq!(first, second);
        assert!(first.is_block());
    }

    #[test]
    fn test_unknown_name_defaults_to_inline() {
        let tag = HtmlTag::new("madeup");
        assert_eq!(tag.flags(), TagFlags::INLINE);
    }

    #[test]
    fn test_attribute_lookup_ignores_case() {
        let mut tag = HtmlTag::new("a");
        assert!(tag.insert_attribute("HREF", "http://example.com"));
        assert_eq!(tag.attribute("href"), Some("http://example.com"));
        assert_eq!(tag.attribute("Href"), Some("http://example.com"));
    }

    #[test]
    fn test_duplicate_attribute_rejected() {
        let mut tag = HtmlTag::new("a");
        assert!(tag.insert_attribute("href", "first"));
        assert!(!tag.insert_attribute("HREF", "second"));
        assert_eq!(tag.attribute("href"), Some("first"));
    }

    #[test]
    fn test_clone_carries_resolved_cache() {
        let tag = HtmlTag::new("p");
        let _ = tag.flags();
        let copy = tag.clone();
        assert_eq!(copy.flags(), tag.flags());
        assert_eq!(copy, tag);
    }
}
