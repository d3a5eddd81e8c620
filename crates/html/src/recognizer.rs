//! Raw markup recognition
//!
//! Recognizes one syntactic unit — an opening tag, a closing tag, or a
//! comment — at a `<` in a text buffer. Recognition is all-or-nothing: on
//! any failure the cursor is rewound to where it started and no tag is
//! produced.

use irkalla_scan::Scanner;

use crate::tag::HtmlTag;

impl HtmlTag {
    /// Recognize a tag at `position` in `text`.
    ///
    /// On success the returned tag is fully populated and `position` has
    /// advanced past the recognized unit. On no-match `position` is left
    /// untouched, so the caller can treat the `<` as literal text.
    pub fn parse(text: &str, position: &mut usize) -> Option<HtmlTag> {
        if !text.is_char_boundary(*position) {
            return None;
        }
        let mut scanner = Scanner::at(text, *position);
        let tag = Self::parse_at(&mut scanner)?;
        *position = scanner.position();
        Some(tag)
    }

    /// Recognize a tag at the scanner's current position.
    ///
    /// Same contract as [`HtmlTag::parse`]: the scanner advances past the
    /// match on success and is restored to its starting position on
    /// no-match.
    pub fn parse_at(scanner: &mut Scanner<'_>) -> Option<HtmlTag> {
        let save = scanner.position();
        let tag = parse_tag(scanner);
        if tag.is_none() {
            scanner.set_position(save);
        }
        tag
    }
}

fn parse_tag(p: &mut Scanner<'_>) -> Option<HtmlTag> {
    // Does it look like a tag?
    if p.current() != Some('<') {
        return None;
    }
    p.skip_forward(1);

    // Comment, e.g. <!-- text -->
    if p.skip_string("!--") {
        p.mark();

        // An unterminated comment is not a tag of any kind
        if !p.find_string("-->") {
            return None;
        }

        let mut tag = HtmlTag::new("!");
        tag.insert_attribute("content", p.extract());
        tag.set_closed(true);
        p.skip_forward(3);
        return Some(tag);
    }

    // Closing tag, e.g. </div>
    let closing = p.skip_char('/');

    let name = p.skip_identifier()?;

    let mut tag = HtmlTag::new(name);
    tag.set_closing(closing);

    // A closing tag allows nothing between the name and the '>',
    // not even whitespace
    if closing {
        if !p.skip_char('>') {
            return None;
        }
        return Some(tag);
    }

    while !p.eof() {
        p.skip_whitespace();

        // Self-closed tag, e.g. <hr />
        if p.skip_string("/>") {
            tag.set_closed(true);
            return Some(tag);
        }

        // End of tag?
        if p.skip_char('>') {
            return Some(tag);
        }

        let attr_name = p.skip_identifier()?;

        p.skip_whitespace();

        if !p.skip_char('=') {
            return None;
        }

        p.skip_whitespace();

        if p.skip_char('"') {
            p.mark();
            if !p.find_char('"') {
                return None;
            }

            if !tag.insert_attribute(attr_name, p.extract()) {
                return None;
            }

            // Skip closing quote
            p.skip_forward(1);
        } else {
            // Unquoted value: everything up to whitespace, '>' or '/'.
            // The run may be empty.
            p.mark();
            while let Some(c) = p.current() {
                if c.is_whitespace() || c == '>' || c == '/' {
                    break;
                }
                p.skip_forward(1);
            }

            if !p.eof() && !tag.insert_attribute(attr_name, p.extract()) {
                return None;
            }
        }
    }

    // Ran off the end without a terminator
    None
}
