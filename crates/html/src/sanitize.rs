//! Safe-mode sanitize pass
//!
//! Walks a text buffer and emits it with only whitelisted markup left
//! intact. Tags that fail recognition or the whitelist are entity-escaped
//! along with the surrounding text.

use irkalla_scan::Scanner;

use crate::tag::HtmlTag;

/// Escape `&`, `<`, `>` and `"` for literal inclusion in HTML output
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Sanitize a buffer for safe output mode.
///
/// Recognized tags that pass the whitelist are emitted verbatim from their
/// source slice; every other `<` is treated as literal text and escaped,
/// as are `&`, `>` and `"` outside tags.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut scanner = Scanner::new(input);

    while let Some(c) = scanner.current() {
        if c == '<' {
            let start = scanner.position();
            if let Some(tag) = HtmlTag::parse_at(&mut scanner) {
                let source = &input[start..scanner.position()];
                if tag.is_safe() {
                    out.push_str(source);
                } else {
                    push_escaped(&mut out, source);
                }
                continue;
            }
        }

        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
        scanner.skip_forward(1);
    }

    out
}
