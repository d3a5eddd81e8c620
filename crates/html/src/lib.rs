//! Irkalla HTML Recognizer
//!
//! Embedded-HTML recognition and safe-mode whitelisting for text-to-markup
//! pipelines.

mod recognizer;
mod safety;
mod sanitize;
mod tables;
mod tag;

pub use safety::is_safe_url;
pub use sanitize::{escape_html, sanitize};
pub use tables::classification_of;
pub use tag::{HtmlTag, TagFlags};
