//! Safe-mode whitelist classification
//!
//! Decides whether a recognized tag may pass through unescaped when the
//! surrounding pipeline produces sanitized output. Closed-world: unknown
//! tags, unknown attributes and unsafe URLs are all rejected.

use log::debug;
use url::Url;

use crate::tables::{ALLOWED_ATTRIBUTES, ALLOWED_TAGS};
use crate::tag::HtmlTag;

impl HtmlTag {
    /// Check this tag against the safe-mode whitelist.
    ///
    /// Never fails; anything that doesn't whitelist-match is unsafe.
    pub fn is_safe(&self) -> bool {
        let name = self.name().to_ascii_lowercase();

        if !ALLOWED_TAGS.contains(name.as_str()) {
            debug!("rejecting <{}>: tag not in whitelist", name);
            return false;
        }

        let allowed = match ALLOWED_ATTRIBUTES.get(name.as_str()) {
            Some(&list) => list,
            None => {
                // No attributes are allowed on this tag at all
                if self.attributes().is_empty() {
                    return true;
                }
                debug!("rejecting <{}>: tag allows no attributes", name);
                return false;
            }
        };

        for key in self.attributes().keys() {
            if !allowed.iter().any(|&a| a == key.as_str()) {
                debug!("rejecting <{}>: attribute '{}' not in whitelist", name, key);
                return false;
            }
        }

        if let Some(href) = self.attribute("href") {
            if !is_safe_url(href) {
                debug!("rejecting <{}>: unsafe href '{}'", name, href);
                return false;
            }
        }

        if let Some(src) = self.attribute("src") {
            if !is_safe_url(src) {
                debug!("rejecting <{}>: unsafe src '{}'", name, src);
                return false;
            }
        }

        true
    }
}

/// Check a raw attribute URL against the scheme whitelist.
///
/// Only absolute http, https and ftp URLs pass; scripting and pseudo
/// schemes, relative forms and unparseable text are all rejected.
pub fn is_safe_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https" | "ftp"),
        Err(_) => false,
    }
}
