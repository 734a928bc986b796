//! Cache-busted HTML tag builders.
//!
//! # Responsibility
//! - Emit the `<link>`/`<script>` fragments extensions embed in admin pages.
//!
//! # Invariants
//! - The cache token is appended as a `?v=<token>` query suffix.
//! - `url` and token are embedded verbatim; escaping is the caller's
//!   responsibility, as asset URLs are panel-controlled.

/// Returns a stylesheet `<link>` tag for `url` with the cache token applied.
pub fn stylesheet_tag(url: &str, version: &str) -> String {
    format!("<link rel=\"stylesheet\" href=\"{url}?v={version}\">")
}

/// Returns a `<script>` tag for `url` with the cache token applied.
pub fn script_tag(url: &str, version: &str) -> String {
    format!("<script src=\"{url}?v={version}\"></script>")
}
