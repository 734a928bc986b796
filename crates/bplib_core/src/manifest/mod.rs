//! Installed-extensions manifest conventions.
//!
//! # Responsibility
//! - Locate the panel's flat manifest of installed extension identifiers.
//! - Answer membership and listing queries over raw manifest text.
//!
//! # Invariants
//! - The manifest is an external artifact; this crate only reads it.
//! - Entries are comma-terminated (`foo,bar,`); membership is a raw
//!   substring check on `<identifier>,`, not a tokenized parse.

use std::path::{Path, PathBuf};

/// Manifest location relative to the panel base directory.
pub const INSTALLED_EXTENSIONS_RELPATH: &str =
    ".blueprint/extensions/blueprint/private/db/installed_extensions";

/// Returns the absolute manifest path under `base`.
pub fn installed_extensions_path(base: impl AsRef<Path>) -> PathBuf {
    base.as_ref().join(INSTALLED_EXTENSIONS_RELPATH)
}

/// Returns whether `identifier` appears installed in `contents`.
///
/// The check looks for `<identifier>,` anywhere in the text. An identifier
/// that is a suffix of another therefore matches too (`foo` inside
/// `barfoo,`); that limitation is part of the established contract.
pub fn contains_identifier(contents: &str, identifier: &str) -> bool {
    contents.contains(&format!("{identifier},"))
}

/// Splits `contents` into the ordered identifier list.
///
/// Empty entries (consecutive or trailing commas) are discarded; everything
/// else is kept verbatim in file order.
pub fn parse_identifier_list(contents: &str) -> Vec<String> {
    contents
        .split(',')
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
