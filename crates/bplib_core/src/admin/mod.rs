//! Admin extension facade.
//!
//! # Responsibility
//! - Provide the uniform settings/file/manifest/asset API handed to
//!   third-party panel extensions.
//! - Own the fixed `blueprint` key names for notifications and the cache
//!   token.
//!
//! # Invariants
//! - Every call is stateless given the injected store and base path.
//! - Falsy stored values (`""`, `"0"`, `"false"`) read as absent; callers
//!   get their default instead.
//! - Filesystem and manifest behavior is the exact contract existing panel
//!   extensions were written against, quirks included.
//!
//! # See also
//! - docs/architecture/extension-library.md

use crate::assets;
use crate::files;
use crate::manifest;
use crate::store::{compose_key, SettingsStore};
use log::debug;
use std::path::{Path, PathBuf};

/// Namespace table for keys owned by the panel itself.
pub const BLUEPRINT_TABLE: &str = "blueprint";
/// Record holding the admin notification banner text.
pub const NOTIFICATION_TEXT_RECORD: &str = "notification:text";
/// Record holding the cache-busting token appended to asset URLs.
pub const CACHE_TOKEN_RECORD: &str = "cache";

/// Facade over settings storage, filesystem helpers and asset-tag builders.
///
/// Constructed from a [`SettingsStore`] implementation and the panel base
/// directory, which anchors the installed-extensions manifest location.
pub struct AdminLibrary<S: SettingsStore> {
    store: S,
    base_path: PathBuf,
}

impl<S: SettingsStore> AdminLibrary<S> {
    /// Creates the facade from a store and the panel base directory.
    pub fn new(store: S, base_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            base_path: base_path.into(),
        }
    }

    /// Returns the injected panel base directory.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Looks up `table::record`, falling back to `default`.
    ///
    /// A stored value that is falsy (`""`, `"0"`, `"false"`) is treated as
    /// absent and yields `default` too. Established quirk, kept on purpose.
    pub fn db_get(&self, table: &str, record: &str, default: Option<&str>) -> Option<String> {
        let key = compose_key(table, record);
        match self.store.get(&key) {
            Some(value) if !is_falsy(&value) => Some(value),
            _ => default.map(str::to_string),
        }
    }

    /// Stores `value` under `table::record`, overwriting unconditionally.
    pub fn db_set(&self, table: &str, record: &str, value: &str) {
        let key = compose_key(table, record);
        self.store.set(&key, value);
        debug!("event=db_set module=admin status=ok table={table} record={record}");
    }

    /// Deletes `table::record`; no-op when the key is absent.
    pub fn db_forget(&self, table: &str, record: &str) {
        let key = compose_key(table, record);
        self.store.forget(&key);
        debug!("event=db_forget module=admin status=ok table={table} record={record}");
    }

    /// Replaces the admin notification banner text.
    ///
    /// Single slot, overwritten on every call; no history, no expiry.
    pub fn notify(&self, text: &str) {
        self.db_set(BLUEPRINT_TABLE, NOTIFICATION_TEXT_RECORD, text);
    }

    /// Former delayed notification; now a no-op kept for API compatibility.
    #[deprecated(note = "delayed notifications were removed; this performs no work")]
    pub fn notify_after(&self, _delay_secs: u64, _text: &str) {}

    /// Former immediate-refresh notification; now a no-op kept for API
    /// compatibility.
    #[deprecated(note = "immediate-refresh notifications were removed; this performs no work")]
    pub fn notify_now(&self, _text: &str) {}

    /// Reads a file into a string, with errors reported as string payloads.
    ///
    /// Missing path -> `File not found: <path>`; existing but unreadable ->
    /// `File is not readable: <path>`. Both come back as ordinary values;
    /// see [`files::read`].
    pub fn file_read(&self, path: impl AsRef<Path>) -> String {
        files::read(path)
    }

    /// Creates (or truncates) an empty file at `path`. Failures are
    /// swallowed; see [`files::make`].
    pub fn file_make(&self, path: impl AsRef<Path>) {
        files::make(path);
    }

    /// Recursively deletes `path`. No-op when the path is neither a regular
    /// file nor a directory; see [`files::wipe`].
    pub fn file_wipe(&self, path: impl AsRef<Path>) {
        files::wipe(path);
    }

    /// Returns whether `identifier` appears in the installed-extensions
    /// manifest.
    ///
    /// Raw substring check for `<identifier>,`, so an identifier that is a
    /// suffix of another matches too. When the manifest is missing the
    /// search runs against the `file_read` sentinel message; both behaviors
    /// are part of the established contract.
    pub fn extension(&self, identifier: &str) -> bool {
        let contents = self.file_read(self.manifest_path());
        manifest::contains_identifier(&contents, identifier)
    }

    /// Returns the installed extension identifiers in manifest order.
    pub fn extension_list(&self) -> Vec<String> {
        let contents = self.file_read(self.manifest_path());
        manifest::parse_identifier_list(&contents)
    }

    /// Returns a cache-busted stylesheet `<link>` tag for `url`.
    ///
    /// `url` and the cache token are embedded verbatim, without escaping;
    /// asset URLs are panel-controlled.
    pub fn import_stylesheet(&self, url: &str) -> String {
        assets::stylesheet_tag(url, &self.cache_token())
    }

    /// Returns a cache-busted `<script>` tag for `url`. Same verbatim
    /// embedding as [`Self::import_stylesheet`].
    pub fn import_script(&self, url: &str) -> String {
        assets::script_tag(url, &self.cache_token())
    }

    fn cache_token(&self) -> String {
        self.db_get(BLUEPRINT_TABLE, CACHE_TOKEN_RECORD, None)
            .unwrap_or_default()
    }

    fn manifest_path(&self) -> PathBuf {
        manifest::installed_extensions_path(&self.base_path)
    }
}

/// Returns whether a stored string value reads as absent.
///
/// The falsy set is `""`, `"0"` and `"false"` — the string spellings of the
/// values the panel's dynamically-typed store treated as empty.
fn is_falsy(value: &str) -> bool {
    matches!(value, "" | "0" | "false")
}
