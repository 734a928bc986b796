//! Extension helper library for the admin panel.
//! This crate is the single source of truth for the facade contract handed
//! to third-party extensions.

pub mod admin;
pub mod assets;
pub mod files;
pub mod logging;
pub mod manifest;
pub mod store;

pub use admin::{AdminLibrary, BLUEPRINT_TABLE, CACHE_TOKEN_RECORD, NOTIFICATION_TEXT_RECORD};
pub use logging::{default_log_level, init_logging, logging_status};
pub use manifest::{installed_extensions_path, INSTALLED_EXTENSIONS_RELPATH};
pub use store::{compose_key, MemorySettingsStore, SettingKey, SettingsStore, KEY_SEPARATOR};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
