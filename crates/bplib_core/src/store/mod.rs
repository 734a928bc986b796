//! Settings store contract and key composition.
//!
//! # Responsibility
//! - Define the key/value store interface injected into the admin facade.
//! - Own the `table::record` key convention used by every settings call.
//!
//! # Invariants
//! - Keys are composed with the fixed `::` separator; uniqueness is enforced
//!   by the store, not by this crate.
//! - Store implementations synchronize internally; all contract methods take
//!   `&self`.
//!
//! # See also
//! - docs/architecture/extension-library.md

use serde::{Deserialize, Serialize};

mod memory;

pub use memory::MemorySettingsStore;

/// Separator between the table and record halves of a settings key.
pub const KEY_SEPARATOR: &str = "::";

/// Composes the storage key for a `table`/`record` pair.
pub fn compose_key(table: &str, record: &str) -> String {
    format!("{table}{KEY_SEPARATOR}{record}")
}

/// Typed settings key as used by panel extensions.
///
/// The two halves are stored verbatim; no validation or escaping is applied,
/// so a part containing `::` composes the same flat string it would in the
/// panel itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingKey {
    /// Namespace half, conventionally the owning extension identifier.
    pub table: String,
    /// Record half, free-form within the namespace.
    pub record: String,
}

impl SettingKey {
    /// Creates a key from its two halves.
    pub fn new(table: impl Into<String>, record: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            record: record.into(),
        }
    }

    /// Returns the flat storage key (`table::record`).
    pub fn compose(&self) -> String {
        compose_key(&self.table, &self.record)
    }
}

/// Key/value settings store contract.
///
/// `get` returns the stored value or `None`, `set` overwrites
/// unconditionally and `forget` is a no-op for absent keys. The contract has
/// no error channel: the production store lives with the panel, and failures
/// there never reach extension callers through this interface.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn forget(&self, key: &str);
}
