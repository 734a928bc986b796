//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bplib_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use bplib_core::{AdminLibrary, MemorySettingsStore};

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from any embedding panel host.
    println!("bplib_core ping={}", bplib_core::ping());
    println!("bplib_core version={}", bplib_core::core_version());

    let lib = AdminLibrary::new(MemorySettingsStore::new(), "/srv/panel");
    lib.db_set("blueprint", "cache", "42");
    println!("bplib_core stylesheet={}", lib.import_stylesheet("style.css"));
}
