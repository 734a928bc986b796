//! Filesystem helpers behind the admin facade.
//!
//! # Responsibility
//! - Provide the read/create/delete primitives exposed to extensions.
//! - Keep the errors-as-strings read contract stable for existing callers.
//!
//! # Invariants
//! - `read` never signals failure; missing or unreadable paths come back as
//!   the literal `File not found: <path>` / `File is not readable: <path>`
//!   messages.
//! - `make` and `wipe` report nothing to the caller; failures surface only
//!   as `warn` log events.
//!
//! # See also
//! - docs/architecture/extension-library.md

use log::warn;
use std::fs;
use std::path::Path;

/// Reads a file into a string.
///
/// # Contract
/// - Missing path: returns `File not found: <path>`.
/// - Existing but unreadable path (permissions, directory target, non-UTF-8
///   bytes): returns `File is not readable: <path>`.
/// - The messages are ordinary return values; callers cannot distinguish
///   them from file content that happens to match.
pub fn read(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    if !path.exists() {
        return missing_message(path);
    }

    match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => unreadable_message(path),
    }
}

/// Creates an empty file at `path`, truncating any existing content.
///
/// # Contract
/// - Returns nothing; an I/O failure is logged at `warn` and swallowed.
pub fn make(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(err) = fs::File::create(path) {
        warn!(
            "event=file_make module=files status=error path={} error={err}",
            path.display()
        );
    }
}

/// Recursively deletes a file or directory tree at `path`.
///
/// # Contract
/// - Directory: every entry is wiped recursively, then the emptied directory
///   is removed.
/// - Regular file: removed directly.
/// - Anything else (missing path, dangling symlink, special file): no-op.
/// - Returns nothing; failures are logged at `warn` and swallowed.
pub fn wipe(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if path.is_dir() {
        match fs::read_dir(path) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    wipe(entry.path());
                }
            }
            Err(err) => warn!(
                "event=file_wipe module=files status=error stage=list path={} error={err}",
                path.display()
            ),
        }
        if let Err(err) = fs::remove_dir(path) {
            warn!(
                "event=file_wipe module=files status=error stage=rmdir path={} error={err}",
                path.display()
            );
        }
    } else if path.is_file() {
        if let Err(err) = fs::remove_file(path) {
            warn!(
                "event=file_wipe module=files status=error stage=unlink path={} error={err}",
                path.display()
            );
        }
    }
}

fn missing_message(path: &Path) -> String {
    format!("File not found: {}", path.display())
}

fn unreadable_message(path: &Path) -> String {
    format!("File is not readable: {}", path.display())
}
