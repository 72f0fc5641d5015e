//! Secrets file discovery.
//!
//! Responsibilities:
//! - Walk ancestor directories, nearest first, for the secrets file.
//! - Compute the executable-relative fallback path used when no ancestor
//!   holds one.
//!
//! Does NOT handle:
//! - Parsing the file (see builder.rs).
//!
//! Invariants:
//! - The nearest ancestor copy wins when several levels hold a secrets file.
//! - The fallback path is returned whether or not a file exists there, so
//!   callers always get a stable, predictable location to report.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::SECRETS_FILE_NAME;

/// Search `start` and every ancestor directory, nearest first, for the
/// secrets file. Returns the first existing file, or `None`.
pub fn discover_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(SECRETS_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// The assumed repository-root location of the secrets file: the parent of
/// the running executable's directory. Falls back to the parent of the
/// working directory when the executable path cannot be determined.
///
/// The returned path may not exist on disk.
pub fn fallback_path() -> PathBuf {
    let anchor = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let root = anchor
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(anchor);
    root.join(SECRETS_FILE_NAME)
}

/// Resolve the secrets file location: ancestor search first, then the
/// executable-relative fallback.
pub fn resolve_from(start: &Path) -> PathBuf {
    match discover_from(start) {
        Some(found) => {
            debug!(path = %found.display(), "secrets file found by ancestor search");
            found
        }
        None => {
            let fallback = fallback_path();
            debug!(path = %fallback.display(), "no secrets file in ancestors, using fallback");
            fallback
        }
    }
}
