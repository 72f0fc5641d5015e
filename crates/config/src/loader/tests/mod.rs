//! Tests for the secrets loader.
//!
//! Responsibilities:
//! - Test secrets file discovery (nearest ancestor, fallback).
//! - Test snapshot construction and the required-key accessors.
//! - Test the `DOTENV_DISABLED` gate and parse error handling.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` to serialize mutations to process-global state
//!   (the environment table written by `load_all`).
//! - Credential variables are managed through `temp_env` so they are
//!   restored even when `load_all` overwrites them mid-test.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

pub mod dotenv_tests;

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Runs `f` with the three credential variables and the dotenv gate cleared,
/// restoring whatever was set before (including values written by the loader
/// during the test).
pub fn with_clean_credentials<F: FnOnce()>(f: F) {
    temp_env::with_vars(
        [
            ("OPENAI_API_KEY", None::<&str>),
            ("ANTHROPIC_API_KEY", None),
            ("OPENROUTER_API_KEY", None),
            ("DOTENV_DISABLED", None),
        ],
        f,
    );
}
