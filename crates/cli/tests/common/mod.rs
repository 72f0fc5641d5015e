//! Shared test utilities for nbprep integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure credential variables from the host never leak into tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Tests that need dotenv loading re-enable it explicitly with
//!   `DOTENV_DISABLED=0`.

use assert_cmd::Command;

/// Returns a hermetic `nbprep` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Credential and marker env vars are cleared so nothing leaks from the host.
pub fn nbprep_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("nbprep");

    // Hermeticity: prevent loading a local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("OPENAI_API_KEY")
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("OPENROUTER_API_KEY")
        .env_remove("COLAB_RELEASE_TAG")
        .env_remove("NBPREP_SECRETS_DIR")
        .env_remove("NBPREP_EXTRA_TOOLS");

    cmd
}
