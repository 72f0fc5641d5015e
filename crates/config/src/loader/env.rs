//! Environment variable reading for the snapshot.
//!
//! Responsibilities:
//! - Read credential variables from the process environment with
//!   empty/whitespace filtering.
//! - Assemble a [`KeySnapshot`] from the current environment.
//!
//! Does NOT handle:
//! - Locating the secrets file (see discover.rs).
//! - Writing file contents into the environment (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use secrecy::SecretString;
use std::path::PathBuf;

use crate::keys::{CredentialKey, KeySnapshot};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn secret_from_env(key: CredentialKey) -> Option<SecretString> {
    env_var_or_none(key.env_var()).map(|value| SecretString::new(value.into()))
}

/// Build a snapshot from the three fixed credential variables as they stand
/// in the process environment right now.
pub(crate) fn snapshot_from_env(source: Option<PathBuf>) -> KeySnapshot {
    KeySnapshot {
        openai_api_key: secret_from_env(CredentialKey::OpenAi),
        anthropic_api_key: secret_from_env(CredentialKey::Anthropic),
        openrouter_api_key: secret_from_env(CredentialKey::OpenRouter),
        source,
    }
}
