//! Credential key and snapshot types.
//!
//! Responsibilities:
//! - Define the fixed set of provider credential keys the loader recognizes.
//! - Define the snapshot returned by `SecretsLoader::load_all`.
//!
//! Does NOT handle:
//! - Locating or parsing the secrets file (see the loader module).
//!
//! Invariants:
//! - All credential values use `secrecy::SecretString` to prevent accidental
//!   logging or Debug-printing.
//! - A snapshot field is `None` when the variable is unset, empty, or
//!   whitespace-only; a present field always holds a non-empty value.

use secrecy::SecretString;
use std::fmt;
use std::path::PathBuf;

/// The fixed provider credentials recognized by the loader.
///
/// Other keys in the secrets file are still loaded into the process
/// environment but are not exposed through [`KeySnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKey {
    OpenAi,
    Anthropic,
    OpenRouter,
}

impl CredentialKey {
    /// All recognized credential keys, in display order.
    pub const ALL: [CredentialKey; 3] = [
        CredentialKey::OpenAi,
        CredentialKey::Anthropic,
        CredentialKey::OpenRouter,
    ];

    /// The environment variable this credential is read from.
    pub const fn env_var(self) -> &'static str {
        match self {
            CredentialKey::OpenAi => "OPENAI_API_KEY",
            CredentialKey::Anthropic => "ANTHROPIC_API_KEY",
            CredentialKey::OpenRouter => "OPENROUTER_API_KEY",
        }
    }

    /// Human-readable provider name.
    pub const fn label(self) -> &'static str {
        match self {
            CredentialKey::OpenAi => "OpenAI",
            CredentialKey::Anthropic => "Anthropic",
            CredentialKey::OpenRouter => "OpenRouter",
        }
    }
}

impl fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A point-in-time view of the provider credentials.
///
/// Recomputed on every `load_all` call; never cached or persisted.
#[derive(Debug, Clone)]
pub struct KeySnapshot {
    pub openai_api_key: Option<SecretString>,
    pub anthropic_api_key: Option<SecretString>,
    pub openrouter_api_key: Option<SecretString>,
    /// The secrets file found by discovery, `None` when no file was found
    /// or the resolved fallback does not exist. Present even when the
    /// `DOTENV_DISABLED` gate skipped parsing it.
    pub source: Option<PathBuf>,
}

impl KeySnapshot {
    /// Generic fetch of one provider's credential.
    pub fn get(&self, key: CredentialKey) -> Option<&SecretString> {
        match key {
            CredentialKey::OpenAi => self.openai_api_key.as_ref(),
            CredentialKey::Anthropic => self.anthropic_api_key.as_ref(),
            CredentialKey::OpenRouter => self.openrouter_api_key.as_ref(),
        }
    }

    /// Whether the provider's credential holds a non-empty value.
    pub fn is_set(&self, key: CredentialKey) -> bool {
        self.get(key).is_some()
    }
}
