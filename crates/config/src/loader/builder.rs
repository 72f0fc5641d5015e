//! Secrets loader implementation.
//!
//! Responsibilities:
//! - Tie discovery, file parsing, and snapshot construction together.
//! - Provide the required-key accessors with remediation on failure.
//!
//! Does NOT handle:
//! - Ancestor-walk details (see discover.rs).
//! - Environment variable filtering (see env.rs).
//!
//! Invariants / Assumptions:
//! - `load_all` never fails: malformed lines and read failures are logged
//!   and absorbed; the snapshot is built from whatever the environment
//!   holds. A missing required credential is the only error this crate
//!   produces.
//! - Every `load_all` call re-resolves and re-parses; nothing is cached.
//! - The `DOTENV_DISABLED` variable is checked before any dotenvy call.
//! - File values overwrite pre-existing environment values.
//! - Log messages never include raw secrets-file line contents.

use secrecy::SecretString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::discover;
use super::env::snapshot_from_env;
use super::error::SecretsError;
use crate::constants::DOTENV_DISABLED_VAR;
use crate::keys::{CredentialKey, KeySnapshot};

/// Loads provider credentials from the nearest secrets file.
///
/// The loader is stateless apart from an optional start directory override;
/// each call re-runs discovery and re-parses the file.
#[derive(Debug, Default)]
pub struct SecretsLoader {
    start_dir: Option<PathBuf>,
}

impl SecretsLoader {
    /// Create a loader that starts discovery at the current working directory.
    pub fn new() -> Self {
        Self { start_dir: None }
    }

    /// Override the directory discovery starts from (primarily for testing,
    /// so tests need not mutate the process working directory).
    pub fn with_start_dir(mut self, dir: PathBuf) -> Self {
        self.start_dir = Some(dir);
        self
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Locate the secrets file, parse it into the process environment, and
    /// return a snapshot of the three provider credentials.
    ///
    /// This never fails. A missing secrets file, a malformed line, or a
    /// read failure all degrade to a snapshot built from whatever the
    /// process environment already holds; problems are logged, never
    /// raised. `source` names the discovered file whenever one exists,
    /// even when the `DOTENV_DISABLED` gate skips parsing it.
    pub fn load_all(&self) -> KeySnapshot {
        let start = self
            .start_dir
            .clone()
            .or_else(|| std::env::current_dir().ok());

        let path = match start {
            Some(dir) => discover::resolve_from(&dir),
            // Working directory unavailable: skip the walk, keep the
            // stable fallback location.
            None => discover::fallback_path(),
        };

        let mut source = None;
        if path.is_file() {
            source = Some(path.clone());
            if Self::dotenv_disabled() {
                debug!(path = %path.display(), "dotenv loading disabled, skipping secrets file");
            } else {
                Self::parse_into_env(&path);
            }
        }

        snapshot_from_env(source)
    }

    /// Fetch one provider's credential, failing with remediation text when
    /// it is absent or empty.
    pub fn require(&self, key: CredentialKey) -> Result<SecretString, SecretsError> {
        self.load_all()
            .get(key)
            .cloned()
            .ok_or(SecretsError::MissingCredential { key })
    }

    /// Parse the file's KEY=VALUE lines into the process environment.
    /// File values win over pre-existing environment values.
    ///
    /// Problems are absorbed: a malformed line keeps the values parsed
    /// before it, and a read failure leaves the environment untouched.
    ///
    /// SAFETY: Log messages only include the byte index of a parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    fn parse_into_env(path: &Path) {
        match dotenvy::from_path_override(path) {
            Ok(()) => {}
            // The file vanished between the existence check and the read.
            Err(e) if Self::is_not_found(&e) => {}
            Err(dotenvy::Error::LineParse(_, idx)) => {
                warn!(
                    path = %path.display(),
                    position = idx,
                    "malformed line in secrets file, keeping values parsed before it"
                );
            }
            Err(dotenvy::Error::Io(io_err)) => {
                warn!(
                    path = %path.display(),
                    kind = %io_err.kind(),
                    "failed to read secrets file"
                );
            }
            Err(_) => {
                warn!(path = %path.display(), "failed to load secrets file");
            }
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Fetch the OpenAI API key, failing with remediation text when absent.
pub fn openai_api_key() -> Result<SecretString, SecretsError> {
    SecretsLoader::new().require(CredentialKey::OpenAi)
}

/// Fetch the OpenRouter API key, failing with remediation text when absent.
pub fn openrouter_api_key() -> Result<SecretString, SecretsError> {
    SecretsLoader::new().require(CredentialKey::OpenRouter)
}
