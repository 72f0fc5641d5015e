//! Error types for secrets loading.
//!
//! Responsibilities:
//! - Carry the remediation text for the missing-credential error.
//!
//! Invariants:
//! - `MissingCredential` is the only error the workspace ever raises:
//!   loading itself never fails, and everything in the reporter is
//!   absorbed as a negative status.

use thiserror::Error;

use crate::keys::CredentialKey;

/// The single fatal error in credential loading.
#[derive(Error, Debug)]
pub enum SecretsError {
    /// A required provider credential is absent or empty.
    ///
    /// The message carries the three remediation steps notebooks surface to
    /// the user verbatim.
    #[error(
        "{} API key not found. Please:\n1. Create a .env file in the repository root\n2. Add: {}=your-api-key-here\n3. Restart your notebook kernel",
        .key.label(),
        .key.env_var()
    )]
    MissingCredential { key: CredentialKey },
}
