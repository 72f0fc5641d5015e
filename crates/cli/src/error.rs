//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map SecretsError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - `check` never produces a non-zero exit code; only `keys --require` does.
//! - Exit code 2 always means a missing required credential.

use nbprep_config::SecretsError;

/// Structured exit codes for nbprep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A required provider credential is absent or empty.
    ///
    /// Scripts should create or fill the secrets file and retry.
    MissingCredential = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&SecretsError> for ExitCode {
    fn from(err: &SecretsError) -> Self {
        match err {
            SecretsError::MissingCredential { .. } => ExitCode::MissingCredential,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if the error is not a SecretsError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(secrets_err) = cause.downcast_ref::<SecretsError>() {
                return ExitCode::from(secrets_err);
            }
        }
        ExitCode::GeneralError
    }
}
