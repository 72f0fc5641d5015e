//! Secrets loader for the local `.env` file.
//!
//! Responsibilities:
//! - Locate the secrets file by walking the ancestor directories of the
//!   working directory, with an executable-relative fallback.
//! - Parse `KEY=VALUE` lines into the process environment via dotenvy.
//! - Build [`crate::KeySnapshot`] values and serve required-key accessors.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading
//!   in tests.
//!
//! Does NOT handle:
//! - Reporting on the runtime environment (see the cli crate).
//! - Persisting or caching configuration between calls.
//!
//! Invariants / Assumptions:
//! - Loading never fails: a missing file, a malformed line, or a read
//!   failure all degrade to a snapshot built from the environment. The
//!   missing-credential error from `require` is the only error raised.
//! - File values overwrite pre-existing environment values (environment
//!   first, file second, last write wins).
//! - Errors and log messages never include raw secrets-file line contents.

mod builder;
mod discover;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{SecretsLoader, openai_api_key, openrouter_api_key};
pub use discover::{discover_from, fallback_path, resolve_from};
pub use env::env_var_or_none;
pub use error::SecretsError;
