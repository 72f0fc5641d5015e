//! Credential loading for nbprep.
//!
//! This crate locates a local secrets file (`.env`), loads provider API keys
//! from it into the process environment, and exposes typed accessors that
//! fail with actionable remediation text when a required key is absent.

pub mod constants;
pub mod keys;
mod loader;

pub use keys::{CredentialKey, KeySnapshot};
pub use loader::{SecretsError, SecretsLoader, openai_api_key, openrouter_api_key};
pub use loader::{discover_from, env_var_or_none, fallback_path, resolve_from};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
