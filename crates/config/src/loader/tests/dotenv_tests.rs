//! Tests for secrets file parsing and the `DOTENV_DISABLED` gate.

use secrecy::ExposeSecret;
use std::fs;
use tempfile::TempDir;

use super::{env_lock, with_clean_credentials};
use crate::constants::SECRETS_FILE_NAME;
use crate::loader::builder::SecretsLoader;

fn loader_for(temp_dir: &TempDir) -> SecretsLoader {
    SecretsLoader::new().with_start_dir(temp_dir.path().to_path_buf())
}

#[test]
fn test_gate_skips_file_parsing_but_reports_the_file() {
    let _lock = env_lock()
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    with_clean_credentials(|| {
        temp_env::with_var("DOTENV_DISABLED", Some("1"), || {
            let temp_dir = TempDir::new().unwrap();
            let env_path = temp_dir.path().join(SECRETS_FILE_NAME);
            fs::write(&env_path, "OPENAI_API_KEY=sk-should-not-load\n").unwrap();

            let snapshot = loader_for(&temp_dir).load_all();

            assert!(snapshot.openai_api_key.is_none());
            // Discovery still names the file it found; only parsing is gated.
            assert_eq!(snapshot.source, Some(env_path));
        });
    });
}

#[test]
fn test_gate_accepts_true_spelling() {
    let _lock = env_lock()
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    with_clean_credentials(|| {
        temp_env::with_var("DOTENV_DISABLED", Some("true"), || {
            let temp_dir = TempDir::new().unwrap();
            fs::write(
                temp_dir.path().join(SECRETS_FILE_NAME),
                "OPENAI_API_KEY=sk-should-not-load\n",
            )
            .unwrap();

            let snapshot = loader_for(&temp_dir).load_all();

            assert!(snapshot.openai_api_key.is_none());
        });
    });
}

#[test]
fn test_malformed_line_keeps_values_parsed_before_it() {
    let _lock = env_lock()
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    with_clean_credentials(|| {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join(SECRETS_FILE_NAME);
        fs::write(&env_path, "OPENAI_API_KEY=sk-good\nBROKEN LINE\n").unwrap();

        let snapshot = loader_for(&temp_dir).load_all();

        assert_eq!(
            snapshot.openai_api_key.as_ref().map(|s| s.expose_secret()),
            Some("sk-good")
        );
        assert_eq!(snapshot.source, Some(env_path));
    });
}

#[test]
fn test_entirely_malformed_file_still_returns_snapshot() {
    let _lock = env_lock()
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    with_clean_credentials(|| {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join(SECRETS_FILE_NAME);
        fs::write(&env_path, "INVALID LINE WITHOUT EQUALS").unwrap();

        let snapshot = loader_for(&temp_dir).load_all();

        assert!(snapshot.openai_api_key.is_none());
        assert!(snapshot.anthropic_api_key.is_none());
        assert!(snapshot.openrouter_api_key.is_none());
        assert_eq!(snapshot.source, Some(env_path));
    });
}

#[test]
fn test_require_ignores_malformed_tail() {
    let _lock = env_lock()
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    with_clean_credentials(|| {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(SECRETS_FILE_NAME),
            "OPENROUTER_API_KEY=sk-or-good\nNOT A VALID LINE\n",
        )
        .unwrap();

        let key = loader_for(&temp_dir)
            .require(crate::keys::CredentialKey::OpenRouter)
            .unwrap();

        assert_eq!(key.expose_secret(), "sk-or-good");
    });
}
