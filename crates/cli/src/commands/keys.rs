//! Keys command: report provider credential availability.
//!
//! Responsibilities:
//! - Show per-provider presence (set / missing) with values masked.
//! - Run the fatal required-key accessor for `--require`.
//!
//! Does NOT handle:
//! - Secrets file discovery and parsing (see `nbprep-config`).
//!
//! Invariants:
//! - Credential values are never written to stdout, in either format;
//!   only presence is reported.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use nbprep_config::{CredentialKey, KeySnapshot, SecretsLoader};

use crate::args::OutputFormat;

/// Masked credential status, safe to print and to serialize.
#[derive(Debug, Clone, Serialize)]
pub struct KeysReport {
    /// The secrets file discovery found, when one exists. Reported even
    /// when `DOTENV_DISABLED` skipped parsing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets_file: Option<PathBuf>,
    pub providers: Vec<ProviderStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderStatus {
    pub provider: &'static str,
    pub env_var: &'static str,
    pub set: bool,
}

/// Run the keys command.
///
/// With `require`, fails with the remediation message (exit code 2 at the
/// top level) when that provider's credential is absent or empty.
pub fn run(output: OutputFormat, require: Option<CredentialKey>) -> Result<()> {
    let loader = SecretsLoader::new();

    if let Some(key) = require {
        // The value is dropped on purpose: this command reports presence,
        // never contents.
        let _ = loader.require(key)?;
        info!(provider = key.label(), "required credential present");
        println!("{} credential is set", key.label());
        return Ok(());
    }

    let snapshot = loader.load_all();
    let report = build_report(&snapshot);

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render_text(&report)),
    }

    Ok(())
}

fn build_report(snapshot: &KeySnapshot) -> KeysReport {
    KeysReport {
        secrets_file: snapshot.source.clone(),
        providers: CredentialKey::ALL
            .iter()
            .map(|&key| ProviderStatus {
                provider: key.label(),
                env_var: key.env_var(),
                set: snapshot.is_set(key),
            })
            .collect(),
    }
}

fn render_text(report: &KeysReport) -> String {
    let mut out = String::new();
    match &report.secrets_file {
        Some(path) => out.push_str(&format!("Secrets file : {}\n", path.display())),
        None => out.push_str("Secrets file : not found\n"),
    }
    for provider in &report.providers {
        out.push_str(&format!(
            "- {:<10} ({:<19}): {}\n",
            provider.provider,
            provider.env_var,
            if provider.set { "set" } else { "missing" }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn snapshot(openai: Option<&str>, source: Option<PathBuf>) -> KeySnapshot {
        KeySnapshot {
            openai_api_key: openai.map(|v| SecretString::new(v.into())),
            anthropic_api_key: None,
            openrouter_api_key: None,
            source,
        }
    }

    #[test]
    fn test_report_masks_values() {
        let report = build_report(&snapshot(Some("sk-secret-value"), None));
        let text = render_text(&report);
        let json = serde_json::to_string(&report).unwrap();

        assert!(!text.contains("sk-secret-value"));
        assert!(!json.contains("sk-secret-value"));
        assert!(text.contains("- OpenAI"));
        assert!(text.contains("set"));
    }

    #[test]
    fn test_report_lists_all_three_providers() {
        let report = build_report(&snapshot(None, None));

        assert_eq!(report.providers.len(), 3);
        assert!(report.providers.iter().all(|p| !p.set));

        let text = render_text(&report);
        assert!(text.contains("Secrets file : not found"));
        assert!(text.contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn test_report_names_the_source_file() {
        let path = PathBuf::from("/repo/.env");
        let report = build_report(&snapshot(Some("sk-x"), Some(path.clone())));

        assert_eq!(report.secrets_file, Some(path));
        assert!(render_text(&report).contains("/repo/.env"));
    }
}
