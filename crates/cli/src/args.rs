//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map the provider argument onto `nbprep_config::CredentialKey`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see the `commands` module).
//! - Does not load secrets (see `nbprep-config`).

use clap::{Parser, Subcommand, ValueEnum};
use nbprep_config::CredentialKey;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nbprep")]
#[command(about = "Prepare and inspect a notebook environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  nbprep check\n  nbprep check --output json\n  nbprep check --secrets-dir ./chapter5\n  nbprep keys\n  nbprep keys --require openai\n"
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report on the runtime environment (always exits 0)
    Check {
        /// Directory checked for the secrets file and its template.
        ///
        /// Defaults to the directory containing the nbprep executable.
        #[arg(long, env = "NBPREP_SECRETS_DIR", value_name = "DIR")]
        secrets_dir: Option<PathBuf>,
    },

    /// Show which provider credentials are available (values never printed)
    Keys {
        /// Fail (exit code 2) unless the named provider's credential is set
        #[arg(long, value_enum, value_name = "PROVIDER")]
        require: Option<ProviderArg>,
    },
}

/// Rendering for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Provider names accepted by `keys --require`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProviderArg {
    Openai,
    Anthropic,
    Openrouter,
}

impl From<ProviderArg> for CredentialKey {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Openai => CredentialKey::OpenAi,
            ProviderArg::Anthropic => CredentialKey::Anthropic,
            ProviderArg::Openrouter => CredentialKey::OpenRouter,
        }
    }
}
