//! nbprep - notebook environment preparation helpers.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Report on the runtime environment (`check`) and on provider credential
//!   availability (`keys`).
//!
//! Does NOT handle:
//! - Secrets file discovery and parsing (see `nbprep-config`).
//!
//! Invariants:
//! - `check` always exits 0; it is a diagnostic printer, not a validator.
//! - The only fatal path is a missing required credential (exit code 2).

mod args;
mod commands;
mod context;
mod error;
mod probes;

use args::{Cli, Commands};
use clap::Parser;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Logs go to stderr; report text owns stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { secrets_dir } => {
            commands::check::run(cli.output, secrets_dir);
            Ok(())
        }
        Commands::Keys { require } => commands::keys::run(cli.output, require.map(Into::into)),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(e.exit_code().as_i32());
    }
}
