//! Check command: the environment report.
//!
//! Responsibilities:
//! - Classify the runtime context (local vs cloud) through the probe seam.
//! - Probe the notebook toolchain for presence on PATH.
//! - Check secrets file presence beside the configured directory, with a
//!   template hint when absent.
//! - Print suggested working directories for the detected context.
//!
//! Does NOT handle:
//! - Loading credential values (see the keys command).
//!
//! Invariants:
//! - Every probe failure is absorbed as a negative status; this command has
//!   no failure path and always exits 0.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use nbprep_config::constants::{
    CLOUD_BASE_DIR, DATA_DIR_NAME, DB_DIR_NAME, SECRETS_FILE_NAME, SECRETS_TEMPLATE_NAME,
    TRACES_REL_PATH,
};

use crate::args::OutputFormat;
use crate::context::{ColabProbe, ContextProbe, EnvKind};
use crate::probes;

/// The complete environment report.
#[derive(Debug, Clone, Serialize)]
pub struct EnvReport {
    pub cli_version: String,
    pub os_arch: String,
    pub context: EnvKind,
    pub tools: Vec<ToolCheck>,
    pub secrets_file: SecretsFileStatus,
    /// Repository root the local suggestions are anchored at; `None` for
    /// the cloud context, whose suggestions are fixed mount paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_base: Option<PathBuf>,
    pub suggested_dirs: Vec<SuggestedDir>,
}

/// One tool-presence probe result.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCheck {
    pub label: String,
    pub status: CheckStatus,
}

/// Status of a presence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Ok,
    Missing,
}

/// Secrets file presence beside the configured directory.
#[derive(Debug, Clone, Serialize)]
pub struct SecretsFileStatus {
    pub present: bool,
    pub path: PathBuf,
    /// Template file name to copy, when the secrets file is missing and a
    /// template sits beside it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_hint: Option<String>,
}

/// One suggested working directory.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestedDir {
    pub name: &'static str,
    pub path: String,
}

/// Run the check command. Never fails: rendering problems are logged and
/// absorbed so the exit code stays 0.
pub fn run(output: OutputFormat, secrets_dir: Option<PathBuf>) {
    let report = build_report(&ColabProbe, secrets_dir);

    match output {
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(error) => warn!(%error, "failed to serialize environment report"),
        },
        OutputFormat::Text => print!("{}", render_text(&report)),
    }
}

/// Assemble the report. The probe is injected so tests can pin the context
/// without simulating a cloud host.
fn build_report(probe: &dyn ContextProbe, secrets_dir: Option<PathBuf>) -> EnvReport {
    let context = probe.kind();
    debug!(?context, "runtime context classified");

    let tools = probes::probe_list()
        .into_iter()
        .map(|(label, exe)| ToolCheck {
            status: if probes::find_on_path(&exe).is_some() {
                CheckStatus::Ok
            } else {
                CheckStatus::Missing
            },
            label,
        })
        .collect();

    let secrets_dir = secrets_dir.unwrap_or_else(default_secrets_dir);
    let secrets_file = secrets_file_status(&secrets_dir);

    let (repo_base, suggested_dirs) = match context {
        EnvKind::Cloud => (None, cloud_suggestions()),
        EnvKind::Local => {
            let base = secrets_dir
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| secrets_dir.clone());
            let dirs = local_suggestions(&base);
            (Some(base), dirs)
        }
    };

    EnvReport {
        cli_version: env!("CARGO_PKG_VERSION").to_string(),
        os_arch: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
        context,
        tools,
        secrets_file,
        repo_base,
        suggested_dirs,
    }
}

/// The reporter's own directory: where the secrets file is expected beside
/// the binary. Falls back to the working directory when the executable path
/// cannot be determined.
fn default_secrets_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn secrets_file_status(dir: &Path) -> SecretsFileStatus {
    let path = dir.join(SECRETS_FILE_NAME);
    let present = path.is_file();

    let template_hint = if !present && dir.join(SECRETS_TEMPLATE_NAME).is_file() {
        Some(SECRETS_TEMPLATE_NAME.to_string())
    } else {
        None
    };

    SecretsFileStatus {
        present,
        path,
        template_hint,
    }
}

fn cloud_suggestions() -> Vec<SuggestedDir> {
    vec![
        SuggestedDir {
            name: "DB path",
            path: format!("{CLOUD_BASE_DIR}/{DB_DIR_NAME}"),
        },
        SuggestedDir {
            name: "Traces path",
            path: format!("{CLOUD_BASE_DIR}/{TRACES_REL_PATH}"),
        },
        SuggestedDir {
            name: "Data path",
            path: format!("{CLOUD_BASE_DIR}/{DATA_DIR_NAME}"),
        },
    ]
}

fn local_suggestions(base: &Path) -> Vec<SuggestedDir> {
    vec![
        SuggestedDir {
            name: "DB path",
            path: base.join(DB_DIR_NAME).display().to_string(),
        },
        SuggestedDir {
            name: "Traces path",
            path: base.join(TRACES_REL_PATH).display().to_string(),
        },
        SuggestedDir {
            name: "Data path",
            path: base.join(DATA_DIR_NAME).display().to_string(),
        },
    ]
}

fn render_text(report: &EnvReport) -> String {
    let mut out = String::new();
    out.push_str("nbprep environment check\n");
    out.push_str(&format!(
        "Version: {} ({})\n",
        report.cli_version, report.os_arch
    ));

    for tool in &report.tools {
        let status = match tool.status {
            CheckStatus::Ok => "OK",
            CheckStatus::Missing => "MISSING",
        };
        out.push_str(&format!("- {:<16}: {}\n", tool.label, status));
    }

    out.push_str(&format!(
        "- {:<16}: {}\n",
        ".env present",
        if report.secrets_file.present {
            "YES"
        } else {
            "NO"
        }
    ));
    if let Some(template) = &report.secrets_file.template_hint {
        out.push_str(&format!(
            "  Hint: copy {template} to {SECRETS_FILE_NAME} and fill keys as needed\n"
        ));
    }

    match report.context {
        EnvKind::Cloud => {
            out.push_str("\nDetected cloud notebook environment.\n");
            out.push_str("To persist artifacts, mount Google Drive and use:\n");
            out.push_str(&format!("  {CLOUD_BASE_DIR}/\n"));
        }
        EnvKind::Local => {
            out.push_str("\nLocal environment detected.\n");
            if let Some(base) = &report.repo_base {
                out.push_str(&format!("Repository base: {}\n", base.display()));
            }
        }
    }

    out.push_str("Suggested directories:\n");
    for dir in &report.suggested_dirs {
        out.push_str(&format!("- {:<12}: {}\n", dir.name, dir.path));
    }

    out
}
