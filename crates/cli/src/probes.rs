//! Tool presence probes for the environment report.
//!
//! Responsibilities:
//! - Resolve executable names against PATH without running anything.
//! - Provide the fixed notebook-toolchain probe list, plus user extensions
//!   via `NBPREP_EXTRA_TOOLS`.
//!
//! Invariants:
//! - Presence only: a tool is OK when its file can be found, nothing is
//!   executed or version-checked.
//! - No false positives: a fabricated name never resolves.

use std::path::{Path, PathBuf};

use nbprep_config::constants::EXTRA_TOOLS_VAR;
use nbprep_config::env_var_or_none;

/// The notebook toolchain the chapter setup expects, as
/// (display label, executable name) pairs.
pub const DEFAULT_TOOLS: &[(&str, &str)] = &[
    ("python3", "python3"),
    ("jupyter", "jupyter"),
    ("git", "git"),
    ("sqlite3", "sqlite3"),
    ("curl", "curl"),
];

/// Resolve an executable name against PATH without executing it.
///
/// Names containing a path separator are checked as given instead of
/// searched.
pub fn find_on_path(name: &str) -> Option<PathBuf> {
    let as_path = Path::new(name);
    if as_path.components().count() > 1 {
        return as_path.is_file().then(|| as_path.to_path_buf());
    }

    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// The full probe list: the fixed toolchain plus any comma-separated names
/// from `NBPREP_EXTRA_TOOLS`.
pub fn probe_list() -> Vec<(String, String)> {
    let mut tools: Vec<(String, String)> = DEFAULT_TOOLS
        .iter()
        .map(|(label, exe)| (label.to_string(), exe.to_string()))
        .collect();

    if let Some(extra) = env_var_or_none(EXTRA_TOOLS_VAR) {
        for name in extra.split(',') {
            let name = name.trim();
            if !name.is_empty() {
                tools.push((name.to_string(), name.to_string()));
            }
        }
    }

    tools
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_present_tool_is_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("mytool"), "#!/bin/sh\n").unwrap();

        temp_env::with_var("PATH", Some(temp_dir.path().as_os_str()), || {
            let found = find_on_path("mytool");
            assert_eq!(found, Some(temp_dir.path().join("mytool")));
        });
    }

    #[test]
    #[serial]
    fn test_fabricated_tool_is_missing() {
        let temp_dir = TempDir::new().unwrap();

        temp_env::with_var("PATH", Some(temp_dir.path().as_os_str()), || {
            assert!(find_on_path("definitely-not-a-real-tool-xyz").is_none());
        });
    }

    #[test]
    #[serial]
    fn test_unset_path_yields_missing() {
        temp_env::with_var("PATH", None::<&str>, || {
            assert!(find_on_path("git").is_none());
        });
    }

    #[test]
    #[serial]
    fn test_extra_tools_are_appended() {
        temp_env::with_var("NBPREP_EXTRA_TOOLS", Some("pandoc, graphviz ,"), || {
            let tools = probe_list();
            assert!(tools.iter().any(|(label, _)| label == "pandoc"));
            assert!(tools.iter().any(|(label, _)| label == "graphviz"));
            assert_eq!(tools.len(), DEFAULT_TOOLS.len() + 2);
        });
    }
}
