//! Centralized constants for the nbprep workspace.
//!
//! This module contains names and paths used across crates to avoid
//! magic string duplication.

// =============================================================================
// Secrets File
// =============================================================================

/// File name of the local secrets file searched for by the loader.
pub const SECRETS_FILE_NAME: &str = ".env";

/// File name of the checked-in template the reporter hints at when the
/// secrets file is missing.
pub const SECRETS_TEMPLATE_NAME: &str = ".env.example";

/// When set to "true" or "1", the loader skips parsing the secrets file
/// entirely (useful for hermetic tests).
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Runtime Context Detection
// =============================================================================

/// Environment variable set by the Google Colab runtime.
pub const COLAB_MARKER_VAR: &str = "COLAB_RELEASE_TAG";

/// Mount directory that only exists inside a Colab runtime.
pub const COLAB_CONTENT_DIR: &str = "/content";

// =============================================================================
// Suggested Working Directories
// =============================================================================

/// Drive-mount base used for persisting artifacts in a cloud runtime.
pub const CLOUD_BASE_DIR: &str = "/content/drive/MyDrive/nbprep";

/// Database directory name, anchored at the repository root locally.
pub const DB_DIR_NAME: &str = "db";

/// Traces file path relative to the repository root.
pub const TRACES_REL_PATH: &str = "traces/notebook_traces.jsonl";

/// Data directory name, anchored at the repository root locally.
pub const DATA_DIR_NAME: &str = "data";

// =============================================================================
// Tool Probes
// =============================================================================

/// Comma-separated list of extra executables for `nbprep check` to probe.
pub const EXTRA_TOOLS_VAR: &str = "NBPREP_EXTRA_TOOLS";
