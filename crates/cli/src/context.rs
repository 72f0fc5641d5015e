//! Runtime context classification (local vs cloud notebook host).
//!
//! Responsibilities:
//! - Classify the process as running locally or inside a cloud notebook
//!   runtime (Google Colab).
//! - Provide an injectable probe seam so report rendering is testable
//!   without simulating the cloud host.
//!
//! Invariants:
//! - Detection is best-effort: any probe failure classifies as Local.
//! - Classification only selects which suggested directories the reporter
//!   prints; nothing else branches on it.

use serde::Serialize;
use std::path::Path;

use nbprep_config::constants::{COLAB_CONTENT_DIR, COLAB_MARKER_VAR};
use nbprep_config::env_var_or_none;

/// Where the notebook appears to be running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvKind {
    Cloud,
    Local,
}

/// Capability detection for the hosting environment.
pub trait ContextProbe {
    fn kind(&self) -> EnvKind;
}

/// Detects Google Colab via its runtime markers: the release-tag variable
/// the runtime exports, or the `/content` mount directory.
#[derive(Debug, Default)]
pub struct ColabProbe;

impl ContextProbe for ColabProbe {
    fn kind(&self) -> EnvKind {
        let marker_var = env_var_or_none(COLAB_MARKER_VAR).is_some();
        let marker_dir = Path::new(COLAB_CONTENT_DIR).is_dir();
        if marker_var || marker_dir {
            EnvKind::Cloud
        } else {
            EnvKind::Local
        }
    }
}

/// A probe with a fixed answer, for tests.
#[cfg(test)]
pub struct FixedContext(pub EnvKind);

#[cfg(test)]
impl ContextProbe for FixedContext {
    fn kind(&self) -> EnvKind {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_fixed_context_returns_its_kind() {
        assert_eq!(FixedContext(EnvKind::Cloud).kind(), EnvKind::Cloud);
        assert_eq!(FixedContext(EnvKind::Local).kind(), EnvKind::Local);
    }

    #[test]
    #[serial]
    fn test_colab_marker_var_classifies_as_cloud() {
        temp_env::with_var(COLAB_MARKER_VAR, Some("release-colab-20250801"), || {
            assert_eq!(ColabProbe.kind(), EnvKind::Cloud);
        });
    }
}
