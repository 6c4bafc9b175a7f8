//! Runtime Environment & Data Layout
//!
//! The managed cloud sandbox keeps the application directory read-only, so
//! every writable path moves under a scratch root there. Locally everything
//! stays project-relative. Detection looks at one marker variable; the
//! layout is a pure function of the result.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::constants::{layout, vars};
use crate::error::{ConfigError, Result};

// =============================================================================
// Runtime Environment
// =============================================================================

/// Where the process is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnv {
    /// Managed cloud sandbox (read-only application directory)
    Cloud,
    /// Developer machine or self-managed host
    Local,
}

impl RuntimeEnv {
    /// Detect the runtime from the presence of the cloud marker variable.
    /// Any value counts, including empty; only presence matters. Reads
    /// nothing else from the environment.
    pub fn detect() -> Self {
        if env::var_os(vars::CLOUD_MARKER).is_some() {
            Self::Cloud
        } else {
            Self::Local
        }
    }

    pub const fn is_cloud(self) -> bool {
        matches!(self, Self::Cloud)
    }

    /// Operator guidance for supplying the API key in this environment
    pub(crate) const fn secret_hint(self) -> &'static str {
        match self {
            Self::Cloud => "Please add it to the platform secret store.",
            Self::Local => "Please set it in your environment or a local .env file.",
        }
    }
}

impl std::fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeEnv::Cloud => write!(f, "cloud"),
            RuntimeEnv::Local => write!(f, "local"),
        }
    }
}

// =============================================================================
// Data Layout
// =============================================================================

/// Filesystem layout for uploads and analysis results.
#[derive(Debug, Clone, Serialize)]
pub struct DataPaths {
    /// Root everything else hangs off
    pub base_dir: PathBuf,

    /// `<base>/data`
    pub data_dir: PathBuf,

    /// `<base>/data/input`, staging area for uploaded files
    pub input_dir: PathBuf,

    /// `<base>/data/output`, analysis results and generated reports
    pub output_dir: PathBuf,
}

impl DataPaths {
    /// Derive the layout for `runtime`.
    ///
    /// Cloud runs root at the fixed scratch directory `/tmp`; local runs
    /// root at the installation directory. Pure function of `runtime`: no
    /// other environment state (`TMPDIR`, `HOME`, ...) is consulted.
    pub fn derive(runtime: RuntimeEnv) -> Self {
        let base = match runtime {
            RuntimeEnv::Cloud => PathBuf::from(layout::CLOUD_BASE),
            RuntimeEnv::Local => PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        };
        Self::rooted_at(base)
    }

    /// Layout rooted at an explicit base directory.
    pub fn rooted_at(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let data_dir = base_dir.join(layout::DATA_DIR);
        Self {
            input_dir: data_dir.join(layout::INPUT_DIR),
            output_dir: data_dir.join(layout::OUTPUT_DIR),
            data_dir,
            base_dir,
        }
    }

    /// Create `input_dir` and `output_dir`, parents included. Idempotent:
    /// existing directories are left alone and are not an error.
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [&self.input_dir, &self.output_dir] {
            fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        debug!(
            "data directories ready: {}, {}",
            self.input_dir.display(),
            self.output_dir.display()
        );
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_layout_roots_at_scratch() {
        let paths = DataPaths::derive(RuntimeEnv::Cloud);
        assert_eq!(paths.base_dir, PathBuf::from("/tmp"));
        assert_eq!(paths.data_dir, PathBuf::from("/tmp/data"));
        assert_eq!(paths.input_dir, PathBuf::from("/tmp/data/input"));
        assert_eq!(paths.output_dir, PathBuf::from("/tmp/data/output"));
    }

    #[test]
    fn test_local_layout_roots_at_installation_dir() {
        let paths = DataPaths::derive(RuntimeEnv::Local);
        assert_eq!(paths.base_dir, PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        assert!(paths.data_dir.starts_with(&paths.base_dir));
    }

    #[test]
    fn test_input_and_output_are_distinct_descendants() {
        for runtime in [RuntimeEnv::Cloud, RuntimeEnv::Local] {
            let paths = DataPaths::derive(runtime);
            assert_ne!(paths.input_dir, paths.output_dir);
            assert!(paths.input_dir.starts_with(&paths.data_dir));
            assert!(paths.output_dir.starts_with(&paths.data_dir));
            assert!(paths.data_dir.starts_with(&paths.base_dir));
        }
    }

    #[test]
    fn test_detect_cloud_from_marker_presence() {
        temp_env::with_var(vars::CLOUD_MARKER, Some("1"), || {
            assert_eq!(RuntimeEnv::detect(), RuntimeEnv::Cloud);
            assert!(RuntimeEnv::detect().is_cloud());
        });
        temp_env::with_var(vars::CLOUD_MARKER, Some(""), || {
            // Empty value still counts as present
            assert_eq!(RuntimeEnv::detect(), RuntimeEnv::Cloud);
        });
        temp_env::with_var_unset(vars::CLOUD_MARKER, || {
            assert_eq!(RuntimeEnv::detect(), RuntimeEnv::Local);
            assert!(!RuntimeEnv::detect().is_cloud());
        });
    }

    #[test]
    fn test_derivation_ignores_unrelated_env() {
        temp_env::with_vars(
            [
                ("TMPDIR", Some("/somewhere/else")),
                ("HOME", Some("/somewhere/else")),
            ],
            || {
                let paths = DataPaths::derive(RuntimeEnv::Cloud);
                assert_eq!(paths.base_dir, PathBuf::from("/tmp"));
            },
        );
    }

    #[test]
    fn test_ensure_directories_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::rooted_at(dir.path());

        paths.ensure_directories().unwrap();
        assert!(paths.input_dir.is_dir());
        assert!(paths.output_dir.is_dir());

        paths.ensure_directories().unwrap();
        assert!(paths.input_dir.is_dir());
        assert!(paths.output_dir.is_dir());
    }

    #[test]
    fn test_ensure_directories_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::rooted_at(dir.path().join("deeply").join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.input_dir.is_dir());
        assert!(paths.output_dir.is_dir());
    }

    #[test]
    fn test_ensure_directories_reports_failure_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let paths = DataPaths::rooted_at(&blocker);
        let err = paths.ensure_directories().unwrap_err();
        match err {
            ConfigError::CreateDir { path, .. } => assert!(path.starts_with(&blocker)),
            other => panic!("expected CreateDir, got {other:?}"),
        }
    }
}
