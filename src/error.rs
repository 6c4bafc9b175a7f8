//! Configuration Error Types
//!
//! Exactly three failure classes exist, and all of them propagate to the
//! caller: a secret missing at validation time, an environment override that
//! does not parse as its declared type, and a failed directory creation.
//! Nothing is recovered internally; the expected disposition is startup
//! failure.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::RuntimeEnv;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API key was absent from every secret source. Raised only by
    /// explicit validation, never during loading.
    #[error("GEMINI_API_KEY not found. {}", .runtime.secret_hint())]
    MissingApiKey { runtime: RuntimeEnv },

    /// An environment override was present but not parseable as the
    /// declared type.
    #[error("Invalid {var}: {value:?} is not a valid {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A data directory could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message_names_the_variable() {
        let err = ConfigError::MissingApiKey {
            runtime: RuntimeEnv::Local,
        };
        let msg = err.to_string();
        assert!(msg.contains("GEMINI_API_KEY"));
        assert!(msg.contains(".env"));
    }

    #[test]
    fn test_missing_key_hint_follows_runtime() {
        let cloud = ConfigError::MissingApiKey {
            runtime: RuntimeEnv::Cloud,
        };
        assert!(cloud.to_string().contains("secret store"));

        let local = ConfigError::MissingApiKey {
            runtime: RuntimeEnv::Local,
        };
        assert!(local.to_string().contains("environment"));
    }

    #[test]
    fn test_invalid_message_carries_var_and_value() {
        let err = ConfigError::Invalid {
            var: "MAX_TOKENS",
            value: "abc".to_string(),
            expected: "integer",
        };
        let msg = err.to_string();
        assert!(msg.contains("MAX_TOKENS"));
        assert!(msg.contains("abc"));
        assert!(msg.contains("integer"));
    }

    #[test]
    fn test_create_dir_message_carries_path() {
        let err = ConfigError::CreateDir {
            path: PathBuf::from("/proc/nope"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/proc/nope"));
    }
}
