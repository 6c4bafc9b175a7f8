//! Configuration Snapshot Types
//!
//! The snapshot is constructed once at process start by
//! [`ConfigLoader`](crate::config::ConfigLoader) and passed by reference to
//! every consumer. Nothing mutates it afterwards, and nothing here re-reads
//! the environment. The API key never appears in `Debug`, serialized, or
//! summary output.

use secrecy::SecretString;
use serde::Serialize;

use crate::config::paths::{DataPaths, RuntimeEnv};
use crate::constants::{detector, gemini};
use crate::error::{ConfigError, Result};

// =============================================================================
// Tunable Groups
// =============================================================================

/// Gemini generation settings.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiConfig {
    /// Model identifier sent with every generation request
    pub model: String,

    /// Sampling temperature, expected range [0.0, 1.0]
    pub temperature: f32,

    /// Completion token cap per request
    pub max_tokens: usize,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: gemini::DEFAULT_MODEL.to_string(),
            temperature: gemini::DEFAULT_TEMPERATURE,
            max_tokens: gemini::DEFAULT_MAX_TOKENS,
        }
    }
}

/// Isolation-forest tuning for the anomaly detector.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetectorConfig {
    /// Expected share of anomalous rows, expected range (0.0, 0.5]
    pub contamination_factor: f32,

    /// Number of trees in the forest
    pub n_estimators: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            contamination_factor: detector::DEFAULT_CONTAMINATION,
            n_estimators: detector::DEFAULT_N_ESTIMATORS,
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Immutable configuration snapshot.
#[derive(Serialize)]
pub struct Config {
    #[serde(skip)]
    api_key: Option<SecretString>,

    /// Detected runtime environment
    pub runtime: RuntimeEnv,

    /// Data-directory layout for this runtime
    #[serde(flatten)]
    pub paths: DataPaths,

    /// Gemini generation settings
    pub gemini: GeminiConfig,

    /// Anomaly-detector settings
    pub detector: DetectorConfig,
}

impl Config {
    pub(crate) fn new(
        api_key: Option<SecretString>,
        runtime: RuntimeEnv,
        paths: DataPaths,
        gemini: GeminiConfig,
        detector: DetectorConfig,
    ) -> Self {
        Self {
            api_key,
            runtime,
            paths,
            gemini,
            detector,
        }
    }

    /// Check that everything the Gemini client needs is present.
    ///
    /// Fails only when no API key was resolved. Call this before anything
    /// that talks to Gemini; directory setup does not depend on it and has
    /// already run by the time a snapshot exists.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_none() {
            return Err(ConfigError::MissingApiKey {
                runtime: self.runtime,
            });
        }
        Ok(())
    }

    /// The resolved API key, with the same error as [`Config::validate`]
    /// when absent.
    pub fn api_key(&self) -> Result<&SecretString> {
        self.api_key.as_ref().ok_or(ConfigError::MissingApiKey {
            runtime: self.runtime,
        })
    }

    /// Multi-line, log-safe description of the snapshot. Reports whether a
    /// key is set, never its value.
    pub fn summary(&self) -> String {
        format!(
            "runtime: {}\n\
             base dir: {}\n\
             input dir: {}\n\
             output dir: {}\n\
             gemini: {} (temperature {}, max tokens {})\n\
             detector: contamination {}, estimators {}\n\
             api key: {}",
            self.runtime,
            self.paths.base_dir.display(),
            self.paths.input_dir.display(),
            self.paths.output_dir.display(),
            self.gemini.model,
            self.gemini.temperature,
            self.gemini.max_tokens,
            self.detector.contamination_factor,
            self.detector.n_estimators,
            if self.api_key.is_some() { "set" } else { "unset" },
        )
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    "[REDACTED]"
                } else {
                    "[unset]"
                },
            )
            .field("runtime", &self.runtime)
            .field("paths", &self.paths)
            .field("gemini", &self.gemini)
            .field("detector", &self.detector)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(api_key: Option<&str>) -> Config {
        Config::new(
            api_key.map(|key| SecretString::from(key.to_owned())),
            RuntimeEnv::Local,
            DataPaths::rooted_at("/srv/insight"),
            GeminiConfig::default(),
            DetectorConfig::default(),
        )
    }

    #[test]
    fn test_gemini_defaults() {
        let gemini = GeminiConfig::default();
        assert_eq!(gemini.model, "gemini-1.5-flash");
        assert_eq!(gemini.temperature, 0.3);
        assert_eq!(gemini.max_tokens, 2048);
    }

    #[test]
    fn test_detector_defaults() {
        let detector = DetectorConfig::default();
        assert_eq!(detector.contamination_factor, 0.1);
        assert_eq!(detector.n_estimators, 100);
    }

    #[test]
    fn test_validate_requires_api_key() {
        let config = snapshot(None);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingApiKey { .. })
        ));

        let config = snapshot(Some("k-123"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_key_accessor_matches_validate() {
        use secrecy::ExposeSecret;

        let config = snapshot(None);
        assert!(config.api_key().is_err());

        let config = snapshot(Some("k-123"));
        assert_eq!(config.api_key().unwrap().expose_secret(), "k-123");
    }

    #[test]
    fn test_debug_never_exposes_key() {
        let config = snapshot(Some("super-secret-key"));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("[REDACTED]"));

        let rendered = format!("{:?}", snapshot(None));
        assert!(rendered.contains("[unset]"));
    }

    #[test]
    fn test_summary_never_exposes_key() {
        let config = snapshot(Some("super-secret-key"));
        let summary = config.summary();
        assert!(!summary.contains("super-secret-key"));
        assert!(summary.contains("api key: set"));
        assert!(summary.contains("gemini-1.5-flash"));

        assert!(snapshot(None).summary().contains("api key: unset"));
    }

    #[test]
    fn test_serialized_form_omits_key_and_flattens_paths() {
        let config = snapshot(Some("super-secret-key"));
        let value = serde_json::to_value(&config).unwrap();

        assert!(value.get("api_key").is_none());
        assert_eq!(value["runtime"], "local");
        assert_eq!(value["base_dir"], "/srv/insight");
        assert_eq!(value["input_dir"], "/srv/insight/data/input");
        assert_eq!(value["gemini"]["model"], "gemini-1.5-flash");
        assert_eq!(value["detector"]["n_estimators"], 100);
        assert!(!value.to_string().contains("super-secret-key"));
    }

    #[test]
    fn test_toml_form_renders_tables_and_omits_key() {
        let config = snapshot(Some("super-secret-key"));
        let rendered = toml::to_string_pretty(&config).unwrap();

        // Flattened path fields are plain values, so they precede the tables.
        assert!(rendered.contains("runtime = \"local\""));
        assert!(rendered.contains("base_dir = \"/srv/insight\""));
        assert!(rendered.contains("[gemini]"));
        assert!(rendered.contains("[detector]"));
        assert!(!rendered.contains("super-secret-key"));
    }
}
