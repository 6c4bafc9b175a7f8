//! Configuration Loader
//!
//! Builds the snapshot in one pass at process start: seed the environment
//! from `.env` if present, detect the runtime, resolve the API key through
//! the secret chain, parse tunable overrides, create the data directories.
//! Parse and filesystem failures propagate immediately; a missing API key
//! does not (validation reports it when something actually needs the key).

use std::env;
use std::str::FromStr;

use tracing::{debug, info, warn};

use super::paths::{DataPaths, RuntimeEnv};
use super::secrets::SecretChain;
use super::types::{Config, DetectorConfig, GeminiConfig};
use crate::constants::{detector, gemini, vars};
use crate::error::{ConfigError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the snapshot with the standard resolution chain.
    ///
    /// Reads `.env` into the process environment first, detects the runtime
    /// from the cloud marker, then resolves the API key through the platform
    /// secret store and the environment. Creates `data/input` and
    /// `data/output` whether or not a key was found.
    pub fn load() -> Result<Config> {
        // Seed the environment from .env if present; the file is optional.
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment overrides from {}", path.display());
        }

        Self::load_with(RuntimeEnv::detect(), &SecretChain::standard())
    }

    /// Load with an explicit runtime and secret chain. For hosts that
    /// already know their environment; `.env` is not read here.
    pub fn load_with(runtime: RuntimeEnv, secrets: &SecretChain) -> Result<Config> {
        Self::assemble(runtime, secrets, DataPaths::derive(runtime))
    }

    fn assemble(runtime: RuntimeEnv, secrets: &SecretChain, paths: DataPaths) -> Result<Config> {
        let api_key = secrets.resolve(vars::GEMINI_API_KEY);

        let gemini = GeminiConfig {
            model: env_or(vars::GEMINI_MODEL, gemini::DEFAULT_MODEL),
            temperature: env_parsed(vars::TEMPERATURE, "float", gemini::DEFAULT_TEMPERATURE)?,
            max_tokens: env_parsed(vars::MAX_TOKENS, "integer", gemini::DEFAULT_MAX_TOKENS)?,
        };
        let detector = DetectorConfig {
            contamination_factor: env_parsed(
                vars::CONTAMINATION_FACTOR,
                "float",
                detector::DEFAULT_CONTAMINATION,
            )?,
            n_estimators: env_parsed(vars::N_ESTIMATORS, "integer", detector::DEFAULT_N_ESTIMATORS)?,
        };
        warn_on_unusual_values(&gemini, &detector);

        paths.ensure_directories()?;

        let config = Config::new(api_key, runtime, paths, gemini, detector);
        info!("Configuration loaded ({} runtime)", runtime);
        Ok(config)
    }
}

// =============================================================================
// Environment Parsing
// =============================================================================

/// String variable with a default. The value is taken verbatim.
fn env_or(var: &'static str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

/// Typed variable with a default. Absent means the default; present but
/// unparseable is an error, never a silent fallback to the default.
fn env_parsed<T: FromStr>(var: &'static str, expected: &'static str, default: T) -> Result<T> {
    match env::var(var) {
        Ok(raw) => parse_override(var, expected, &raw),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(raw)) => Err(ConfigError::Invalid {
            var,
            value: raw.to_string_lossy().into_owned(),
            expected,
        }),
    }
}

/// Parse one override. Surrounding whitespace is tolerated; the error keeps
/// the value as it appeared in the environment.
fn parse_override<T: FromStr>(var: &'static str, expected: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        expected,
    })
}

/// Unusual tunable values still load; they get a log line instead of an
/// error.
fn warn_on_unusual_values(gemini: &GeminiConfig, detector: &DetectorConfig) {
    if !(0.0..=1.0).contains(&gemini.temperature) {
        warn!(
            "TEMPERATURE {} is outside the expected [0.0, 1.0] range",
            gemini.temperature
        );
    }
    if gemini.max_tokens == 0 {
        warn!("MAX_TOKENS is 0; generation requests will fail upstream");
    }
    if detector.contamination_factor <= 0.0 || detector.contamination_factor > 0.5 {
        warn!(
            "CONTAMINATION_FACTOR {} is outside the expected (0.0, 0.5] range",
            detector.contamination_factor
        );
    }
    if detector.n_estimators == 0 {
        warn!("N_ESTIMATORS is 0; the anomaly detector cannot train");
    }
}

// =============================================================================
// Tests
// =============================================================================
