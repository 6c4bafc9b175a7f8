//! Insight Engine Runtime Configuration
//!
//! Centralized configuration for the Insight Engine, a small Gemini-driven
//! data-analysis web app: API-key resolution through an ordered secret
//! chain, cloud/local runtime detection, a deterministic data-directory
//! layout, and typed tunables read from the environment with compiled-in
//! defaults.
//!
//! ## Quick Start
//!
//! ```ignore
//! use insight_config::ConfigLoader;
//!
//! let config = ConfigLoader::load()?;
//! config.validate()?; // fail fast when GEMINI_API_KEY is absent
//! serve(&config)
//! ```
//!
//! The snapshot is built once at process start and handed to consumers by
//! reference. Loading creates `data/input` and `data/output` under the
//! runtime-selected base directory; validation is a separate, explicit step
//! so directory setup works even before a key is provisioned.
//!
//! ## Modules
//!
//! - [`config`]: loader, snapshot types, secret chain, path derivation
//! - [`constants`]: variable names and compiled-in defaults
//! - [`error`]: the three-variant error taxonomy
//! - [`cli`]: inspection commands for the `insight-config` binary

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{
    Config, ConfigLoader, DataPaths, DetectorConfig, EnvSecrets, GeminiConfig, PlatformSecrets,
    RuntimeEnv, SecretChain, SecretSource,
};

// Error Types
pub use error::{ConfigError, Result};
