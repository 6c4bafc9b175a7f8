//! Configuration Management
//!
//! Load-once configuration for the Insight Engine. The API key resolves
//! through an ordered chain:
//! 1. Platform secret store (mounted in cloud runs)
//! 2. Process environment (optionally seeded from `.env`)
//!
//! Paths, the runtime flag, and all tunables are fixed when
//! [`ConfigLoader::load`] returns; consumers receive the snapshot by
//! reference and never re-read the environment.

mod loader;
mod paths;
mod secrets;
mod types;

pub use loader::ConfigLoader;
pub use paths::{DataPaths, RuntimeEnv};
pub use secrets::{EnvSecrets, PlatformSecrets, SecretChain, SecretSource};
pub use types::{Config, DetectorConfig, GeminiConfig};
