//! Secret Resolution
//!
//! The API key comes from an ordered chain of sources: the platform secret
//! store first (a TOML file the cloud host mounts), then the process
//! environment. The first source holding a non-empty value wins; an empty
//! string counts as absence so a blank entry falls through to the next
//! source. Resolution never fails; an unresolved key is reported later by
//! [`Config::validate`](crate::config::Config::validate).

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use secrecy::SecretString;
use tracing::{debug, warn};

use crate::constants::{layout, vars};

/// A single place secrets can come from.
pub trait SecretSource {
    /// Source name for log lines
    fn name(&self) -> &'static str;

    /// Non-empty value for `key`, if this source holds one
    fn get(&self, key: &str) -> Option<String>;
}

// =============================================================================
// Platform Secret Store
// =============================================================================

/// TOML file mounted by the hosting platform, present only in cloud runs.
///
/// Default location is `/run/secrets/insight.toml`; `INSIGHT_SECRETS_FILE`
/// overrides it. A missing file simply means the source holds nothing. An
/// unreadable or malformed file is logged and treated the same way, so a
/// broken mount degrades to the environment source instead of failing the
/// load.
pub struct PlatformSecrets {
    path: PathBuf,
}

impl PlatformSecrets {
    /// Store at the platform mount point (honoring the override variable).
    pub fn mounted() -> Self {
        let path = env::var_os(vars::SECRETS_FILE)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(layout::SECRETS_FILE));
        Self { path }
    }

    /// Store at an explicit location.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecretSource for PlatformSecrets {
    fn name(&self) -> &'static str {
        "platform secret store"
    }

    fn get(&self, key: &str) -> Option<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("cannot read secrets file {}: {}", self.path.display(), err);
                return None;
            }
        };

        let table: toml::Table = match raw.parse() {
            Ok(table) => table,
            Err(err) => {
                warn!(
                    "ignoring malformed secrets file {}: {}",
                    self.path.display(),
                    err
                );
                return None;
            }
        };

        table
            .get(key)
            .and_then(|value| value.as_str())
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }
}

// =============================================================================
// Process Environment
// =============================================================================

/// Process environment, optionally seeded from `.env` at startup.
pub struct EnvSecrets;

impl SecretSource for EnvSecrets {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }
}

// =============================================================================
// Chain
// =============================================================================

/// Ordered lookup across secret sources.
pub struct SecretChain {
    sources: Vec<Box<dyn SecretSource>>,
}

impl SecretChain {
    /// Standard chain: platform secret store, then environment.
    pub fn standard() -> Self {
        Self::new(vec![Box::new(PlatformSecrets::mounted()), Box::new(EnvSecrets)])
    }

    pub fn new(sources: Vec<Box<dyn SecretSource>>) -> Self {
        Self { sources }
    }

    /// First non-empty value for `key` across the chain, wrapped for
    /// redaction. `None` when no source holds one.
    pub fn resolve(&self, key: &str) -> Option<SecretString> {
        for source in &self.sources {
            if let Some(value) = source.get(key) {
                debug!("resolved {} from {}", key, source.name());
                return Some(SecretString::from(value));
            }
        }
        debug!("{} not found in any secret source", key);
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
