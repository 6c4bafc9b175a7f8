//! Global Constants
//!
//! Environment variable names, compiled-in defaults, and fixed filesystem
//! locations. Every tunable default lives here with documentation.

/// Environment variables read at load time
pub mod vars {
    /// Gemini API key. Served by the platform secret store in cloud runs,
    /// the process environment (optionally seeded from `.env`) otherwise.
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

    /// Gemini model identifier override
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";

    /// Sampling temperature override (float)
    pub const TEMPERATURE: &str = "TEMPERATURE";

    /// Completion token cap override (integer)
    pub const MAX_TOKENS: &str = "MAX_TOKENS";

    /// Isolation-forest contamination override (float)
    pub const CONTAMINATION_FACTOR: &str = "CONTAMINATION_FACTOR";

    /// Isolation-forest estimator count override (integer)
    pub const N_ESTIMATORS: &str = "N_ESTIMATORS";

    /// Present (any value, including empty) when running in the managed
    /// cloud sandbox. Only presence is checked.
    pub const CLOUD_MARKER: &str = "INSIGHT_CLOUD";

    /// Overrides the platform secret store location
    pub const SECRETS_FILE: &str = "INSIGHT_SECRETS_FILE";
}

/// Gemini generation defaults
pub mod gemini {
    /// Model used when `GEMINI_MODEL` is unset
    pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

    /// Sampling temperature, expected range [0.0, 1.0]
    pub const DEFAULT_TEMPERATURE: f32 = 0.3;

    /// Completion token cap per request
    pub const DEFAULT_MAX_TOKENS: usize = 2048;
}

/// Anomaly-detector (isolation forest) defaults
pub mod detector {
    /// Expected share of anomalous rows, expected range (0.0, 0.5]
    pub const DEFAULT_CONTAMINATION: f32 = 0.1;

    /// Number of trees in the forest
    pub const DEFAULT_N_ESTIMATORS: usize = 100;
}

/// Filesystem layout
pub mod layout {
    /// Writable scratch root inside the cloud sandbox. The application
    /// directory there is read-only, so all data moves under this root.
    pub const CLOUD_BASE: &str = "/tmp";

    /// Default location of the platform-mounted secrets file
    pub const SECRETS_FILE: &str = "/run/secrets/insight.toml";

    /// Data directory name beneath the base
    pub const DATA_DIR: &str = "data";

    /// Upload staging directory name beneath the data directory
    pub const INPUT_DIR: &str = "input";

    /// Analysis results directory name beneath the data directory
    pub const OUTPUT_DIR: &str = "output";
}
