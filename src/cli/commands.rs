//! Command Implementations
//!
//! Usage:
//!   insight-config show [-f json|toml]
//!   insight-config paths
//!   insight-config check

use std::path::Path;

use crate::cli::output::Output;
use crate::config::{ConfigLoader, DataPaths, RuntimeEnv};

/// Load and print the effective configuration. The API key never appears
/// in any format.
pub fn show(format: &str) -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&config)?),
        "toml" => println!("{}", toml::to_string_pretty(&config)?),
        _ => {
            Output::new().section("Configuration");
            println!("{}", config.summary());
        }
    }
    Ok(())
}

/// Show the derived data layout without creating anything.
pub fn paths() -> anyhow::Result<()> {
    let runtime = RuntimeEnv::detect();
    let paths = DataPaths::derive(runtime);
    let mark = |path: &Path| if path.exists() { "✓" } else { "✗" };

    let out = Output::new();
    out.section(&format!("Data directories ({} runtime)", runtime));
    println!("  Base:   {} {}", mark(&paths.base_dir), paths.base_dir.display());
    println!("  Data:   {} {}", mark(&paths.data_dir), paths.data_dir.display());
    println!("  Input:  {} {}", mark(&paths.input_dir), paths.input_dir.display());
    println!("  Output: {} {}", mark(&paths.output_dir), paths.output_dir.display());

    if !paths.input_dir.exists() || !paths.output_dir.exists() {
        println!();
        out.warning("missing directories are created by any command that loads the configuration");
    }
    Ok(())
}

/// Load and validate. The exit code of the binary reflects the result.
pub fn check() -> anyhow::Result<()> {
    let out = Output::new();
    let config = ConfigLoader::load()?;

    if let Err(err) = config.validate() {
        out.error(&err.to_string());
        anyhow::bail!("configuration invalid");
    }

    out.success(&format!("configuration valid ({} runtime)", config.runtime));
    println!("  Model:  {}", config.gemini.model);
    println!("  Data:   {}", config.paths.data_dir.display());
    Ok(())
}
