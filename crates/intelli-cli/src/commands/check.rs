//! Check command implementation.
//!
//! Validates configuration without running the pipeline.

use crate::cli::CheckArgs;
use crate::config::IntelliConfig;
use crate::error::{Result, ResultExt};
use crate::ui;
use std::path::Path;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Merge defaults, config file, environment and flags
/// 2. Validate the merged configuration
/// 3. Warn about inputs that do not exist yet
/// 4. Print the effective configuration as JSON on stdout
///
/// With `--schema` only the JSON schema of the config file is printed.
pub fn execute(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    if args.schema {
        println!(
            "{}",
            serde_json::to_string_pretty(&IntelliConfig::json_schema())?
        );
        return Ok(());
    }

    ui::info("Checking configuration...");
    let config = IntelliConfig::load(&args.stage, config_path)?;
    ui::success("Configuration is valid!");

    for (label, path) in [
        ("input", &config.input),
        ("intermediate", &config.intermediate),
        ("template", &config.template),
    ] {
        if path.exists() {
            ui::success(&format!("  {} {} exists", label, path.display()));
        } else {
            ui::warning(&format!("  {} {} does not exist", label, path.display()));
        }
    }

    let rendered = serde_json::to_string_pretty(&config).context("Failed to render configuration")?;
    println!("{}", rendered);
    Ok(())
}
