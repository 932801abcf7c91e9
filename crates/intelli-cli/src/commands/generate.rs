//! Generate command implementation.

use crate::cli::StageArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use std::path::Path;
use std::time::Instant;

/// Execute the generate command.
///
/// # Steps
///
/// 1. Load the intermediate records
/// 2. Classify and normalize every signature
/// 3. Write the problems file (and statements / group dump when configured)
/// 4. Append the generated object literals to the template
///
/// # Errors
///
/// Fails without touching the output when the docs declare a global as a
/// function's return value, or when any input cannot be read.
pub fn execute(args: StageArgs, config_path: Option<&Path>) -> Result<()> {
    let started = Instant::now();
    let pipeline = utils::load_pipeline(&args, config_path)?;
    let options = pipeline.options();

    ui::info(&format!("Generating from {}", options.intermediate.display()));
    let report = pipeline.generate().map_err(utils::docs_error)?;

    ui::print_report(&report, started.elapsed());
    utils::report_problems(&report, &options.problems);
    ui::success(&format!("Stub written to {}", options.output.display()));
    Ok(())
}
