//! Build command implementation.

use crate::cli::StageArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use std::path::Path;
use std::time::Instant;

/// Execute the build command: extraction followed by generation.
pub fn execute(args: StageArgs, config_path: Option<&Path>) -> Result<()> {
    let started = Instant::now();
    let pipeline = utils::load_pipeline(&args, config_path)?;
    let options = pipeline.options();

    ui::info(&format!(
        "Building {} from {}",
        options.output.display(),
        options.input.display()
    ));
    let report = pipeline.run().map_err(utils::docs_error)?;

    ui::print_report(&report, started.elapsed());
    utils::report_problems(&report, &options.problems);
    ui::success(&format!("Stub written to {}", options.output.display()));
    Ok(())
}
