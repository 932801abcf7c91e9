//! Extract command implementation.

use crate::cli::StageArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use std::path::Path;

/// Execute the extract command.
///
/// Reads the raw documentation and writes one `signature<SEPARATOR>comment`
/// record per documentation bullet to the intermediate file.
pub fn execute(args: StageArgs, config_path: Option<&Path>) -> Result<()> {
    let pipeline = utils::load_pipeline(&args, config_path)?;
    let options = pipeline.options();

    ui::info(&format!("Extracting {}", options.input.display()));
    let report = pipeline.extract().map_err(utils::docs_error)?;

    ui::success(&format!(
        "Wrote {} record(s) to {}",
        report.records_written,
        options.intermediate.display()
    ));
    Ok(())
}
