//! Shared utilities for command implementations.

use crate::cli::StageArgs;
use crate::config::IntelliConfig;
use crate::error::{CliError, Result};
use crate::ui;
use intelli_docs::{DocsError, Pipeline, PipelineReport};
use std::path::Path;

/// Load the effective configuration and build a pipeline from it.
pub fn load_pipeline(args: &StageArgs, config_path: Option<&Path>) -> Result<Pipeline> {
    let config = IntelliConfig::load(args, config_path)?;
    tracing::debug!(?config, "effective configuration");
    Ok(Pipeline::new(config.pipeline_options()))
}

/// Map pipeline failures onto CLI errors, surfacing missing inputs as
/// [`CliError::FileNotFound`].
pub fn docs_error(err: DocsError) -> CliError {
    match err {
        DocsError::Io { path, error } if error.kind() == std::io::ErrorKind::NotFound => {
            CliError::FileNotFound(path)
        }
        other => CliError::Docs(other),
    }
}

/// Warn about signatures that were routed to the problems file.
pub fn report_problems(report: &PipelineReport, problems: &Path) {
    if report.problems > 0 {
        ui::warning(&format!(
            "{} signature(s) need manual handling, see {}",
            report.problems,
            problems.display()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_becomes_file_not_found() {
        let err = docs_error(DocsError::io(
            "intelli_tail.js",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        ));
        assert!(matches!(err, CliError::FileNotFound(ref p) if p == &PathBuf::from("intelli_tail.js")));
    }

    #[test]
    fn test_other_errors_are_wrapped() {
        let err = docs_error(DocsError::GlobalReturnTarget {
            line: "qm = la.x()".to_string(),
            target: "qm".to_string(),
        });
        assert!(matches!(err, CliError::Docs(_)));
    }
}
