//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use intelli_docs::DocsError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Docs(e) => docs_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert DocsError to miette Report
pub fn docs_error_to_miette(err: DocsError) -> Report {
    match err {
        DocsError::GlobalReturnTarget { line, target } => miette::miette!(
            "Inconsistent documentation: `{}`\n\
             '{}' is a global and cannot be returned by a function.\n\n\
             Hint: Rename the return value in the docs or remove '{}' from the globals",
            line,
            target,
            target
        ),
        DocsError::Io { path, error } => miette::miette!(
            "Failed to access {}: {}\n\nHint: Check the paths in intelli.config.json",
            path.display(),
            error
        ),
        other => miette::miette!("{}", other),
    }
}
