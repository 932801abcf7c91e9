//! Command implementations for the Intelli CLI.
//!
//! - [`extract`] - Raw docs to intermediate records
//! - [`generate`] - Intermediate records to the stub
//! - [`build`] - Both stages
//! - [`check`] - Configuration validation
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments plus the global `--config` path and returns a Result.

pub mod build;
pub mod check;
pub mod extract;
pub mod generate;
pub(crate) mod utils;

pub use build::execute as build_execute;
pub use check::execute as check_execute;
pub use extract::execute as extract_execute;
pub use generate::execute as generate_execute;
