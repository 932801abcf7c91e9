//! Intelli CLI - intellisense stub generator.
//!
//! This crate provides the command-line interface over `intelli-docs`, turning
//! hand-written API signature docs into a JavaScript stub with XML doc comments
//! for editor autocomplete.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `extract`, `generate`, `build` and `check`
//! - [`config`] - Layered configuration (defaults, file, environment, flags)
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status output
//!
//! # Example
//!
//! ```rust
//! use intelli_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{cli_error_to_miette, CliError, ConfigError, Result, ResultExt};
