//! Command-line interface definition for the intellisense stub generator.
//!
//! # Command Structure
//!
//! - `intelli extract` - Pull signature bullets out of the raw docs
//! - `intelli generate` - Turn extracted records into the stub
//! - `intelli build` - Both stages in one run
//! - `intelli check` - Validate the effective configuration

mod commands;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, StageArgs};
pub use validation::parse_identifier;

/// Intelli - intellisense stub generator
#[derive(Parser, Debug)]
#[command(
    name = "intelli",
    version,
    about = "Generate editor intellisense stubs from API signature docs",
    long_about = "Intelli reads hand-written API documentation bullets of the form\n\
                  - `vec3 = vec.minus(vec2)`subtract two vectors\n\
                  and emits a JavaScript stub with XML doc comments that editors use\n\
                  for autocomplete and signature help."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Logs every signature as it is classified.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a config file (defaults to ./intelli.config.json when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
