use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_identifier;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract signature bullets into the intermediate file
    ///
    /// Keeps every line of the form "- `signature`comment" and writes it as
    /// "signature<SEPARATOR>comment".
    Extract(StageArgs),

    /// Generate the stub from the intermediate file
    ///
    /// Classifies each signature, writes rejected lines to the problems file
    /// and appends the generated object literals to the template.
    Generate(StageArgs),

    /// Run extraction and generation in one go
    Build(StageArgs),

    /// Validate configuration and print the effective settings
    Check(CheckArgs),
}

/// Path and aliasing overrides shared by every pipeline stage.
///
/// Anything left unset falls back to the config file, then the environment,
/// then the built-in defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct StageArgs {
    /// Raw documentation dump
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Intermediate signature/comment records
    #[arg(long, value_name = "FILE")]
    pub intermediate: Option<PathBuf>,

    /// File receiving signatures that need manual handling
    #[arg(long, value_name = "FILE")]
    pub problems: Option<PathBuf>,

    /// Static JavaScript the generated body is appended to
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Final intellisense stub
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the synthetic statement for every accepted signature
    #[arg(long, value_name = "FILE")]
    pub statements: Option<PathBuf>,

    /// Also write the per-object member grouping as JSON
    #[arg(long, value_name = "FILE")]
    pub dump_groups: Option<PathBuf>,

    /// Global object exempt from aliasing (repeatable, replaces the defaults)
    #[arg(short, long = "global", value_name = "NAME", value_parser = parse_identifier)]
    pub globals: Vec<String>,

    /// Prefix marking non-global aliases
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Field separator used in the intermediate file
    #[arg(long, value_name = "TOKEN")]
    pub separator: Option<String>,
}

/// Arguments for the check command
#[derive(Args, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Print the JSON schema of intelli.config.json instead
    #[arg(long)]
    pub schema: bool,

    #[command(flatten)]
    pub stage: StageArgs,
}
