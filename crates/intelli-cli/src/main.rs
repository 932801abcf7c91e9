//! Intelli CLI - intellisense stub generator.
//!
//! This is the main entry point for the `intelli` binary. It handles
//! command-line argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use intelli_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let config = args.config.as_deref();
    let result = match args.command {
        cli::Command::Extract(stage_args) => commands::extract_execute(stage_args, config),
        cli::Command::Generate(stage_args) => commands::generate_execute(stage_args, config),
        cli::Command::Build(stage_args) => commands::build_execute(stage_args, config),
        cli::Command::Check(check_args) => commands::check_execute(check_args, config),
    };

    // Convert CLI errors to miette diagnostics for reporting
    result.map_err(error::cli_error_to_miette)
}
