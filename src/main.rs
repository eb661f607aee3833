//! dirjson - serialize a directory tree into a single JSON object
//!
//! dirjson provides:
//! - Recursive, deterministic directory walking
//! - Whole-file UTF-8 reads with a configurable invalid-text policy
//! - One JSON object `{ "<path>": "<content>" }` on stdout, or nothing on failure

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
