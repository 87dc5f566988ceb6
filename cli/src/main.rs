#![deny(missing_docs)]

//! # Tagfill CLI
//!
//! Command Line Interface for filling in Go struct tags from an editor.
//!
//! Usage: `tagfill <path> <line> <column>`
//!
//! Every exported field of the struct covering `line` gets `json` and `form`
//! tags derived from its name, unless it already has them.

use clap::Parser;
use std::process::ExitCode;

use crate::formatter::ShellExecutor;

mod error;
mod fill;
mod formatter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Add missing json/form tags to a Go struct")]
struct Cli {
    #[clap(flatten)]
    fill: fill::FillArgs,
}

fn init_logging() {
    let env = env_logger::Env::new().filter_or("TAGFILL_LOG", "warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match fill::execute(&cli.fill, &ShellExecutor) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("tagfill: {}", err);
            ExitCode::FAILURE
        }
    }
}
