#![deny(missing_docs)]

//! # Fill Command
//!
//! Adds missing `json`/`form` tags to the Go struct under the cursor.
//!
//! 1. **Read**: Loads the Go file.
//! 2. **Plan**: Locates the struct covering the line and computes every tag edit in memory.
//! 3. **Format**: Optionally pipes the result through `gofmt`.
//! 4. **Emit**: Rewrites the file once, or prints the result.

use crate::error::CliResult;
use crate::formatter::{gofmt, CommandExecutor};
use clap::ValueEnum;
use std::fs;
use std::path::PathBuf;
use tagfill_core::{fill_struct_tags, TagConfig};

/// What to do with the result.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Rewrite the file in place.
    Write,
    /// Print the patched source to stdout.
    Print,
    /// Print the byte-offset edits as JSON.
    Edits,
}

/// Arguments for the fill command.
#[derive(clap::Args, Debug, Clone)]
pub struct FillArgs {
    /// Path to the Go source file.
    pub path: PathBuf,

    /// 1-based line inside the target struct.
    pub line: usize,

    /// Cursor column. Accepted for editor integrations, currently unused.
    pub column: usize,

    /// Output mode.
    #[clap(long, value_enum, default_value_t = Emit::Write)]
    pub emit: Emit,

    /// Run `gofmt` over the result before writing or printing.
    #[clap(long, env = "TAGFILL_GOFMT")]
    pub gofmt: bool,
}

/// Executes the fill command, writing to stdout for the print modes.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `executor` - Runs `gofmt` when requested.
pub fn execute(args: &FillArgs, executor: &impl CommandExecutor) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    execute_to(args, executor, &mut stdout)
}

/// Executes the fill command, sending printed output to `out`.
pub fn execute_to(
    args: &FillArgs,
    executor: &impl CommandExecutor,
    out: &mut impl std::io::Write,
) -> CliResult<()> {
    // 1. Read Source
    let source = fs::read_to_string(&args.path)?;

    // 2. Plan Tags
    let config = TagConfig::default();
    let Some(patch) = fill_struct_tags(&source, args.line, &config)? else {
        log::warn!("No struct found at {}:{}", args.path.display(), args.line);
        return Ok(());
    };
    log::info!(
        "Struct at line {}: {} field(s) retagged",
        patch.struct_line,
        patch.edits.len()
    );

    if args.emit == Emit::Edits {
        // Offsets refer to the unformatted source, so gofmt is not applied here.
        serde_json::to_writer_pretty(&mut *out, &patch.edits)?;
        writeln!(out)?;
        return Ok(());
    }

    // 3. Format
    let output = if args.gofmt {
        gofmt(&patch.patched, executor)?
    } else {
        patch.patched
    };

    // 4. Emit
    match args.emit {
        Emit::Print => out.write_all(output.as_bytes())?,
        Emit::Write | Emit::Edits => {
            if output == source {
                log::info!("{} is already up to date", args.path.display());
            } else {
                fs::write(&args.path, output)?;
                log::info!("Updated {}", args.path.display());
            }
        }
    }

    Ok(())
}
