#![deny(missing_docs)]

//! # Formatter
//!
//! Runs the patched source through `gofmt` so tag columns line up the way Go
//! tooling expects.

use crate::error::{CliError, CliResult};
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Interface for executing the formatting command.
///
/// Abstracted to allow mocking command execution in tests without requiring `gofmt` to be installed.
pub trait CommandExecutor {
    /// Executes the command with `input` on stdin and returns the output.
    fn execute(&self, program: &str, args: &[&str], input: &str) -> CliResult<Output>;
}

/// Standard executor using `std::process::Command`.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, program: &str, args: &[&str], input: &str) -> CliResult<Output> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Dropping stdin closes the pipe so the child sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes())?;
        }

        Ok(child.wait_with_output()?)
    }
}

/// Formats Go source with `gofmt`.
///
/// # Arguments
///
/// * `source` - The Go source to format.
/// * `executor` - The command runner (use `ShellExecutor` for real execution).
pub fn gofmt<E: CommandExecutor>(source: &str, executor: &E) -> CliResult<String> {
    let output = executor.execute("gofmt", &[], source)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::General(format!(
            "gofmt failed with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| CliError::General(format!("gofmt produced invalid UTF-8: {}", e)))
}
