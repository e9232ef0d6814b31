//! runner.rs - Executes external commands with inherited standard streams.
//!
//! This is the single sanctioned spawn point for child processes. Commands
//! run with stdin/stdout/stderr inherited directly into the operator's
//! terminal, so native package manager output (progress bars, warnings) is
//! visible in real time without capture or parsing. The caller blocks until
//! the child exits.

use log::{debug, info};
use std::process::Command;

use crate::error::{Result, SetupError};

/// Run `program` with `args`, blocking until it exits.
///
/// Returns `Ok(())` only on a zero exit status. A non-zero exit maps to
/// `SetupError::CommandFailed` carrying the full command line and exit code;
/// a spawn failure (binary not on PATH) maps to `SetupError::Io`.
///
/// No timeout is applied: a hung child hangs the whole program.
pub fn run_command(program: &str, args: &[String]) -> Result<()> {
    let rendered = format!("{} {}", program, args.join(" "));
    info!("Running: {}", rendered);

    let status = Command::new(program).args(args).status()?;
    debug!("Command finished: {} -> {:?}", rendered, status.code());

    if status.success() {
        Ok(())
    } else {
        Err(SetupError::command_failed(format!(
            "{} (exit code {})",
            rendered,
            status.code().unwrap_or(-1)
        )))
    }
}
