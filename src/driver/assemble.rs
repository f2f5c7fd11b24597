//! External assembler and linker invocation.
//!
//! The emitted assembly targets the GNU toolchain: `as` turns it into an
//! object file and `ld` links the freestanding executable (the program
//! defines its own `_start`, so no C runtime is involved).

use std::path::Path;
use std::process::{Command, ExitStatus};

/// An assembler or linker failure.
pub(crate) enum ToolError {
    /// The tool could not be started (usually: not installed).
    ExecutionFailed {
        tool: &'static str,
        source: std::io::Error,
    },
    /// The tool ran and exited with a non-zero status.
    Failed {
        tool: &'static str,
        exit_code: String,
        stdout: String,
        stderr: String,
    },
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolError::ExecutionFailed { tool, source } => {
                write!(f, "Failed to run {}: {}", tool, source)
            }
            ToolError::Failed {
                tool,
                exit_code,
                stdout,
                stderr,
            } => {
                write!(f, "{} failed with exit code {}", tool, exit_code)?;
                if !stdout.is_empty() {
                    write!(f, "\n[stdout]\n{}", stdout)?;
                }
                if !stderr.is_empty() {
                    write!(f, "\n[stderr]\n{}", stderr)?;
                }
                Ok(())
            }
        }
    }
}

/// Formats an exit status for display.
fn format_exit_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

/// Runs `tool` with `args`, capturing output and mapping failures.
fn run_tool(tool: &'static str, args: &[&str]) -> Result<(), ToolError> {
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|source| ToolError::ExecutionFailed { tool, source })?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            tool,
            exit_code: format_exit_status(&output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

/// Assembles `asm_path` into an object file at `object_path`.
pub(crate) fn assemble(asm_path: &Path, object_path: &Path) -> Result<(), ToolError> {
    run_tool(
        "as",
        &[
            "-o",
            &object_path.display().to_string(),
            &asm_path.display().to_string(),
        ],
    )
}

/// Links `object_path` into a freestanding executable at `output_path`.
pub(crate) fn link(object_path: &Path, output_path: &Path) -> Result<(), ToolError> {
    run_tool(
        "ld",
        &[
            "-o",
            &output_path.display().to_string(),
            &object_path.display().to_string(),
        ],
    )
}
