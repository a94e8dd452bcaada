// crates/testgate-cli/src/executor.rs
// ============================================================================
// Module: Testgate Process Executor
// Description: Spawns suite commands via std::process with optional streaming.
// Purpose: Implement the SuiteExecutor seam for real external processes.
// Dependencies: std::process, testgate-core
// ============================================================================

//! ## Overview
//! The executor spawns one process at a time and waits for completion. In
//! capture mode both output streams are collected as text; in streaming mode
//! the child inherits the terminal and the captured streams stay empty. A
//! non-zero exit surfaces as [`ExecError::Failed`]; a process terminated
//! without an exit code reports `-1`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::process::Command;

use testgate_core::CommandOutput;
use testgate_core::CommandRequest;
use testgate_core::ExecError;
use testgate_core::SuiteExecutor;

// ============================================================================
// SECTION: Process Executor
// ============================================================================

/// Executor backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl SuiteExecutor for ProcessExecutor {
    fn run(&self, request: &CommandRequest) -> Result<CommandOutput, ExecError> {
        let mut command = Command::new(&request.command);
        command.args(&request.args);
        if let Some(cwd) = &request.cwd {
            command.current_dir(cwd);
        }

        if request.stream_output {
            let status = command.status().map_err(|error| spawn_error(request, &error))?;
            if status.success() {
                return Ok(CommandOutput {
                    stdout: String::new(),
                    stderr: String::new(),
                });
            }
            return Err(ExecError::Failed {
                command: request.command.clone(),
                exit_code: status.code().unwrap_or(-1),
                stdout: String::new(),
                stderr: String::new(),
            });
        }

        let output = command.output().map_err(|error| spawn_error(request, &error))?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if output.status.success() {
            return Ok(CommandOutput {
                stdout,
                stderr,
            });
        }
        Err(ExecError::Failed {
            command: request.command.clone(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout,
            stderr,
        })
    }
}

/// Maps a spawn failure into the seam error type.
fn spawn_error(request: &CommandRequest, error: &std::io::Error) -> ExecError {
    ExecError::Spawn {
        command: request.command.clone(),
        message: error.to_string(),
    }
}
