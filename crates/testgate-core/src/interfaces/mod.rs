// crates/testgate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Testgate Interfaces
// Description: Backend-agnostic seams for process execution, probing, logging.
// Purpose: Keep runtime logic deterministic and testable without side effects.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how testgate touches the operating system without
//! embedding those details in the runtime logic. Production implementations
//! live in the CLI crate; tests substitute scripted implementations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

use crate::core::catalog::ServiceEndpoint;

// ============================================================================
// SECTION: Suite Executor
// ============================================================================

/// Request to spawn one external process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Executable to invoke.
    pub command: String,
    /// Argument list passed to the executable.
    pub args: Vec<String>,
    /// Optional working-directory override.
    pub cwd: Option<PathBuf>,
    /// When set, stream child output to the terminal instead of capturing.
    pub stream_output: bool,
}

impl CommandRequest {
    /// Creates a capturing request for the given command line.
    #[must_use]
    pub const fn new(command: String, args: Vec<String>, cwd: Option<PathBuf>) -> Self {
        Self {
            command,
            args,
            cwd,
            stream_output: false,
        }
    }
}

/// Captured output of a successfully exited process.
///
/// # Invariants
/// - Only produced for exit code zero; failures surface as [`ExecError`].
/// - `stdout` and `stderr` are empty when output was streamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// Process execution errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The process could not be spawned at all.
    #[error("failed to spawn '{command}': {message}")]
    Spawn {
        /// Executable that failed to spawn.
        command: String,
        /// Operating-system error description.
        message: String,
    },
    /// The process exited with a non-zero code.
    ///
    /// A process terminated without an exit code (for example by signal)
    /// reports `-1`.
    #[error("command '{command}' exited with code {exit_code}")]
    Failed {
        /// Executable that failed.
        command: String,
        /// Non-zero exit code of the process.
        exit_code: i32,
        /// Captured standard output, empty when streamed.
        stdout: String,
        /// Captured standard error, empty when streamed.
        stderr: String,
    },
}

/// Spawns external suite commands and reports their outcome.
pub trait SuiteExecutor {
    /// Runs the command to completion.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError`] when the process cannot be spawned or exits
    /// with a non-zero code.
    fn run(&self, request: &CommandRequest) -> Result<CommandOutput, ExecError>;
}

// ============================================================================
// SECTION: Service Probe
// ============================================================================

/// Single-attempt readiness probe for a dependent service.
pub trait ServiceProbe {
    /// Returns whether the service currently accepts connections.
    fn is_ready(&self, endpoint: &ServiceEndpoint) -> bool;
}

// ============================================================================
// SECTION: Security Checks
// ============================================================================

/// One named security verification consulted by the quality gate.
///
/// Implementations decide their own verdict source; the stock checks in
/// `runtime::security` are placeholders with fixed outcomes.
pub trait SecurityCheck {
    /// Display name of the check, used in violation messages.
    fn name(&self) -> &str;

    /// Returns whether the check passes.
    fn passes(&self) -> bool;
}

// ============================================================================
// SECTION: Run Logger
// ============================================================================

/// Console log levels used by both runtime components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational progress line.
    Info,
    /// Successful step line.
    Success,
    /// Soft expectation missed.
    Warning,
    /// Hard failure line.
    Error,
}

/// Leveled console output seam.
///
/// Implementations own timestamping and formatting; the runtime only emits
/// level and message.
pub trait RunLogger {
    /// Emits one log line at the given level.
    fn log(&self, level: LogLevel, message: &str);

    /// Emits an informational line.
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Emits a success line.
    fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }

    /// Emits a warning line.
    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    /// Emits an error line.
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
