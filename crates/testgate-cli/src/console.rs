// crates/testgate-cli/src/console.rs
// ============================================================================
// Module: Testgate Console Output
// Description: Leveled, timestamped console logging and stream writers.
// Purpose: Implement the RunLogger seam over explicit stdout/stderr writes.
// Dependencies: testgate-core
// ============================================================================

//! ## Overview
//! All user-facing output flows through the writer helpers here; the runtime
//! crates never print directly. Log lines carry a severity marker and an
//! RFC3339 timestamp. Write failures on a log line are swallowed rather than
//! aborting a run over console plumbing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use testgate_core::LogLevel;
use testgate_core::RunLogger;
use testgate_core::core::time::rfc3339_now;

// ============================================================================
// SECTION: Stream Writers
// ============================================================================

/// Writes a line to stdout.
///
/// # Errors
///
/// Returns the underlying I/O error when stdout is unavailable.
pub fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
///
/// # Errors
///
/// Returns the underlying I/O error when stderr is unavailable.
pub fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

// ============================================================================
// SECTION: Console Logger
// ============================================================================

/// Console implementation of the [`RunLogger`] seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl RunLogger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        let line = format!("{} [{}] {message}", level_marker(level), rfc3339_now());
        let _ = write_stdout_line(&line);
    }
}

/// Returns the severity marker for a log level.
#[must_use]
pub const fn level_marker(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Info => "ℹ️",
        LogLevel::Success => "✅",
        LogLevel::Warning => "⚠️",
        LogLevel::Error => "❌",
    }
}
