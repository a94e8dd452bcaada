// crates/testgate-core/src/core/suite.rs
// ============================================================================
// Module: Testgate Suite Records
// Description: Outcome records for individual test-suite invocations.
// Purpose: Capture pass/fail status, timing, and captured output per suite.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A suite is one named external test invocation treated as an atomic
//! pass/fail unit. The orchestrator records one [`SuiteRecord`] per
//! invocation, in catalogue order, and never mutates a record afterwards.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Suite Status
// ============================================================================

/// Terminal status of a suite invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteStatus {
    /// The suite command exited with code zero.
    Passed,
    /// The suite command exited with a non-zero code or failed to spawn.
    Failed,
}

// ============================================================================
// SECTION: Suite Result
// ============================================================================

/// Outcome of one suite invocation.
///
/// # Invariants
/// - `output` is present only for passed suites.
/// - `error` and `exit_code` are present only for failed suites.
/// - Records are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteResult {
    /// Terminal status of the invocation.
    pub status: SuiteStatus,
    /// Wall-clock duration of the invocation in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    /// Captured standard output, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Captured error text, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Exit code of the underlying process, present on failure.
    #[serde(rename = "exitCode", skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl SuiteResult {
    /// Creates a passed result with captured output.
    #[must_use]
    pub const fn passed(duration_ms: u64, output: String) -> Self {
        Self {
            status: SuiteStatus::Passed,
            duration_ms,
            output: Some(output),
            error: None,
            exit_code: None,
        }
    }

    /// Creates a failed result with captured error text and exit code.
    #[must_use]
    pub const fn failed(duration_ms: u64, error: String, exit_code: i32) -> Self {
        Self {
            status: SuiteStatus::Failed,
            duration_ms,
            output: None,
            error: Some(error),
            exit_code: Some(exit_code),
        }
    }

    /// Returns whether the suite passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == SuiteStatus::Passed
    }
}

// ============================================================================
// SECTION: Suite Record
// ============================================================================

/// A named suite result held in catalogue insertion order.
///
/// # Invariants
/// - `name` is unique within one orchestrator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteRecord {
    /// Suite name, unique within a run.
    pub name: String,
    /// Recorded outcome of the invocation.
    pub result: SuiteResult,
}

impl SuiteRecord {
    /// Creates a record binding a suite name to its result.
    #[must_use]
    pub const fn new(name: String, result: SuiteResult) -> Self {
        Self {
            name,
            result,
        }
    }
}
