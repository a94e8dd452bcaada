// crates/testgate-core/src/core/violation.rs
// ============================================================================
// Module: Testgate Quality-Gate Violations
// Description: Violation records and the aggregated quality-gate report.
// Purpose: Carry threshold breaches from validation into the gate artifact.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Violations are appended in validation order and never removed or mutated.
//! The gate verdict is a pure function of the accumulated levels: warnings
//! never fail the gate, critical and error violations always do.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Violation
// ============================================================================

/// Severity of a quality-gate finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationLevel {
    /// Validation cannot proceed meaningfully; fails the gate.
    Critical,
    /// A hard requirement was missed; fails the gate.
    Error,
    /// A soft expectation was missed; never fails the gate.
    Warning,
}

/// One recorded quality-gate finding.
///
/// # Invariants
/// - Appended to an ordered sequence and immutable thereafter.
/// - `message` includes the measured value and threshold when numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Severity level of the finding.
    pub level: ViolationLevel,
    /// Human-readable description of the finding.
    pub message: String,
    /// RFC3339 creation time of the finding.
    pub timestamp: String,
}

// ============================================================================
// SECTION: Quality-Gate Report
// ============================================================================

/// Violation counts by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSummary {
    /// Total number of violations at any level.
    pub total: usize,
    /// Number of critical violations.
    pub critical: usize,
    /// Number of error violations.
    pub errors: usize,
    /// Number of warning violations.
    pub warnings: usize,
}

/// Aggregated quality-gate verdict for one validation run.
///
/// # Invariants
/// - `passed` is true iff `summary.critical == 0 && summary.errors == 0`.
/// - `violations` preserves validation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityGateReport {
    /// Gate verdict; warnings alone do not fail the gate.
    pub passed: bool,
    /// Violation counts by severity.
    pub summary: GateSummary,
    /// Ordered violation sequence.
    pub violations: Vec<Violation>,
    /// RFC3339 generation time of the report.
    pub timestamp: String,
}

impl QualityGateReport {
    /// Builds a report from an accumulated violation sequence.
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>, timestamp: String) -> Self {
        let critical =
            violations.iter().filter(|v| v.level == ViolationLevel::Critical).count();
        let errors = violations.iter().filter(|v| v.level == ViolationLevel::Error).count();
        let warnings =
            violations.iter().filter(|v| v.level == ViolationLevel::Warning).count();
        Self {
            passed: critical == 0 && errors == 0,
            summary: GateSummary {
                total: violations.len(),
                critical,
                errors,
                warnings,
            },
            violations,
            timestamp,
        }
    }
}
