// crates/testgate-core/src/runtime/gate.rs
// ============================================================================
// Module: Testgate Quality Gate
// Description: Five independent validation checks over result artifacts.
// Purpose: Accumulate violations against fixed thresholds into a gate verdict.
// Dependencies: crate::core, crate::runtime::artifacts, crate::runtime::thresholds
// ============================================================================

//! ## Overview
//! The evaluator scores five dimensions: test execution, code coverage,
//! performance, accessibility, and security. The checks are independent and
//! never short-circuit one another; every check runs and may contribute
//! violations even when an earlier one already failed. Warnings never fail
//! the gate.
//!
//! Coverage averaging is an unweighted arithmetic mean across found coverage
//! files. This is statistically naive but part of the observable gate
//! behavior and kept as-is.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::report::RunReport;
use crate::core::time::rfc3339_now;
use crate::core::violation::QualityGateReport;
use crate::core::violation::Violation;
use crate::core::violation::ViolationLevel;
use crate::interfaces::SecurityCheck;
use crate::runtime::artifacts::AccessibilityResults;
use crate::runtime::artifacts::CoverageSummary;
use crate::runtime::artifacts::PerformanceResults;
use crate::runtime::thresholds::QualityThresholds;

// ============================================================================
// SECTION: Execution Soft Bounds
// ============================================================================

/// Suite counts below this raise a warning.
const MIN_SUITE_COUNT: usize = 10;
/// Failure rates above this percentage raise an error.
const MAX_FAILURE_RATE_PCT: f64 = 5.0;
/// Run durations above this many minutes raise a warning.
const MAX_DURATION_MINUTES: f64 = 30.0;

// ============================================================================
// SECTION: Gate Evaluator
// ============================================================================

/// Accumulates violations across the five validation dimensions.
///
/// # Invariants
/// - Violations keep validation order; none is ever removed or mutated.
/// - Checks are independent; no check inspects another's outcome.
pub struct GateEvaluator {
    /// Static threshold configuration.
    thresholds: QualityThresholds,
    /// Ordered violation sequence.
    violations: Vec<Violation>,
}

impl GateEvaluator {
    /// Creates an evaluator over the given thresholds.
    #[must_use]
    pub const fn new(thresholds: QualityThresholds) -> Self {
        Self {
            thresholds,
            violations: Vec::new(),
        }
    }

    /// Appends one violation at the given level.
    fn record(&mut self, level: ViolationLevel, message: String) {
        self.violations.push(Violation {
            level,
            message,
            timestamp: rfc3339_now(),
        });
    }

    /// Validates overall test execution from the run report.
    ///
    /// Absence of the report is a critical violation and short-circuits this
    /// check only; the remaining dimensions still run. Returns whether the
    /// run had zero failures.
    pub fn validate_execution(&mut self, report: Option<&RunReport>) -> bool {
        let Some(report) = report else {
            self.record(ViolationLevel::Critical, "No test results found".to_string());
            return false;
        };
        let summary = &report.summary;

        if summary.total < MIN_SUITE_COUNT {
            self.record(
                ViolationLevel::Warning,
                format!("Low test count: {} (expected > {MIN_SUITE_COUNT})", summary.total),
            );
        }

        let failure_rate = if summary.total == 0 {
            0.0
        } else {
            fraction(summary.failed, summary.total) * 100.0
        };
        if failure_rate > MAX_FAILURE_RATE_PCT {
            self.record(
                ViolationLevel::Error,
                format!(
                    "High failure rate: {failure_rate:.1}% (expected < {MAX_FAILURE_RATE_PCT}%)"
                ),
            );
        }

        let duration_minutes = millis_to_minutes(summary.duration_ms);
        if duration_minutes > MAX_DURATION_MINUTES {
            self.record(
                ViolationLevel::Warning,
                format!(
                    "Long test duration: {duration_minutes:.1}min (expected < \
                     {MAX_DURATION_MINUTES}min)"
                ),
            );
        }

        summary.failed == 0
    }

    /// Validates code coverage as an unweighted mean across found files.
    ///
    /// Returns whether all four metrics meet their thresholds; zero found
    /// coverage files is a warning and reports not-passed.
    pub fn validate_coverage(&mut self, summaries: &[CoverageSummary]) -> bool {
        if summaries.is_empty() {
            self.record(ViolationLevel::Warning, "No coverage data found".to_string());
            return false;
        }

        let mean = |select: fn(&CoverageSummary) -> f64| {
            let sum: f64 = summaries.iter().map(select).sum();
            sum / to_f64(summaries.len())
        };
        let checks = [
            ("Statements", mean(|s| s.total.statements.pct), self.thresholds.coverage.statements),
            ("Branches", mean(|s| s.total.branches.pct), self.thresholds.coverage.branches),
            ("Functions", mean(|s| s.total.functions.pct), self.thresholds.coverage.functions),
            ("Lines", mean(|s| s.total.lines.pct), self.thresholds.coverage.lines),
        ];

        let mut all_passed = true;
        for (name, value, threshold) in checks {
            if value < threshold {
                self.record(
                    ViolationLevel::Error,
                    format!("{name} coverage {value:.1}% < {threshold}%"),
                );
                all_passed = false;
            }
        }
        all_passed
    }

    /// Validates page loads, API responses, and frame rate.
    ///
    /// Each offending page or endpoint contributes its own error violation.
    /// Absence of the artifact is a warning and reports not-passed.
    pub fn validate_performance(&mut self, results: Option<&PerformanceResults>) -> bool {
        let Some(results) = results else {
            self.record(ViolationLevel::Warning, "No performance results found".to_string());
            return false;
        };
        let bounds = self.thresholds.performance;
        let mut all_passed = true;

        for (page, load_time) in &results.load_times {
            if *load_time > bounds.max_load_time_ms {
                self.record(
                    ViolationLevel::Error,
                    format!("{page} load time {load_time}ms > {}ms", bounds.max_load_time_ms),
                );
                all_passed = false;
            }
        }

        for (endpoint, response_time) in &results.api_times {
            if *response_time > bounds.max_api_response_time_ms {
                self.record(
                    ViolationLevel::Error,
                    format!(
                        "{endpoint} response time {response_time}ms > {}ms",
                        bounds.max_api_response_time_ms
                    ),
                );
                all_passed = false;
            }
        }

        if let Some(fps) = results.fps
            && fps < bounds.min_fps
        {
            self.record(ViolationLevel::Error, format!("FPS {fps} < {}", bounds.min_fps));
            all_passed = false;
        }

        all_passed
    }

    /// Validates the accessibility score and finding count independently.
    ///
    /// Absence of the artifact is a warning and reports not-passed.
    pub fn validate_accessibility(&mut self, results: Option<&AccessibilityResults>) -> bool {
        let Some(results) = results else {
            self.record(ViolationLevel::Warning, "No accessibility results found".to_string());
            return false;
        };
        let bounds = self.thresholds.accessibility;
        let mut all_passed = true;

        if results.score < bounds.min_score {
            self.record(
                ViolationLevel::Error,
                format!("Accessibility score {} < {}", results.score, bounds.min_score),
            );
            all_passed = false;
        }

        let violation_count = results.violations.len();
        if violation_count > bounds.max_violations {
            self.record(
                ViolationLevel::Error,
                format!(
                    "{violation_count} accessibility violations > {}",
                    bounds.max_violations
                ),
            );
            all_passed = false;
        }

        all_passed
    }

    /// Runs every security check; each failing check is an error violation.
    pub fn validate_security(&mut self, checks: &[Box<dyn SecurityCheck>]) -> bool {
        let mut all_passed = true;
        for check in checks {
            if !check.passes() {
                self.record(
                    ViolationLevel::Error,
                    format!("Security check failed: {}", check.name()),
                );
                all_passed = false;
            }
        }
        all_passed
    }

    /// Returns the accumulated violations in validation order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Builds the quality-gate report from the accumulated violations.
    #[must_use]
    pub fn generate_report(&self) -> QualityGateReport {
        QualityGateReport::from_violations(self.violations.clone(), rfc3339_now())
    }
}

// ============================================================================
// SECTION: Numeric Helpers
// ============================================================================

/// Converts a count to `f64` for ratio arithmetic.
#[allow(clippy::cast_precision_loss, reason = "Counts stay far below 2^52.")]
const fn to_f64(value: usize) -> f64 {
    value as f64
}

/// Computes `numerator / denominator` over counts.
const fn fraction(numerator: usize, denominator: usize) -> f64 {
    to_f64(numerator) / to_f64(denominator)
}

/// Converts milliseconds to fractional minutes.
#[allow(clippy::cast_precision_loss, reason = "Run durations stay far below 2^52 ms.")]
const fn millis_to_minutes(millis: u64) -> f64 {
    millis as f64 / 60_000.0
}
