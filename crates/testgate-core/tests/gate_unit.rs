//! Quality-gate evaluation tests for testgate-core.
// crates/testgate-core/tests/gate_unit.rs
// ============================================================================
// Module: Gate Unit Tests
// Description: Threshold checks across the five validation dimensions.
// Purpose: Pin violation messages, levels, and the gate verdict rule.
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "test code asserts on known-good values"
)]

use std::collections::BTreeMap;

use testgate_core::GateEvaluator;
use testgate_core::QualityThresholds;
use testgate_core::RunReport;
use testgate_core::SecurityCheck;
use testgate_core::SuiteRecord;
use testgate_core::SuiteResult;
use testgate_core::ViolationLevel;
use testgate_core::runtime::artifacts::AccessibilityResults;
use testgate_core::runtime::artifacts::CoverageMetric;
use testgate_core::runtime::artifacts::CoverageSummary;
use testgate_core::runtime::artifacts::CoverageTotals;
use testgate_core::runtime::artifacts::PerformanceResults;
use testgate_core::runtime::security::stock_checks;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

fn evaluator() -> GateEvaluator {
    GateEvaluator::new(QualityThresholds::default())
}

fn report_with(total: usize, failed: usize, duration_ms: u64) -> RunReport {
    let mut records = Vec::new();
    for index in 0..total {
        let result = if index < failed {
            SuiteResult::failed(100, "boom".to_string(), 1)
        } else {
            SuiteResult::passed(100, String::new())
        };
        records.push(SuiteRecord::new(format!("suite-{index}"), result));
    }
    RunReport::from_records(records, duration_ms, "2026-08-24T00:00:00Z".to_string())
}

fn coverage(statements: f64, branches: f64, functions: f64, lines: f64) -> CoverageSummary {
    CoverageSummary {
        total: CoverageTotals {
            statements: CoverageMetric {
                pct: statements,
            },
            branches: CoverageMetric {
                pct: branches,
            },
            functions: CoverageMetric {
                pct: functions,
            },
            lines: CoverageMetric {
                pct: lines,
            },
        },
    }
}

// ============================================================================
// SECTION: Execution Validation
// ============================================================================

#[test]
fn missing_run_report_is_critical() {
    let mut gate = evaluator();
    assert!(!gate.validate_execution(None));
    assert_eq!(gate.violations().len(), 1);
    assert_eq!(gate.violations()[0].level, ViolationLevel::Critical);
    assert_eq!(gate.violations()[0].message, "No test results found");
}

#[test]
fn low_suite_count_is_a_warning() {
    let mut gate = evaluator();
    assert!(gate.validate_execution(Some(&report_with(4, 0, 1_000))));
    assert_eq!(gate.violations().len(), 1);
    assert_eq!(gate.violations()[0].level, ViolationLevel::Warning);
    assert_eq!(gate.violations()[0].message, "Low test count: 4 (expected > 10)");
}

#[test]
fn high_failure_rate_is_an_error() {
    let mut gate = evaluator();
    assert!(!gate.validate_execution(Some(&report_with(20, 2, 1_000))));
    let messages: Vec<&str> =
        gate.violations().iter().map(|violation| violation.message.as_str()).collect();
    assert_eq!(messages, ["High failure rate: 10.0% (expected < 5%)"]);
    assert_eq!(gate.violations()[0].level, ViolationLevel::Error);
}

#[test]
fn failure_rate_at_threshold_does_not_violate() {
    let mut gate = evaluator();
    // 1 of 20 is exactly 5 percent, which is not above the bound.
    assert!(!gate.validate_execution(Some(&report_with(20, 1, 1_000))));
    assert!(gate.violations().is_empty());
}

#[test]
fn long_duration_is_a_warning() {
    let mut gate = evaluator();
    // 45 minutes.
    assert!(gate.validate_execution(Some(&report_with(20, 0, 45 * 60 * 1_000))));
    assert_eq!(gate.violations().len(), 1);
    assert_eq!(gate.violations()[0].level, ViolationLevel::Warning);
    assert_eq!(gate.violations()[0].message, "Long test duration: 45.0min (expected < 30min)");
}

#[test]
fn empty_run_report_warns_without_dividing_by_zero() {
    let mut gate = evaluator();
    assert!(gate.validate_execution(Some(&report_with(0, 0, 0))));
    assert_eq!(gate.violations().len(), 1);
    assert_eq!(gate.violations()[0].message, "Low test count: 0 (expected > 10)");
}

// ============================================================================
// SECTION: Coverage Validation
// ============================================================================

#[test]
fn no_coverage_data_is_a_warning() {
    let mut gate = evaluator();
    assert!(!gate.validate_coverage(&[]));
    assert_eq!(gate.violations().len(), 1);
    assert_eq!(gate.violations()[0].level, ViolationLevel::Warning);
    assert_eq!(gate.violations()[0].message, "No coverage data found");
}

#[test]
fn single_metric_below_threshold_yields_exactly_one_violation() {
    let mut gate = evaluator();
    assert!(!gate.validate_coverage(&[coverage(65.0, 80.0, 75.0, 90.0)]));
    assert_eq!(gate.violations().len(), 1);
    assert_eq!(gate.violations()[0].level, ViolationLevel::Error);
    assert_eq!(gate.violations()[0].message, "Statements coverage 65.0% < 70%");
}

#[test]
fn coverage_uses_unweighted_mean_across_files() {
    let mut gate = evaluator();
    // Means: statements 70, branches 70, functions 70, lines 69.5.
    let summaries =
        [coverage(60.0, 80.0, 70.0, 69.0), coverage(80.0, 60.0, 70.0, 70.0)];
    assert!(!gate.validate_coverage(&summaries));
    assert_eq!(gate.violations().len(), 1);
    assert_eq!(gate.violations()[0].message, "Lines coverage 69.5% < 70%");
}

#[test]
fn all_metrics_at_threshold_pass() {
    let mut gate = evaluator();
    assert!(gate.validate_coverage(&[coverage(70.0, 70.0, 70.0, 70.0)]));
    assert!(gate.violations().is_empty());
}

// ============================================================================
// SECTION: Performance Validation
// ============================================================================

#[test]
fn missing_performance_results_is_a_warning() {
    let mut gate = evaluator();
    assert!(!gate.validate_performance(None));
    assert_eq!(gate.violations().len(), 1);
    assert_eq!(gate.violations()[0].level, ViolationLevel::Warning);
    assert_eq!(gate.violations()[0].message, "No performance results found");
}

#[test]
fn only_offending_pages_violate() {
    let mut gate = evaluator();
    let mut load_times = BTreeMap::new();
    load_times.insert("home".to_string(), 2_500);
    load_times.insert("dashboard".to_string(), 3_500);
    let results = PerformanceResults {
        load_times,
        api_times: BTreeMap::new(),
        fps: Some(45.0),
    };
    assert!(!gate.validate_performance(Some(&results)));
    assert_eq!(gate.violations().len(), 1);
    assert_eq!(gate.violations()[0].message, "dashboard load time 3500ms > 3000ms");
}

#[test]
fn slow_endpoint_and_low_fps_each_violate() {
    let mut gate = evaluator();
    let mut api_times = BTreeMap::new();
    api_times.insert("/api/users".to_string(), 1_500);
    let results = PerformanceResults {
        load_times: BTreeMap::new(),
        api_times,
        fps: Some(20.0),
    };
    assert!(!gate.validate_performance(Some(&results)));
    let messages: Vec<&str> =
        gate.violations().iter().map(|violation| violation.message.as_str()).collect();
    assert_eq!(messages, ["/api/users response time 1500ms > 1000ms", "FPS 20 < 30"]);
}

#[test]
fn absent_fps_is_not_checked() {
    let mut gate = evaluator();
    let results = PerformanceResults {
        load_times: BTreeMap::new(),
        api_times: BTreeMap::new(),
        fps: None,
    };
    assert!(gate.validate_performance(Some(&results)));
    assert!(gate.violations().is_empty());
}

// ============================================================================
// SECTION: Accessibility Validation
// ============================================================================

#[test]
fn missing_accessibility_results_is_a_warning_never_an_error() {
    let mut gate = evaluator();
    assert!(!gate.validate_accessibility(None));
    assert_eq!(gate.violations().len(), 1);
    assert_eq!(gate.violations()[0].level, ViolationLevel::Warning);
    assert_eq!(gate.violations()[0].message, "No accessibility results found");
    // Warnings alone never fail the gate.
    assert!(gate.generate_report().passed);
}

#[test]
fn low_score_and_excess_violations_are_independent_errors() {
    let mut gate = evaluator();
    let results = AccessibilityResults {
        score: 85.0,
        violations: vec![serde_json::Value::Null; 7],
    };
    assert!(!gate.validate_accessibility(Some(&results)));
    let messages: Vec<&str> =
        gate.violations().iter().map(|violation| violation.message.as_str()).collect();
    assert_eq!(messages, ["Accessibility score 85 < 90", "7 accessibility violations > 5"]);
}

// ============================================================================
// SECTION: Security And Verdict
// ============================================================================

#[test]
fn stock_security_checks_all_pass() {
    let mut gate = evaluator();
    assert!(gate.validate_security(&stock_checks()));
    assert!(gate.violations().is_empty());
}

#[test]
fn failing_security_check_is_an_error_naming_the_check() {
    struct AlwaysFails;
    impl SecurityCheck for AlwaysFails {
        fn name(&self) -> &str {
            "Dependencies"
        }
        fn passes(&self) -> bool {
            false
        }
    }
    let mut gate = evaluator();
    let checks: Vec<Box<dyn SecurityCheck>> = vec![Box::new(AlwaysFails)];
    assert!(!gate.validate_security(&checks));
    assert_eq!(gate.violations()[0].level, ViolationLevel::Error);
    assert_eq!(gate.violations()[0].message, "Security check failed: Dependencies");
}

#[test]
fn gate_passes_iff_no_critical_or_error() {
    let mut gate = evaluator();
    let _ = gate.validate_coverage(&[]);
    let _ = gate.validate_performance(None);
    let _ = gate.validate_accessibility(None);
    let report = gate.generate_report();
    assert!(report.passed);
    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.warnings, 3);
    assert_eq!(report.summary.critical, 0);
    assert_eq!(report.summary.errors, 0);
}

#[test]
fn one_error_fails_the_gate() {
    let mut gate = evaluator();
    let _ = gate.validate_coverage(&[coverage(10.0, 10.0, 10.0, 10.0)]);
    let report = gate.generate_report();
    assert!(!report.passed);
    assert_eq!(report.summary.errors, 4);
}

#[test]
fn checks_never_short_circuit_each_other() {
    let mut gate = evaluator();
    let _ = gate.validate_execution(None);
    let _ = gate.validate_coverage(&[]);
    let _ = gate.validate_performance(None);
    let _ = gate.validate_accessibility(None);
    let _ = gate.validate_security(&stock_checks());
    // One critical plus three warnings, all recorded in validation order.
    let levels: Vec<ViolationLevel> =
        gate.violations().iter().map(|violation| violation.level).collect();
    assert_eq!(
        levels,
        [
            ViolationLevel::Critical,
            ViolationLevel::Warning,
            ViolationLevel::Warning,
            ViolationLevel::Warning
        ]
    );
    assert!(!gate.generate_report().passed);
}
