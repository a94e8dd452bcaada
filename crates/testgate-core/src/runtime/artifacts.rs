// crates/testgate-core/src/runtime/artifacts.rs
// ============================================================================
// Module: Testgate Result Artifacts
// Description: Typed shapes and loader for the validator's input files.
// Purpose: Read candidate artifacts, recording missing and unparsable ones.
// Dependencies: crate::core::report, serde, serde_json
// ============================================================================

//! ## Overview
//! The validator consumes a fixed set of candidate JSON artifacts under the
//! reports directory. A missing artifact is recorded, not fatal; a found but
//! malformed artifact is recorded as a parse failure and treated as absent by
//! every subsequent check. Loading itself never fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::report::RunReport;

// ============================================================================
// SECTION: Artifact Paths
// ============================================================================

/// Run report written by the orchestrator.
pub const RUN_REPORT_FILE: &str = "test-results.json";
/// Coverage summaries, one per covered sub-tree.
pub const COVERAGE_SUMMARY_FILES: [&str; 2] =
    ["coverage/coverage-summary.json", "coverage/frontend/coverage-summary.json"];
/// Browser-automation results.
pub const PLAYWRIGHT_RESULTS_FILE: &str = "playwright-results.json";
/// Performance measurement results.
pub const PERFORMANCE_RESULTS_FILE: &str = "performance-results.json";
/// Accessibility audit results.
pub const ACCESSIBILITY_RESULTS_FILE: &str = "accessibility-results.json";
/// Quality-gate report written by the validator.
pub const QUALITY_GATE_REPORT_FILE: &str = "quality-gate-report.json";

// ============================================================================
// SECTION: Artifact Shapes
// ============================================================================

/// One coverage percentage value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoverageMetric {
    /// Covered percentage for the metric.
    pub pct: f64,
}

/// Coverage totals across the four standard metrics.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoverageTotals {
    /// Statement coverage.
    pub statements: CoverageMetric,
    /// Branch coverage.
    pub branches: CoverageMetric,
    /// Function coverage.
    pub functions: CoverageMetric,
    /// Line coverage.
    pub lines: CoverageMetric,
}

/// One coverage-summary artifact.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoverageSummary {
    /// Aggregate totals for the covered tree.
    pub total: CoverageTotals,
}

/// Performance measurement artifact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PerformanceResults {
    /// Page load times in milliseconds, keyed by page name.
    #[serde(default, rename = "loadTimes")]
    pub load_times: BTreeMap<String, u64>,
    /// API response times in milliseconds, keyed by endpoint.
    #[serde(default, rename = "apiTimes")]
    pub api_times: BTreeMap<String, u64>,
    /// Measured average frames per second, when recorded.
    #[serde(default)]
    pub fps: Option<f64>,
}

/// Accessibility audit artifact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessibilityResults {
    /// Audit score out of 100.
    pub score: f64,
    /// Individual accessibility findings; only the count is validated.
    #[serde(default)]
    pub violations: Vec<Value>,
}

// ============================================================================
// SECTION: Artifact Set
// ============================================================================

/// A found-but-unusable artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFailure {
    /// Reports-relative path of the artifact.
    pub path: String,
    /// Read or parse error description.
    pub message: String,
}

/// Everything the validator found under the reports directory.
#[derive(Debug, Default)]
pub struct ArtifactSet {
    /// Orchestrator run report, when present and well-formed.
    pub run_report: Option<RunReport>,
    /// Parsed coverage summaries, one per found coverage file.
    pub coverage: Vec<CoverageSummary>,
    /// Browser-automation results; loaded but not scored by any threshold.
    pub playwright: Option<Value>,
    /// Performance results, when present and well-formed.
    pub performance: Option<PerformanceResults>,
    /// Accessibility results, when present and well-formed.
    pub accessibility: Option<AccessibilityResults>,
    /// Candidate artifacts that were not found.
    pub missing: Vec<String>,
    /// Artifacts that were found but failed to read or parse.
    pub unreadable: Vec<ArtifactFailure>,
    /// Coverage files that were found but failed to parse; soft failures.
    pub coverage_failures: Vec<ArtifactFailure>,
}

impl ArtifactSet {
    /// Loads every candidate artifact under the reports directory.
    ///
    /// Missing and malformed artifacts are recorded on the returned set;
    /// loading never fails.
    #[must_use]
    pub fn load(reports_dir: &Path) -> Self {
        let mut missing = Vec::new();
        let mut unreadable = Vec::new();
        let mut set = Self {
            run_report: read_candidate(reports_dir, RUN_REPORT_FILE, &mut missing, &mut unreadable),
            playwright: read_candidate(
                reports_dir,
                PLAYWRIGHT_RESULTS_FILE,
                &mut missing,
                &mut unreadable,
            ),
            performance: read_candidate(
                reports_dir,
                PERFORMANCE_RESULTS_FILE,
                &mut missing,
                &mut unreadable,
            ),
            accessibility: read_candidate(
                reports_dir,
                ACCESSIBILITY_RESULTS_FILE,
                &mut missing,
                &mut unreadable,
            ),
            ..Self::default()
        };
        set.missing = missing;
        set.unreadable = unreadable;

        for relative in COVERAGE_SUMMARY_FILES {
            let path = reports_dir.join(relative);
            if !path.exists() {
                continue;
            }
            match read_json::<CoverageSummary>(&path) {
                Ok(summary) => set.coverage.push(summary),
                Err(message) => set.coverage_failures.push(ArtifactFailure {
                    path: relative.to_string(),
                    message,
                }),
            }
        }
        set
    }

    /// Number of primary artifacts that loaded successfully.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        usize::from(self.run_report.is_some())
            + usize::from(self.playwright.is_some())
            + usize::from(self.performance.is_some())
            + usize::from(self.accessibility.is_some())
    }
}

// ============================================================================
// SECTION: Reading Helpers
// ============================================================================

/// Reads one primary candidate, tracking missing and unreadable outcomes.
fn read_candidate<T: DeserializeOwned>(
    reports_dir: &Path,
    relative: &str,
    missing: &mut Vec<String>,
    unreadable: &mut Vec<ArtifactFailure>,
) -> Option<T> {
    let path = reports_dir.join(relative);
    if !path.exists() {
        missing.push(relative.to_string());
        return None;
    }
    match read_json(&path) {
        Ok(value) => Some(value),
        Err(message) => {
            unreadable.push(ArtifactFailure {
                path: relative.to_string(),
                message,
            });
            None
        }
    }
}

/// Reads and parses one JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let text = fs::read_to_string(path).map_err(|error| error.to_string())?;
    serde_json::from_str(&text).map_err(|error| error.to_string())
}
