// crates/testgate-core/src/core/report.rs
// ============================================================================
// Module: Testgate Run Report
// Description: Aggregate summary and wire format for one orchestrator run.
// Purpose: Serialize suite results into the test-results.json artifact shape.
// Dependencies: crate::core::suite, serde
// ============================================================================

//! ## Overview
//! The run report is the durable artifact of an orchestrator run. Its wire
//! shape keys the `results` object by suite name while preserving catalogue
//! insertion order, so the report serializes through an explicit map codec
//! instead of a sorted map type.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use crate::core::suite::SuiteRecord;
use crate::core::suite::SuiteResult;
use crate::core::suite::SuiteStatus;

// ============================================================================
// SECTION: Run Summary
// ============================================================================

/// Aggregate counts and timing for a full orchestrator run.
///
/// # Invariants
/// - `total == passed + failed`.
/// - Computed once at report generation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of suites recorded during the run.
    pub total: usize,
    /// Number of suites that passed.
    pub passed: usize,
    /// Number of suites that failed.
    pub failed: usize,
    /// Wall-clock duration of the run in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    /// RFC3339 completion time of the run.
    pub timestamp: String,
}

// ============================================================================
// SECTION: Run Report
// ============================================================================

/// Full run report: summary plus per-suite results in catalogue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Aggregate run summary.
    pub summary: RunSummary,
    /// Per-suite results, keyed by name on the wire, in insertion order.
    #[serde(with = "ordered_results")]
    pub results: Vec<SuiteRecord>,
}

impl RunReport {
    /// Computes a report from recorded suites and run timing.
    #[must_use]
    pub fn from_records(records: Vec<SuiteRecord>, duration_ms: u64, timestamp: String) -> Self {
        let passed = records.iter().filter(|record| record.result.is_passed()).count();
        let failed = records.len() - passed;
        Self {
            summary: RunSummary {
                total: records.len(),
                passed,
                failed,
                duration_ms,
                timestamp,
            },
            results: records,
        }
    }

    /// Returns the names of failed suites in catalogue order.
    #[must_use]
    pub fn failed_suites(&self) -> Vec<&SuiteRecord> {
        self.results
            .iter()
            .filter(|record| record.result.status == SuiteStatus::Failed)
            .collect()
    }
}

// ============================================================================
// SECTION: Ordered Results Codec
// ============================================================================

/// Serde codec mapping the ordered suite list to a JSON object keyed by name.
mod ordered_results {
    use super::MapAccess;
    use super::SerializeMap;
    use super::SuiteRecord;
    use super::SuiteResult;
    use super::Visitor;
    use super::fmt;

    /// Serializes records as a name-keyed map in insertion order.
    pub fn serialize<S>(records: &[SuiteRecord], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(records.len()))?;
        for record in records {
            map.serialize_entry(&record.name, &record.result)?;
        }
        map.end()
    }

    /// Deserializes a name-keyed map back into an ordered record list.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<SuiteRecord>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        /// Visitor collecting map entries in encounter order.
        struct ResultsVisitor;

        impl<'de> Visitor<'de> for ResultsVisitor {
            type Value = Vec<SuiteRecord>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of suite names to suite results")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut records = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, result)) = access.next_entry::<String, SuiteResult>()? {
                    records.push(SuiteRecord::new(name, result));
                }
                Ok(records)
            }
        }

        deserializer.deserialize_map(ResultsVisitor)
    }
}
