// crates/testgate-core/src/core/catalog.rs
// ============================================================================
// Module: Testgate Catalogue Descriptors
// Description: Declarative suite, phase, and service descriptors.
// Purpose: Describe what the orchestrator runs without embedding control flow.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The catalogue is a declarative ordered list of phases, each holding an
//! ordered list of suite descriptors. The runner consumes descriptors
//! sequentially; re-targeting execution (for example bounded parallelism)
//! would only touch the consumer, not these types.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Suite Descriptors
// ============================================================================

/// Descriptor for one external test-suite invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteSpec {
    /// Suite name, unique across the whole catalogue.
    pub name: String,
    /// Executable to invoke.
    pub command: String,
    /// Argument list passed to the executable.
    #[serde(default)]
    pub args: Vec<String>,
    /// Optional working-directory override for the invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
}

// ============================================================================
// SECTION: Phase Descriptors
// ============================================================================

/// Kind of a test phase; `E2e` phases gate on service readiness first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    /// Unit-test suites.
    Unit,
    /// Integration-test suites.
    Integration,
    /// Browser-automation suites requiring running services.
    E2e,
    /// Performance, security, and accessibility suites.
    Special,
}

/// One ordered group of suites run as a stage of a full test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasePlan {
    /// Display name of the phase.
    pub name: String,
    /// Phase kind.
    pub kind: PhaseKind,
    /// Ordered suite descriptors for this phase.
    pub suites: Vec<SuiteSpec>,
}

// ============================================================================
// SECTION: Service Readiness
// ============================================================================

/// Network endpoint of a service the e2e phase depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// Display name of the service.
    pub name: String,
    /// Host the service listens on.
    pub host: String,
    /// TCP port the service listens on.
    pub port: u16,
}

/// Bounds for the readiness poll that precedes e2e suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessWait {
    /// Delay between probe attempts in milliseconds.
    pub poll_interval_ms: u64,
    /// Overall per-service budget in milliseconds before the phase fails.
    pub timeout_ms: u64,
}

impl Default for ReadinessWait {
    fn default() -> Self {
        Self {
            poll_interval_ms: 500,
            timeout_ms: 60_000,
        }
    }
}
