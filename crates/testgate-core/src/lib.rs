// crates/testgate-core/src/lib.rs
// ============================================================================
// Module: Testgate Core
// Description: Data model, interfaces, and runtime logic for test orchestration.
// Purpose: Provide backend-agnostic orchestration and quality-gate evaluation.
// Dependencies: serde, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! Testgate runs a phased catalogue of external test suites and evaluates the
//! produced result artifacts against fixed quality thresholds. This crate
//! holds the data model, the seams toward the operating system (process
//! execution, service probing, console logging), and the two runtime
//! components: the [`runtime::TestRunner`] orchestrator and the
//! [`runtime::GateEvaluator`] quality gate.
//!
//! Side effects are pushed behind the [`interfaces`] traits so the runtime
//! logic stays deterministic and unit-testable without spawning processes.

pub mod core;
pub mod interfaces;
pub mod runtime;

pub use crate::core::catalog::PhaseKind;
pub use crate::core::catalog::PhasePlan;
pub use crate::core::catalog::ReadinessWait;
pub use crate::core::catalog::ServiceEndpoint;
pub use crate::core::catalog::SuiteSpec;
pub use crate::core::report::RunReport;
pub use crate::core::report::RunSummary;
pub use crate::core::suite::SuiteRecord;
pub use crate::core::suite::SuiteResult;
pub use crate::core::suite::SuiteStatus;
pub use crate::core::violation::GateSummary;
pub use crate::core::violation::QualityGateReport;
pub use crate::core::violation::Violation;
pub use crate::core::violation::ViolationLevel;
pub use crate::interfaces::CommandOutput;
pub use crate::interfaces::CommandRequest;
pub use crate::interfaces::ExecError;
pub use crate::interfaces::LogLevel;
pub use crate::interfaces::RunLogger;
pub use crate::interfaces::SecurityCheck;
pub use crate::interfaces::ServiceProbe;
pub use crate::interfaces::SuiteExecutor;
pub use crate::runtime::artifacts::ArtifactSet;
pub use crate::runtime::gate::GateEvaluator;
pub use crate::runtime::runner::RunnerError;
pub use crate::runtime::runner::RunnerOptions;
pub use crate::runtime::runner::TestRunner;
pub use crate::runtime::thresholds::QualityThresholds;
