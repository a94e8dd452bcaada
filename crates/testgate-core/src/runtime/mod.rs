// crates/testgate-core/src/runtime/mod.rs
// ============================================================================
// Module: Testgate Runtime
// Description: Orchestrator and quality-gate runtime components.
// Purpose: Drive catalogue execution and artifact validation over the seams.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The runtime holds the two components of a testgate run: the
//! [`runner::TestRunner`] orchestrator that executes the suite catalogue, and
//! the [`gate::GateEvaluator`] that scores result artifacts against fixed
//! thresholds. Both are single-threaded and strictly sequential; the only
//! bounded wait is the service-readiness poll before e2e suites.

pub mod artifacts;
pub mod gate;
pub mod prereq;
pub mod runner;
pub mod security;
pub mod thresholds;
