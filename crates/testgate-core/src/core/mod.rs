// crates/testgate-core/src/core/mod.rs
// ============================================================================
// Module: Testgate Core Data Model
// Description: Serializable records produced and consumed by the runtime.
// Purpose: Define the suite, report, and violation types shared by both runners.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! The data model covers the two artifact families testgate owns: the run
//! report written by the orchestrator and the quality-gate report written by
//! the validator. All records are immutable once created; aggregation happens
//! by constructing new values, never by mutating stored ones.

pub mod catalog;
pub mod report;
pub mod suite;
pub mod time;
pub mod violation;
