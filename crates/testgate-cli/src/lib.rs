// crates/testgate-cli/src/lib.rs
// ============================================================================
// Module: Testgate CLI Library
// Description: Production implementations of the core interface seams.
// Purpose: Expose console, process, and probe backends for the binary and tests.
// Dependencies: testgate-core
// ============================================================================

//! ## Overview
//! The CLI crate owns every side effect: console output, process spawning,
//! and TCP readiness probing. The binary in `main.rs` wires these backends
//! into the core runtime; integration tests exercise them directly.

pub mod console;
pub mod executor;
pub mod probe;
