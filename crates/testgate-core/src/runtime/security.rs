// crates/testgate-core/src/runtime/security.rs
// ============================================================================
// Module: Testgate Security Checks
// Description: Stock security verifications consulted by the quality gate.
// Purpose: Provide the default check set behind the SecurityCheck seam.
// Dependencies: crate::interfaces
// ============================================================================

//! ## Overview
//! The stock checks are placeholders with fixed verdicts: no hardcoded
//! secrets, HTTPS in use, no known dependency vulnerabilities. They preserve
//! the gate's observable behavior while leaving the [`SecurityCheck`] seam
//! open for real scanners.
//!
//! TODO: replace `DependencyAuditCheck` with a real `npm audit --json`
//! invocation once the audit output shape is pinned for CI.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::interfaces::SecurityCheck;

// ============================================================================
// SECTION: Stock Checks
// ============================================================================

/// Scans for hardcoded secrets; placeholder reporting none found.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardcodedSecretsCheck;

impl SecurityCheck for HardcodedSecretsCheck {
    fn name(&self) -> &str {
        "Environment Variables"
    }

    fn passes(&self) -> bool {
        true
    }
}

/// Confirms HTTPS usage; placeholder reporting correct usage.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpsUsageCheck;

impl SecurityCheck for HttpsUsageCheck {
    fn name(&self) -> &str {
        "HTTPS Usage"
    }

    fn passes(&self) -> bool {
        true
    }
}

/// Audits dependencies for known vulnerabilities; placeholder reporting none.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyAuditCheck;

impl SecurityCheck for DependencyAuditCheck {
    fn name(&self) -> &str {
        "Dependencies"
    }

    fn passes(&self) -> bool {
        true
    }
}

/// Returns the default security check set in evaluation order.
#[must_use]
pub fn stock_checks() -> Vec<Box<dyn SecurityCheck>> {
    vec![
        Box::new(HardcodedSecretsCheck),
        Box::new(HttpsUsageCheck),
        Box::new(DependencyAuditCheck),
    ]
}
