// crates/testgate-cli/src/probe.rs
// ============================================================================
// Module: Testgate Service Probe
// Description: TCP connect readiness probe for dependent services.
// Purpose: Implement the ServiceProbe seam over bounded socket connects.
// Dependencies: std::net, testgate-core
// ============================================================================

//! ## Overview
//! One probe attempt is one bounded TCP connect. The polling loop and its
//! overall budget live in the core runner; this type only answers whether
//! the endpoint currently accepts connections.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::TcpStream;
use std::net::ToSocketAddrs;
use std::time::Duration;

use testgate_core::ServiceEndpoint;
use testgate_core::ServiceProbe;

// ============================================================================
// SECTION: TCP Probe
// ============================================================================

/// Per-attempt connect budget.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Probe backed by `TcpStream::connect_timeout`.
#[derive(Debug, Clone, Copy)]
pub struct TcpServiceProbe {
    /// Budget for one connect attempt.
    connect_timeout: Duration,
}

impl Default for TcpServiceProbe {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl TcpServiceProbe {
    /// Creates a probe with an explicit per-attempt connect budget.
    #[must_use]
    pub const fn new(connect_timeout: Duration) -> Self {
        Self {
            connect_timeout,
        }
    }
}

impl ServiceProbe for TcpServiceProbe {
    fn is_ready(&self, endpoint: &ServiceEndpoint) -> bool {
        let Ok(addrs) = (endpoint.host.as_str(), endpoint.port).to_socket_addrs() else {
            return false;
        };
        for addr in addrs {
            if TcpStream::connect_timeout(&addr, self.connect_timeout).is_ok() {
                return true;
            }
        }
        false
    }
}
