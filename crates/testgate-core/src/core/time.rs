// crates/testgate-core/src/core/time.rs
// ============================================================================
// Module: Testgate Time Helpers
// Description: Wall-clock timestamp formatting for reports and log lines.
// Purpose: Provide a single RFC3339 source so artifacts stay uniform.
// Dependencies: time
// ============================================================================

//! ## Overview
//! Reports and violations carry RFC3339 timestamps. Formatting failures fall
//! back to unix milliseconds rather than aborting a run over a log line.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Instant;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Timestamp Helpers
// ============================================================================

/// Returns the current UTC time as an RFC3339 string.
#[must_use]
pub fn rfc3339_now() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339).map_or_else(
        |_| {
            let millis = now.unix_timestamp_nanos() / 1_000_000;
            millis.to_string()
        },
        |formatted| formatted,
    )
}

/// Returns the elapsed wall-clock milliseconds since `start`.
#[must_use]
pub fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
