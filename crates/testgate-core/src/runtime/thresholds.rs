// crates/testgate-core/src/runtime/thresholds.rs
// ============================================================================
// Module: Testgate Quality Thresholds
// Description: Fixed threshold configuration for the quality gate.
// Purpose: Hold the static bounds every validation dimension is scored against.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Thresholds are static configuration, not derived at runtime. The defaults
//! reproduce the platform gate: 70% on every coverage metric, 3000ms page
//! loads, 1000ms API responses, 30 FPS, accessibility score 90 with at most
//! five findings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Coverage Thresholds
// ============================================================================

/// Minimum coverage percentages per metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageThresholds {
    /// Minimum statements coverage percentage.
    pub statements: f64,
    /// Minimum branches coverage percentage.
    pub branches: f64,
    /// Minimum functions coverage percentage.
    pub functions: f64,
    /// Minimum lines coverage percentage.
    pub lines: f64,
}

impl Default for CoverageThresholds {
    fn default() -> Self {
        Self {
            statements: 70.0,
            branches: 70.0,
            functions: 70.0,
            lines: 70.0,
        }
    }
}

// ============================================================================
// SECTION: Performance Thresholds
// ============================================================================

/// Performance bounds for page loads, API responses, and frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceThresholds {
    /// Maximum accepted page load time in milliseconds.
    pub max_load_time_ms: u64,
    /// Maximum accepted API response time in milliseconds.
    pub max_api_response_time_ms: u64,
    /// Minimum accepted frames per second.
    pub min_fps: f64,
}

impl Default for PerformanceThresholds {
    fn default() -> Self {
        Self {
            max_load_time_ms: 3_000,
            max_api_response_time_ms: 1_000,
            min_fps: 30.0,
        }
    }
}

// ============================================================================
// SECTION: Accessibility Thresholds
// ============================================================================

/// Accessibility score floor and finding ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityThresholds {
    /// Minimum accepted accessibility score out of 100.
    pub min_score: f64,
    /// Maximum accepted number of accessibility findings.
    pub max_violations: usize,
}

impl Default for AccessibilityThresholds {
    fn default() -> Self {
        Self {
            min_score: 90.0,
            max_violations: 5,
        }
    }
}

// ============================================================================
// SECTION: Combined Thresholds
// ============================================================================

/// Full threshold set consumed by the gate evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    /// Coverage minimums.
    pub coverage: CoverageThresholds,
    /// Performance bounds.
    pub performance: PerformanceThresholds,
    /// Accessibility bounds.
    pub accessibility: AccessibilityThresholds,
}
