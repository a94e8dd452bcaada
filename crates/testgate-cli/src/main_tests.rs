// crates/testgate-cli/src/main_tests.rs
// ============================================================================
// Module: Testgate CLI Unit Tests
// Description: Argument parsing and formatting helper tests for the binary.
// Purpose: Pin CLI surface and summary formatting behavior.
// Dependencies: clap, testgate-config, testgate-core
// ============================================================================

//! ## Overview
//! Parses representative command lines through the real clap definition and
//! checks the pure helpers used by the summary printers.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "test code asserts on known-good values"
)]

use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use testgate_config::TestgateConfig;
use testgate_core::ViolationLevel;

use super::Cli;
use super::Commands;
use super::format_seconds;
use super::level_icon;
use super::level_label;
use super::resolve_reports_dir;
use super::truncate;

#[test]
fn run_command_parses_flags() {
    let cli = Cli::parse_from([
        "testgate",
        "run",
        "--verbose",
        "--fail-fast",
        "--config",
        "custom.toml",
        "--reports-dir",
        "out",
    ]);
    let Commands::Run(command) = cli.command else {
        panic!("expected run subcommand");
    };
    assert!(command.verbose);
    assert!(command.fail_fast);
    assert_eq!(command.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(command.reports_dir, Some(PathBuf::from("out")));
}

#[test]
fn run_command_defaults_are_off() {
    let cli = Cli::parse_from(["testgate", "run"]);
    let Commands::Run(command) = cli.command else {
        panic!("expected run subcommand");
    };
    assert!(!command.verbose);
    assert!(!command.fail_fast);
    assert!(command.config.is_none());
    assert!(command.reports_dir.is_none());
}

#[test]
fn validate_command_parses() {
    let cli = Cli::parse_from(["testgate", "validate", "--reports-dir", "artifacts"]);
    let Commands::Validate(command) = cli.command else {
        panic!("expected validate subcommand");
    };
    assert_eq!(command.reports_dir, Some(PathBuf::from("artifacts")));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["testgate", "deploy"]).is_err());
}

#[test]
fn reports_dir_defaults_under_project_dir() {
    let config = TestgateConfig::default();
    let resolved = resolve_reports_dir(&config, None);
    assert_eq!(resolved, Path::new(".").join("reports"));
}

#[test]
fn reports_dir_override_wins() {
    let config = TestgateConfig::default();
    let resolved = resolve_reports_dir(&config, Some(Path::new("/tmp/out")));
    assert_eq!(resolved, PathBuf::from("/tmp/out"));
}

#[test]
fn format_seconds_renders_two_decimals() {
    assert_eq!(format_seconds(0), "0.00s");
    assert_eq!(format_seconds(50), "0.05s");
    assert_eq!(format_seconds(1_234), "1.23s");
    assert_eq!(format_seconds(90_000), "90.00s");
}

#[test]
fn truncate_limits_length() {
    assert_eq!(truncate("short", 100), "short");
    let long = "x".repeat(250);
    assert_eq!(truncate(&long, 100).len(), 100);
}

#[test]
fn level_markers_match_report_styling() {
    assert_eq!(level_icon(ViolationLevel::Critical), "🚨");
    assert_eq!(level_icon(ViolationLevel::Error), "❌");
    assert_eq!(level_icon(ViolationLevel::Warning), "⚠️");
    assert_eq!(level_label(ViolationLevel::Critical), "CRITICAL");
    assert_eq!(level_label(ViolationLevel::Error), "ERROR");
    assert_eq!(level_label(ViolationLevel::Warning), "WARNING");
}
