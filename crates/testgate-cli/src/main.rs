// crates/testgate-cli/src/main.rs
// ============================================================================
// Module: Testgate CLI Entry Point
// Description: Command dispatcher for the orchestrator and quality gate.
// Purpose: Wire config, executor, probe, and logger into the core runtime.
// Dependencies: clap, serde_json, testgate-config, testgate-core, thiserror
// ============================================================================

//! ## Overview
//! `testgate run` executes the phased suite catalogue and writes the run
//! report; `testgate validate` scores previously produced artifacts against
//! the quality-gate thresholds. Both terminate with exit code 0 on success
//! and 1 on any failure, fatal error, or failed gate.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use serde::Serialize;
use serde_json as json;
use testgate_cli::console::ConsoleLogger;
use testgate_cli::console::write_stderr_line;
use testgate_cli::console::write_stdout_line;
use testgate_cli::executor::ProcessExecutor;
use testgate_cli::probe::TcpServiceProbe;
use testgate_config::TestgateConfig;
use testgate_core::GateEvaluator;
use testgate_core::PhaseKind;
use testgate_core::QualityGateReport;
use testgate_core::RunLogger;
use testgate_core::RunReport;
use testgate_core::RunnerOptions;
use testgate_core::TestRunner;
use testgate_core::ViolationLevel;
use testgate_core::runtime::artifacts::ArtifactSet;
use testgate_core::runtime::artifacts::QUALITY_GATE_REPORT_FILE;
use testgate_core::runtime::artifacts::RUN_REPORT_FILE;
use testgate_core::runtime::prereq::PrereqSettings;
use testgate_core::runtime::prereq::check_prerequisites;
use testgate_core::runtime::security::stock_checks;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "testgate", version, about = "Test orchestration and quality gate")]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the phased test-suite catalogue and write the run report.
    Run(RunCommand),
    /// Validate result artifacts against the quality-gate thresholds.
    Validate(ValidateCommand),
}

/// Arguments for the orchestrator run.
#[derive(Args, Debug)]
struct RunCommand {
    /// Optional config file path (defaults to testgate.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Stream child output to the terminal instead of capturing it.
    #[arg(long, action = ArgAction::SetTrue)]
    verbose: bool,
    /// Abort the whole catalogue on the first suite failure.
    #[arg(long = "fail-fast", action = ArgAction::SetTrue)]
    fail_fast: bool,
    /// Reports directory override.
    #[arg(long, value_name = "DIR")]
    reports_dir: Option<PathBuf>,
}

/// Arguments for quality-gate validation.
#[derive(Args, Debug)]
struct ValidateCommand {
    /// Optional config file path (defaults to testgate.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Reports directory override.
    #[arg(long, value_name = "DIR")]
    reports_dir: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => emit_error(&error.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(command) => command_run(&command),
        Commands::Validate(command) => command_validate(&command),
    }
}

// ============================================================================
// SECTION: Run Command
// ============================================================================

/// Executes the `run` command.
fn command_run(command: &RunCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let reports_dir = resolve_reports_dir(&config, command.reports_dir.as_deref());
    let logger = ConsoleLogger;
    logger.info("Starting platform test suite");

    let executor = ProcessExecutor;
    check_prerequisites(&executor, &logger, &prereq_settings(&config))
        .map_err(|error| CliError::new(error.to_string()))?;

    let options = RunnerOptions {
        verbose: command.verbose,
        fail_fast: command.fail_fast,
    };
    let mut runner = TestRunner::new(&executor, &logger, options);
    let probe = TcpServiceProbe::default();
    let mut services_ready = true;

    for phase in &config.phases {
        if phase.kind == PhaseKind::E2e && !config.services.is_empty() {
            logger.info("Checking service readiness for E2E tests...");
            if let Err(error) = runner.await_services(&probe, &config.services, &config.readiness)
            {
                logger.error(&error.to_string());
                logger.error(&format!("Skipping {}", phase.name));
                services_ready = false;
                continue;
            }
        }
        runner.run_phase(phase).map_err(|error| CliError::new(error.to_string()))?;
    }

    let report = runner.generate_report();
    write_json_report(&reports_dir, RUN_REPORT_FILE, &report)?;
    print_run_summary(&report, command.verbose)?;

    if report.summary.failed == 0 && services_ready {
        logger.success("All tests completed successfully!");
        Ok(ExitCode::SUCCESS)
    } else {
        logger.error("Some tests failed. Check the report for details.");
        Ok(ExitCode::FAILURE)
    }
}

/// Prints the formatted run summary.
fn print_run_summary(report: &RunReport, verbose: bool) -> CliResult<()> {
    let rule = "=".repeat(60);
    out("")?;
    out(&rule)?;
    out("TESTGATE RUN SUMMARY")?;
    out(&rule)?;
    out(&format!("Total Tests: {}", report.summary.total))?;
    out(&format!("Passed: {} ✅", report.summary.passed))?;
    out(&format!("Failed: {} ❌", report.summary.failed))?;
    out(&format!("Duration: {}", format_seconds(report.summary.duration_ms)))?;
    out(&rule)?;

    let failed = report.failed_suites();
    if !failed.is_empty() {
        out("")?;
        out("FAILED TESTS:")?;
        for record in failed {
            out(&format!("❌ {} ({}ms)", record.name, record.result.duration_ms))?;
            if verbose && let Some(error) = &record.result.error {
                out(&format!("   Error: {}...", truncate(error, 100)))?;
            }
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Validate Command
// ============================================================================

/// Executes the `validate` command.
fn command_validate(command: &ValidateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let reports_dir = resolve_reports_dir(&config, command.reports_dir.as_deref());
    let logger = ConsoleLogger;
    logger.info("Starting test results validation");

    logger.info("Loading test results...");
    let artifacts = ArtifactSet::load(&reports_dir);
    for relative in &artifacts.missing {
        logger.warning(&format!("Result file not found: {relative}"));
    }
    for failure in &artifacts.unreadable {
        logger.error(&format!("Failed to parse {}: {}", failure.path, failure.message));
    }
    for failure in &artifacts.coverage_failures {
        logger.warning(&format!(
            "Failed to parse coverage file {}: {}",
            failure.path, failure.message
        ));
    }
    logger.info(&format!("Loaded {} result files", artifacts.loaded_count()));

    // The five checks are independent and all always execute.
    let mut evaluator = GateEvaluator::new(config.thresholds);
    logger.info("Validating test execution...");
    evaluator.validate_execution(artifacts.run_report.as_ref());
    logger.info("Validating code coverage...");
    evaluator.validate_coverage(&artifacts.coverage);
    logger.info("Validating performance...");
    evaluator.validate_performance(artifacts.performance.as_ref());
    logger.info("Validating accessibility...");
    evaluator.validate_accessibility(artifacts.accessibility.as_ref());
    logger.info("Validating security...");
    evaluator.validate_security(&stock_checks());

    let report = evaluator.generate_report();
    write_json_report(&reports_dir, QUALITY_GATE_REPORT_FILE, &report)?;
    print_gate_summary(&report)?;

    if report.passed {
        logger.success("Quality gate passed! Ready for deployment.");
        Ok(ExitCode::SUCCESS)
    } else {
        logger.error("Quality gate failed. Please fix issues before deployment.");
        Ok(ExitCode::FAILURE)
    }
}

/// Prints the formatted quality-gate report.
fn print_gate_summary(report: &QualityGateReport) -> CliResult<()> {
    let rule = "=".repeat(60);
    out("")?;
    out(&rule)?;
    out("QUALITY GATE REPORT")?;
    out(&rule)?;
    let status = if report.passed { "✅ PASSED" } else { "❌ FAILED" };
    out(&format!("Status: {status}"))?;
    out(&format!("Total Issues: {}", report.summary.total))?;
    out(&format!("Critical: {}", report.summary.critical))?;
    out(&format!("Errors: {}", report.summary.errors))?;
    out(&format!("Warnings: {}", report.summary.warnings))?;

    if !report.violations.is_empty() {
        out("")?;
        out("ISSUES:")?;
        for (index, violation) in report.violations.iter().enumerate() {
            out(&format!(
                "{}. {} [{}] {}",
                index + 1,
                level_icon(violation.level),
                level_label(violation.level),
                violation.message
            ))?;
        }
    }
    out(&rule)?;
    Ok(())
}

/// Returns the icon used for a violation level in the itemized list.
const fn level_icon(level: ViolationLevel) -> &'static str {
    match level {
        ViolationLevel::Critical => "🚨",
        ViolationLevel::Error => "❌",
        ViolationLevel::Warning => "⚠️",
    }
}

/// Returns the uppercase label for a violation level.
const fn level_label(level: ViolationLevel) -> &'static str {
    match level {
        ViolationLevel::Critical => "CRITICAL",
        ViolationLevel::Error => "ERROR",
        ViolationLevel::Warning => "WARNING",
    }
}

// ============================================================================
// SECTION: Shared Helpers
// ============================================================================

/// Loads and validates the configuration.
fn load_config(path: Option<&Path>) -> CliResult<TestgateConfig> {
    TestgateConfig::load(path).map_err(|error| CliError::new(error.to_string()))
}

/// Resolves the effective reports directory.
fn resolve_reports_dir(config: &TestgateConfig, override_dir: Option<&Path>) -> PathBuf {
    override_dir.map_or_else(
        || config.runner.project_dir.join(&config.runner.reports_dir),
        Path::to_path_buf,
    )
}

/// Builds prerequisite settings from the loaded configuration.
fn prereq_settings(config: &TestgateConfig) -> PrereqSettings {
    let runner = &config.runner;
    PrereqSettings {
        project_dir: runner.project_dir.clone(),
        min_runtime_major: runner.min_runtime_major,
        version_command: runner.version_command.clone(),
        version_args: runner.version_args.clone(),
        install_command: runner.install_command.clone(),
        install_args: runner.install_args.clone(),
        lock_marker: runner.lock_marker.clone(),
        env_file: runner.env_file.clone(),
        env_template: runner.env_template.clone(),
    }
}

/// Serializes a report to pretty JSON under the reports directory.
fn write_json_report<T: Serialize>(
    reports_dir: &Path,
    file_name: &str,
    report: &T,
) -> CliResult<()> {
    fs::create_dir_all(reports_dir).map_err(|error| {
        CliError::new(format!(
            "failed to create reports directory '{}': {error}",
            reports_dir.display()
        ))
    })?;
    let rendered = json::to_string_pretty(report)
        .map_err(|error| CliError::new(format!("failed to serialize {file_name}: {error}")))?;
    let path = reports_dir.join(file_name);
    fs::write(&path, rendered).map_err(|error| {
        CliError::new(format!("failed to write '{}': {error}", path.display()))
    })?;
    Ok(())
}

/// Formats milliseconds as seconds with two decimals, without float math.
fn format_seconds(millis: u64) -> String {
    format!("{}.{:02}s", millis / 1_000, (millis % 1_000) / 10)
}

/// Truncates a message to at most `limit` characters.
fn truncate(message: &str, limit: usize) -> String {
    message.chars().take(limit).collect()
}

/// Writes one line to stdout, mapping failures to CLI errors.
fn out(message: &str) -> CliResult<()> {
    write_stdout_line(message)
        .map_err(|error| CliError::new(format!("failed to write to stdout: {error}")))
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
