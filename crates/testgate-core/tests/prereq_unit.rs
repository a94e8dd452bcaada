//! Prerequisite check tests for testgate-core.
// crates/testgate-core/tests/prereq_unit.rs
// ============================================================================
// Module: Prerequisite Unit Tests
// Description: Runtime version gating, dependency install, env materialization.
// Purpose: Pin the pre-run checks over scripted executors and temp dirs.
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "test code asserts on known-good values"
)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;

use tempfile::TempDir;
use testgate_core::CommandOutput;
use testgate_core::CommandRequest;
use testgate_core::ExecError;
use testgate_core::LogLevel;
use testgate_core::RunLogger;
use testgate_core::RunnerError;
use testgate_core::SuiteExecutor;
use testgate_core::runtime::prereq::PrereqSettings;
use testgate_core::runtime::prereq::check_prerequisites;
use testgate_core::runtime::prereq::parse_major;

// ============================================================================
// SECTION: Test Doubles
// ============================================================================

struct ScriptedExecutor {
    outcomes: RefCell<VecDeque<Result<CommandOutput, ExecError>>>,
    seen: RefCell<Vec<String>>,
}

impl ScriptedExecutor {
    fn new(outcomes: Vec<Result<CommandOutput, ExecError>>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl SuiteExecutor for ScriptedExecutor {
    fn run(&self, request: &CommandRequest) -> Result<CommandOutput, ExecError> {
        self.seen.borrow_mut().push(request.command.clone());
        self.outcomes.borrow_mut().pop_front().expect("unscripted executor invocation")
    }
}

struct SilentLogger;

impl RunLogger for SilentLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

fn version_output(version: &str) -> Result<CommandOutput, ExecError> {
    Ok(CommandOutput {
        stdout: format!("{version}\n"),
        stderr: String::new(),
    })
}

fn settings(dir: &TempDir) -> PrereqSettings {
    PrereqSettings {
        project_dir: dir.path().to_path_buf(),
        min_runtime_major: 18,
        version_command: "node".to_string(),
        version_args: vec!["--version".to_string()],
        install_command: "npm".to_string(),
        install_args: vec!["install".to_string()],
        lock_marker: "node_modules".to_string(),
        env_file: ".env.test".to_string(),
        env_template: ".env.test.example".to_string(),
    }
}

/// Lays out a project dir that needs neither install nor env creation.
fn satisfied_project(dir: &TempDir) {
    fs::create_dir_all(dir.path().join("node_modules")).expect("create lock marker");
    fs::write(dir.path().join(".env.test"), "KEY=value\n").expect("write env file");
}

// ============================================================================
// SECTION: Version Gating
// ============================================================================

#[test]
fn satisfied_environment_only_queries_the_version() {
    let dir = TempDir::new().expect("temp dir");
    satisfied_project(&dir);
    let executor = ScriptedExecutor::new(vec![version_output("v18.17.0")]);
    check_prerequisites(&executor, &SilentLogger, &settings(&dir))
        .expect("prerequisites pass");
    assert_eq!(*executor.seen.borrow(), ["node"]);
}

#[test]
fn old_runtime_version_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    satisfied_project(&dir);
    let executor = ScriptedExecutor::new(vec![version_output("v16.20.2")]);
    let error = check_prerequisites(&executor, &SilentLogger, &settings(&dir))
        .expect_err("old runtime fails");
    assert!(
        matches!(error, RunnerError::RuntimeVersion { ref found, minimum: 18 }
            if found == "v16.20.2")
    );
}

#[test]
fn unparsable_version_is_a_prereq_error() {
    let dir = TempDir::new().expect("temp dir");
    satisfied_project(&dir);
    let executor = ScriptedExecutor::new(vec![version_output("not-a-version")]);
    let error = check_prerequisites(&executor, &SilentLogger, &settings(&dir))
        .expect_err("unparsable version fails");
    assert!(matches!(error, RunnerError::Prereq { .. }), "unexpected error: {error}");
}

#[test]
fn parse_major_handles_common_forms() {
    assert_eq!(parse_major("v18.17.0"), Some(18));
    assert_eq!(parse_major("20.0.0"), Some(20));
    assert_eq!(parse_major("  v22.1.0\n"), Some(22));
    assert_eq!(parse_major("devel"), None);
    assert_eq!(parse_major(""), None);
}

// ============================================================================
// SECTION: Install And Environment
// ============================================================================

#[test]
fn missing_lock_marker_triggers_install() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(".env.test"), "KEY=value\n").expect("write env file");
    let executor = ScriptedExecutor::new(vec![
        version_output("v18.17.0"),
        Ok(CommandOutput {
            stdout: String::new(),
            stderr: String::new(),
        }),
    ]);
    check_prerequisites(&executor, &SilentLogger, &settings(&dir))
        .expect("prerequisites pass");
    assert_eq!(*executor.seen.borrow(), ["node", "npm"]);
}

#[test]
fn failed_install_is_a_prereq_error() {
    let dir = TempDir::new().expect("temp dir");
    let executor = ScriptedExecutor::new(vec![
        version_output("v18.17.0"),
        Err(ExecError::Failed {
            command: "npm".to_string(),
            exit_code: 1,
            stdout: String::new(),
            stderr: "registry unreachable".to_string(),
        }),
    ]);
    let error = check_prerequisites(&executor, &SilentLogger, &settings(&dir))
        .expect_err("install failure propagates");
    assert!(
        error.to_string().contains("dependency install failed"),
        "unexpected error: {error}"
    );
}

#[test]
fn env_file_is_created_from_template() {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(dir.path().join("node_modules")).expect("create lock marker");
    fs::write(dir.path().join(".env.test.example"), "KEY=template\n")
        .expect("write template");
    let executor = ScriptedExecutor::new(vec![version_output("v18.17.0")]);
    check_prerequisites(&executor, &SilentLogger, &settings(&dir))
        .expect("prerequisites pass");
    let created = fs::read_to_string(dir.path().join(".env.test")).expect("env file exists");
    assert_eq!(created, "KEY=template\n");
}

#[test]
fn missing_template_is_a_prereq_error() {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(dir.path().join("node_modules")).expect("create lock marker");
    let executor = ScriptedExecutor::new(vec![version_output("v18.17.0")]);
    let error = check_prerequisites(&executor, &SilentLogger, &settings(&dir))
        .expect_err("missing template fails");
    assert!(
        error.to_string().contains("failed to create '.env.test'"),
        "unexpected error: {error}"
    );
}
