// crates/testgate-core/src/runtime/prereq.rs
// ============================================================================
// Module: Testgate Prerequisites
// Description: Pre-run environment checks for the orchestrator.
// Purpose: Verify runtime version, dependency install, and test-env file.
// Dependencies: crate::interfaces, crate::runtime::runner
// ============================================================================

//! ## Overview
//! Prerequisites run once before any phase: the runtime version must meet a
//! configured minimum major, dependencies are installed when the lock marker
//! directory is absent, and the test environment file is materialized from
//! its template when missing. The install step shells out and is not retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;

use crate::interfaces::CommandRequest;
use crate::interfaces::RunLogger;
use crate::interfaces::SuiteExecutor;
use crate::runtime::runner::RunnerError;

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Filesystem and command settings for the prerequisite checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrereqSettings {
    /// Project directory the checks operate in.
    pub project_dir: PathBuf,
    /// Minimum accepted runtime major version.
    pub min_runtime_major: u32,
    /// Executable used to report the runtime version.
    pub version_command: String,
    /// Arguments for the version command.
    pub version_args: Vec<String>,
    /// Executable used to install dependencies.
    pub install_command: String,
    /// Arguments for the install command.
    pub install_args: Vec<String>,
    /// Directory whose absence triggers the dependency install.
    pub lock_marker: String,
    /// Test environment file name, relative to the project directory.
    pub env_file: String,
    /// Template copied to the environment file when it is absent.
    pub env_template: String,
}

// ============================================================================
// SECTION: Prerequisite Checks
// ============================================================================

/// Runs all prerequisite checks in order.
///
/// # Errors
///
/// Returns [`RunnerError::RuntimeVersion`] when the runtime is too old and
/// [`RunnerError::Prereq`] when a command or filesystem step fails.
pub fn check_prerequisites<E: SuiteExecutor>(
    executor: &E,
    logger: &dyn RunLogger,
    settings: &PrereqSettings,
) -> Result<(), RunnerError> {
    logger.info("Checking prerequisites...");

    let version = runtime_version(executor, settings)?;
    let major = parse_major(&version).ok_or_else(|| RunnerError::Prereq {
        message: format!("could not parse runtime version '{version}'"),
    })?;
    if major < settings.min_runtime_major {
        return Err(RunnerError::RuntimeVersion {
            found: version,
            minimum: settings.min_runtime_major,
        });
    }
    logger.info(&format!("Runtime version: {version}"));

    if !settings.project_dir.join(&settings.lock_marker).exists() {
        logger.info("Installing dependencies...");
        let request = CommandRequest::new(
            settings.install_command.clone(),
            settings.install_args.clone(),
            Some(settings.project_dir.clone()),
        );
        executor.run(&request).map_err(|error| RunnerError::Prereq {
            message: format!("dependency install failed: {error}"),
        })?;
    }

    materialize_env_file(logger, settings)?;

    logger.success("Prerequisites check completed");
    Ok(())
}

/// Queries the runtime version string.
fn runtime_version<E: SuiteExecutor>(
    executor: &E,
    settings: &PrereqSettings,
) -> Result<String, RunnerError> {
    let request = CommandRequest::new(
        settings.version_command.clone(),
        settings.version_args.clone(),
        Some(settings.project_dir.clone()),
    );
    let output = executor.run(&request).map_err(|error| RunnerError::Prereq {
        message: format!("runtime version check failed: {error}"),
    })?;
    Ok(output.stdout.trim().to_string())
}

/// Copies the environment template into place when the env file is absent.
fn materialize_env_file(
    logger: &dyn RunLogger,
    settings: &PrereqSettings,
) -> Result<(), RunnerError> {
    let env_path = settings.project_dir.join(&settings.env_file);
    if env_path.exists() {
        return Ok(());
    }
    logger.info("Creating test environment file...");
    let template_path = settings.project_dir.join(&settings.env_template);
    fs::copy(&template_path, &env_path).map_err(|error| RunnerError::Prereq {
        message: format!(
            "failed to create '{}' from '{}': {error}",
            settings.env_file, settings.env_template
        ),
    })?;
    Ok(())
}

/// Parses the major component from a version string such as `v18.17.0`.
#[must_use]
pub fn parse_major(version: &str) -> Option<u32> {
    let trimmed = version.trim().trim_start_matches('v');
    let major = trimmed.split('.').next()?;
    major.parse().ok()
}
