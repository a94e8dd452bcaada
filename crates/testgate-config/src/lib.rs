// crates/testgate-config/src/lib.rs
// ============================================================================
// Module: Testgate Configuration
// Description: TOML-backed catalogue, runner, and threshold configuration.
// Purpose: Load, default, and validate everything the CLI wires together.
// Dependencies: serde, testgate-core, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is read from `testgate.toml` when present; otherwise the
//! built-in catalogue reproduces the platform's standard phases. Every loaded
//! configuration passes through [`TestgateConfig::validate`] before use, and
//! validation errors carry specific, greppable messages.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use testgate_core::PhaseKind;
use testgate_core::PhasePlan;
use testgate_core::QualityThresholds;
use testgate_core::ReadinessWait;
use testgate_core::ServiceEndpoint;
use testgate_core::SuiteSpec;
use thiserror::Error;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "testgate.toml";

/// Default reports directory, relative to the project directory.
const DEFAULT_REPORTS_DIR: &str = "reports";

/// Default minimum runtime major version.
const DEFAULT_MIN_RUNTIME_MAJOR: u32 = 18;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{path}': {message}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Operating-system error description.
        message: String,
    },
    /// The config file could not be parsed as TOML.
    #[error("failed to parse config file '{path}': {message}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Parser error description.
        message: String,
    },
    /// The configuration is structurally valid but semantically invalid.
    #[error("invalid configuration: {message}")]
    Invalid {
        /// Specific validation failure description.
        message: String,
    },
}

impl ConfigError {
    /// Creates an [`ConfigError::Invalid`] from a message.
    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

// ============================================================================
// SECTION: Runner Settings
// ============================================================================

/// Filesystem and prerequisite settings for the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    /// Project directory suites run in by default.
    pub project_dir: PathBuf,
    /// Reports directory, relative to the project directory when relative.
    pub reports_dir: PathBuf,
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
    /// Test environment file materialized before the run.
    pub env_file: String,
    /// Template copied to the environment file when absent.
    pub env_template: String,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            min_runtime_major: DEFAULT_MIN_RUNTIME_MAJOR,
            version_command: "node".to_string(),
            version_args: vec!["--version".to_string()],
            install_command: "npm".to_string(),
            install_args: vec!["install".to_string()],
            lock_marker: "node_modules".to_string(),
            env_file: ".env.test".to_string(),
            env_template: ".env.test.example".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Configuration Root
// ============================================================================

/// Full testgate configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestgateConfig {
    /// Orchestrator filesystem and prerequisite settings.
    pub runner: RunnerSettings,
    /// Readiness poll bounds for the e2e phase.
    pub readiness: ReadinessWait,
    /// Service endpoints the e2e phase depends on.
    #[serde(rename = "service")]
    pub services: Vec<ServiceEndpoint>,
    /// Ordered phase catalogue.
    #[serde(rename = "phase")]
    pub phases: Vec<PhasePlan>,
    /// Quality-gate thresholds.
    pub thresholds: QualityThresholds,
}

impl Default for TestgateConfig {
    fn default() -> Self {
        Self {
            runner: RunnerSettings::default(),
            readiness: ReadinessWait::default(),
            services: default_services(),
            phases: default_catalogue(),
            thresholds: QualityThresholds::default(),
        }
    }
}

impl TestgateConfig {
    /// Loads configuration from an explicit path or the default location.
    ///
    /// With no explicit path, a missing `testgate.toml` falls back to the
    /// built-in defaults; an explicit path must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or
    /// when the loaded configuration fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses one TOML config file.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.display().to_string(),
            message: error.to_string(),
        })?;
        toml::from_str(&text).map_err(|error| ConfigError::Parse {
            path: path.display().to_string(),
            message: error.to_string(),
        })
    }

    /// Validates the configuration against structural rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] with a specific message for the
    /// first rule breached.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_runner()?;
        self.validate_readiness()?;
        self.validate_services()?;
        self.validate_catalogue()?;
        self.validate_thresholds()?;
        Ok(())
    }

    /// Validates runner settings.
    fn validate_runner(&self) -> Result<(), ConfigError> {
        if self.runner.reports_dir.as_os_str().is_empty() {
            return Err(ConfigError::invalid("reports_dir must be non-empty"));
        }
        if self.runner.min_runtime_major == 0 {
            return Err(ConfigError::invalid("min_runtime_major must be greater than zero"));
        }
        if self.runner.version_command.is_empty() {
            return Err(ConfigError::invalid("version_command must be non-empty"));
        }
        if self.runner.install_command.is_empty() {
            return Err(ConfigError::invalid("install_command must be non-empty"));
        }
        Ok(())
    }

    /// Validates readiness poll bounds.
    fn validate_readiness(&self) -> Result<(), ConfigError> {
        if self.readiness.poll_interval_ms == 0 {
            return Err(ConfigError::invalid("poll_interval_ms must be greater than zero"));
        }
        if self.readiness.timeout_ms < self.readiness.poll_interval_ms {
            return Err(ConfigError::invalid(
                "timeout_ms must be at least poll_interval_ms",
            ));
        }
        Ok(())
    }

    /// Validates service endpoints.
    fn validate_services(&self) -> Result<(), ConfigError> {
        for service in &self.services {
            if service.name.is_empty() {
                return Err(ConfigError::invalid("service name must be non-empty"));
            }
            if service.host.is_empty() {
                return Err(ConfigError::invalid(format!(
                    "service '{}' host must be non-empty",
                    service.name
                )));
            }
            if service.port == 0 {
                return Err(ConfigError::invalid(format!(
                    "service '{}' port must be greater than zero",
                    service.name
                )));
            }
        }
        Ok(())
    }

    /// Validates the phase catalogue.
    fn validate_catalogue(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for phase in &self.phases {
            if phase.name.is_empty() {
                return Err(ConfigError::invalid("phase name must be non-empty"));
            }
            if phase.suites.is_empty() {
                return Err(ConfigError::invalid(format!(
                    "phase '{}' must declare at least one suite",
                    phase.name
                )));
            }
            for suite in &phase.suites {
                if suite.name.is_empty() {
                    return Err(ConfigError::invalid("suite name must be non-empty"));
                }
                if suite.command.is_empty() {
                    return Err(ConfigError::invalid(format!(
                        "suite '{}' command must be non-empty",
                        suite.name
                    )));
                }
                if !seen.insert(suite.name.clone()) {
                    return Err(ConfigError::invalid(format!(
                        "duplicate suite name: {}",
                        suite.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validates threshold bounds.
    fn validate_thresholds(&self) -> Result<(), ConfigError> {
        let coverage = self.thresholds.coverage;
        let metrics = [
            ("statements", coverage.statements),
            ("branches", coverage.branches),
            ("functions", coverage.functions),
            ("lines", coverage.lines),
        ];
        for (name, value) in metrics {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::invalid(format!(
                    "coverage threshold {name} must be between 0 and 100"
                )));
            }
        }
        if self.thresholds.performance.max_load_time_ms == 0 {
            return Err(ConfigError::invalid("max_load_time_ms must be greater than zero"));
        }
        if self.thresholds.performance.max_api_response_time_ms == 0 {
            return Err(ConfigError::invalid(
                "max_api_response_time_ms must be greater than zero",
            ));
        }
        if self.thresholds.performance.min_fps < 0.0 {
            return Err(ConfigError::invalid("min_fps must not be negative"));
        }
        if !(0.0..=100.0).contains(&self.thresholds.accessibility.min_score) {
            return Err(ConfigError::invalid("min_score must be between 0 and 100"));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Built-In Catalogue
// ============================================================================

/// Shorthand for a suite descriptor in the built-in catalogue.
fn suite(name: &str, command: &str, args: &[&str]) -> SuiteSpec {
    SuiteSpec {
        name: name.to_string(),
        command: command.to_string(),
        args: args.iter().map(ToString::to_string).collect(),
        cwd: None,
    }
}

/// Default service endpoints probed before e2e suites.
fn default_services() -> Vec<ServiceEndpoint> {
    vec![
        ServiceEndpoint {
            name: "API Server".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3_000,
        },
        ServiceEndpoint {
            name: "User Frontend".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5_173,
        },
        ServiceEndpoint {
            name: "Admin Frontend".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5_174,
        },
    ]
}

/// Built-in phase catalogue reproducing the platform's standard run.
#[must_use]
pub fn default_catalogue() -> Vec<PhasePlan> {
    vec![
        PhasePlan {
            name: "Unit Tests".to_string(),
            kind: PhaseKind::Unit,
            suites: vec![
                suite("Frontend Unit Tests (User)", "npm", &["run", "test:frontend:user"]),
                suite("Frontend Unit Tests (Admin)", "npm", &["run", "test:frontend:admin"]),
                suite("Backend API Tests", "npm", &["run", "test:backend:api"]),
                suite("Backend Model Tests", "npm", &["run", "test:backend:models"]),
            ],
        },
        PhasePlan {
            name: "Integration Tests".to_string(),
            kind: PhaseKind::Integration,
            suites: vec![
                suite("API-Database Integration", "npm", &["run", "test:integration:api-database"]),
                suite(
                    "Frontend-Backend Integration",
                    "npm",
                    &["run", "test:integration:frontend-backend"],
                ),
                suite("Web3 Integration", "npm", &["run", "test:integration:web3"]),
            ],
        },
        PhasePlan {
            name: "E2E Tests".to_string(),
            kind: PhaseKind::E2e,
            suites: vec![
                suite("User Flow E2E Tests", "npx", &["playwright", "test", "e2e/user-flows/"]),
                suite("Admin Flow E2E Tests", "npx", &["playwright", "test", "e2e/admin-flows/"]),
                suite(
                    "Web3 Integration E2E Tests",
                    "npx",
                    &["playwright", "test", "e2e/web3-integration/"],
                ),
                suite(
                    "Cross-Platform E2E Tests",
                    "npx",
                    &["playwright", "test", "e2e/cross-platform/"],
                ),
            ],
        },
        PhasePlan {
            name: "Special Tests".to_string(),
            kind: PhaseKind::Special,
            suites: vec![
                suite("Performance Tests", "npm", &["run", "test:performance"]),
                suite("Security Tests", "npm", &["run", "test:security"]),
                suite("Accessibility Tests", "npm", &["run", "test:accessibility"]),
            ],
        },
    ]
}
