// crates/testgate-core/src/runtime/runner.rs
// ============================================================================
// Module: Testgate Orchestrator
// Description: Sequential catalogue execution with fail-fast and readiness gating.
// Purpose: Run suite descriptors in order and aggregate results into a report.
// Dependencies: crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! The runner executes suites strictly sequentially in catalogue order. An
//! individual suite failure is recorded and does not stop the catalogue
//! unless fail-fast is set, in which case the trip propagates as a fatal
//! [`RunnerError::FailFast`] and skips every remaining suite and phase.
//!
//! Configuration is injected explicitly through [`RunnerOptions`]; the runner
//! never reads process arguments or environment state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::thread;
use std::time::Duration;
use std::time::Instant;

use thiserror::Error;

use crate::core::catalog::PhasePlan;
use crate::core::catalog::ReadinessWait;
use crate::core::catalog::ServiceEndpoint;
use crate::core::catalog::SuiteSpec;
use crate::core::report::RunReport;
use crate::core::suite::SuiteRecord;
use crate::core::suite::SuiteResult;
use crate::core::time::elapsed_ms;
use crate::core::time::rfc3339_now;
use crate::interfaces::CommandRequest;
use crate::interfaces::ExecError;
use crate::interfaces::RunLogger;
use crate::interfaces::ServiceProbe;
use crate::interfaces::SuiteExecutor;

// ============================================================================
// SECTION: Options And Errors
// ============================================================================

/// Explicit orchestrator configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerOptions {
    /// Stream child output to the terminal instead of capturing it.
    pub verbose: bool,
    /// Abort the whole catalogue on the first suite failure.
    pub fail_fast: bool,
}

/// Fatal orchestration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Any variant aborts the remaining catalogue when it reaches the top level.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// A suite name was used twice within one run.
    #[error("duplicate suite name: {name}")]
    DuplicateSuite {
        /// Offending suite name.
        name: String,
    },
    /// Fail-fast was set and a suite failed.
    #[error("test suite '{suite}' failed, stopping execution")]
    FailFast {
        /// Name of the suite that tripped fail-fast.
        suite: String,
    },
    /// A dependent service never became ready within its budget.
    #[error("service '{service}' was not ready within {timeout_ms}ms")]
    ServiceUnready {
        /// Name of the unready service.
        service: String,
        /// Budget that was exhausted, in milliseconds.
        timeout_ms: u64,
    },
    /// The runtime version is below the configured minimum.
    #[error("runtime version '{found}' is below required major version {minimum}")]
    RuntimeVersion {
        /// Reported runtime version string.
        found: String,
        /// Minimum accepted major version.
        minimum: u32,
    },
    /// A prerequisite step failed.
    #[error("prerequisite check failed: {message}")]
    Prereq {
        /// Description of the failed step.
        message: String,
    },
}

// ============================================================================
// SECTION: Test Runner
// ============================================================================

/// Sequential test-suite orchestrator.
///
/// # Invariants
/// - Suites run strictly sequentially in catalogue order; never concurrently.
/// - Recorded results are immutable and keep insertion order.
pub struct TestRunner<'a, E> {
    /// Process execution seam.
    executor: &'a E,
    /// Console output seam.
    logger: &'a dyn RunLogger,
    /// Injected run configuration.
    options: RunnerOptions,
    /// Suite records in catalogue insertion order.
    records: Vec<SuiteRecord>,
    /// Wall-clock start of the run.
    started: Instant,
}

impl<'a, E: SuiteExecutor> TestRunner<'a, E> {
    /// Creates a runner over the given seams and configuration.
    pub fn new(executor: &'a E, logger: &'a dyn RunLogger, options: RunnerOptions) -> Self {
        Self {
            executor,
            logger,
            options,
            records: Vec::new(),
            started: Instant::now(),
        }
    }

    /// Runs one suite and records its outcome.
    ///
    /// Returns whether the suite passed.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::DuplicateSuite`] when the name was already
    /// recorded, and [`RunnerError::FailFast`] when fail-fast is set and the
    /// suite failed.
    pub fn run_suite(&mut self, spec: &SuiteSpec) -> Result<bool, RunnerError> {
        if self.records.iter().any(|record| record.name == spec.name) {
            return Err(RunnerError::DuplicateSuite {
                name: spec.name.clone(),
            });
        }

        self.logger.info(&format!("Starting {}...", spec.name));
        let started = Instant::now();
        let mut request =
            CommandRequest::new(spec.command.clone(), spec.args.clone(), spec.cwd.clone());
        request.stream_output = self.options.verbose;

        match self.executor.run(&request) {
            Ok(output) => {
                let duration_ms = elapsed_ms(started);
                self.records.push(SuiteRecord::new(
                    spec.name.clone(),
                    SuiteResult::passed(duration_ms, output.stdout),
                ));
                self.logger
                    .success(&format!("{} completed successfully ({duration_ms}ms)", spec.name));
                Ok(true)
            }
            Err(error) => {
                let duration_ms = elapsed_ms(started);
                let (message, exit_code) = failure_details(&error);
                self.records.push(SuiteRecord::new(
                    spec.name.clone(),
                    SuiteResult::failed(duration_ms, message, exit_code),
                ));
                self.logger.error(&format!("{} failed ({duration_ms}ms)", spec.name));

                if self.options.fail_fast {
                    return Err(RunnerError::FailFast {
                        suite: spec.name.clone(),
                    });
                }
                Ok(false)
            }
        }
    }

    /// Runs every suite of a phase in catalogue order.
    ///
    /// Returns whether all suites in the phase passed. Individual failures do
    /// not stop the phase unless fail-fast is set.
    ///
    /// # Errors
    ///
    /// Propagates fatal errors from [`Self::run_suite`].
    pub fn run_phase(&mut self, plan: &PhasePlan) -> Result<bool, RunnerError> {
        self.logger.info(&format!("Running {}...", plan.name));
        let mut all_passed = true;
        for suite in &plan.suites {
            if !self.run_suite(suite)? {
                all_passed = false;
            }
        }
        Ok(all_passed)
    }

    /// Polls every service endpoint until ready or until its budget expires.
    ///
    /// Services are probed sequentially; each gets the full `wait.timeout_ms`
    /// budget. Exhausting a budget fails explicitly instead of proceeding
    /// against a possibly-unready service.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::ServiceUnready`] naming the first service whose
    /// budget expired.
    pub fn await_services(
        &self,
        probe: &dyn ServiceProbe,
        services: &[ServiceEndpoint],
        wait: &ReadinessWait,
    ) -> Result<(), RunnerError> {
        for service in services {
            self.logger.info(&format!(
                "Waiting for {} at {}:{}...",
                service.name, service.host, service.port
            ));
            let deadline = Instant::now() + Duration::from_millis(wait.timeout_ms);
            loop {
                if probe.is_ready(service) {
                    self.logger.success(&format!("{} is ready", service.name));
                    break;
                }
                if Instant::now() >= deadline {
                    return Err(RunnerError::ServiceUnready {
                        service: service.name.clone(),
                        timeout_ms: wait.timeout_ms,
                    });
                }
                thread::sleep(Duration::from_millis(wait.poll_interval_ms));
            }
        }
        Ok(())
    }

    /// Returns the recorded suites in catalogue order.
    #[must_use]
    pub fn records(&self) -> &[SuiteRecord] {
        &self.records
    }

    /// Computes the run report from the recorded suites.
    #[must_use]
    pub fn generate_report(&self) -> RunReport {
        RunReport::from_records(self.records.clone(), elapsed_ms(self.started), rfc3339_now())
    }
}

// ============================================================================
// SECTION: Failure Mapping
// ============================================================================

/// Maps an execution error to recorded error text and exit code.
///
/// Captured stderr takes precedence when present; otherwise the error's own
/// description is recorded, mirroring verbose mode where streams are not
/// captured.
fn failure_details(error: &ExecError) -> (String, i32) {
    match error {
        ExecError::Spawn {
            ..
        } => (error.to_string(), -1),
        ExecError::Failed {
            exit_code,
            stderr,
            ..
        } => {
            let message =
                if stderr.is_empty() { error.to_string() } else { stderr.clone() };
            (message, *exit_code)
        }
    }
}
