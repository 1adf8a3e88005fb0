//! Orchestration of a measurement run.
//!
//! A [`Harness`] drains a stepper, drives the runner once per emitted N
//! and accumulates the results in emission order. Everything is
//! single-threaded and blocking: a long-running runner call stalls the
//! whole run. The harness owns its results exclusively until
//! the caller extracts them (or a [`Series`]) for comparison plotting.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::output::{self, OutputError, PlotConfig};
use crate::result::{Results, Series, StepResult};
use crate::runner::Runner;
use crate::stepper::Stepper;

/// Detailed run configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    /// Divisor applied to N before it is handed to the runner.
    ///
    /// A speed of 2 drives the routine with `n / 2` while the recorded
    /// (nominal) N stays untouched: the axis shows the stepper's N, the
    /// routine sees a compressed one. Default: 1.0.
    pub speed: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

/// Runs a measurement and accumulates its results.
#[derive(Debug)]
pub struct Harness<R, S> {
    name: String,
    runner: R,
    stepper: S,
    results: Results,
    config: RunConfig,
}

impl<R, S> Harness<R, S>
where
    R: Runner,
    S: Stepper,
{
    /// Create a harness with the default configuration.
    pub fn new(name: impl Into<String>, runner: R, stepper: S) -> Self {
        Self::with_config(name, runner, stepper, RunConfig::default())
    }

    /// Create a harness with an explicit configuration.
    pub fn with_config(
        name: impl Into<String>,
        runner: R,
        stepper: S,
        config: RunConfig,
    ) -> Self {
        Self {
            name: name.into(),
            runner,
            stepper,
            results: Results::new(),
            config,
        }
    }

    /// Set the speed divisor. Panics if `speed` is not positive.
    pub fn speed(mut self, speed: f64) -> Self {
        assert!(speed > 0.0, "speed must be positive");
        self.config.speed = speed;
        self
    }

    /// The label this harness records its results under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The results accumulated so far.
    pub fn results(&self) -> &Results {
        &self.results
    }

    /// Drain the stepper, calling the runner once per emitted N.
    ///
    /// Each result records the nominal N from the stepper while the runner
    /// receives `n / speed`. Runner panics are not caught: they unwind
    /// through this call and the partially accumulated results go down
    /// with the harness.
    pub fn run(&mut self) -> &mut Self {
        while let Some(n) = self.stepper.next() {
            debug!(n, speed = self.config.speed, "running step");
            let measurements = self.runner.step(n / self.config.speed);
            if measurements.is_empty() {
                warn!(n, "runner returned no measurements for this step");
            }
            self.results.push(StepResult { n, measurements });
        }

        self
    }

    /// Copy the accumulated results into a named series.
    pub fn series(&self) -> Series {
        Series::new(self.name.clone(), self.results.clone())
    }

    /// Consume the harness, yielding its results as a named series.
    pub fn into_series(self) -> Series {
        Series::new(self.name, self.results)
    }

    /// Write the accumulated results to `<name>.json` in the working
    /// directory.
    ///
    /// # Errors
    ///
    /// Propagates serialization and I/O failures; nothing is retried or
    /// cleaned up.
    pub fn write_json(&self) -> Result<PathBuf, OutputError> {
        output::write_results_to_json_file(".", &self.name, &self.results)
    }

    /// Plot the accumulated results to `<name>.png` with the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Propagates rendering and I/O failures.
    pub fn plot(&self) -> Result<PathBuf, OutputError> {
        self.plot_with_config(&PlotConfig::default())
    }

    /// Plot the accumulated results with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Propagates rendering and I/O failures.
    pub fn plot_with_config(&self, config: &PlotConfig) -> Result<PathBuf, OutputError> {
        output::render_to(".", &self.name, &[self.series()], config)
    }
}
