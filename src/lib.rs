//! # bigo
//!
//! Measure the empirical time complexity of arbitrary code by observation:
//! run a routine over a sequence of input sizes N, record one or more cost
//! measurements O per size, aggregate them and plot the series against
//! reference growth curves (linear, quadratic, logarithmic) for visual
//! classification.
//!
//! This is not a profiler: whatever value the routine reports
//! is taken as the operation count, wall-clock durations included. There
//! is no significance testing, no outlier rejection and no curve fitting;
//! the comparison against reference shapes is manual and visual.
//!
//! ## Quick start
//!
//! ```ignore
//! use bigo::{ArrayStepper, Harness, Measurement};
//!
//! let stepper = ArrayStepper::new(vec![100.0, 200.0, 400.0, 800.0])?;
//! let mut harness = Harness::new("bubble sort", |n: f64| {
//!     let start = std::time::Instant::now();
//!     bubble_sort(random_input(n as usize));
//!     vec![Measurement::new(start.elapsed().as_nanos() as f64)]
//! }, stepper);
//!
//! harness.run();
//! harness.write_json()?;
//! harness.plot()?;
//! ```
//!
//! ## Comparing variants
//!
//! Run one harness per variant, collect each into a [`Series`] and render
//! them into a single plot:
//!
//! ```ignore
//! use bigo::output::{render, PlotConfig};
//!
//! let config = PlotConfig {
//!     reference_curves: true,
//!     ..PlotConfig::default()
//! };
//! render("comparison", &[variant_a, variant_b], &config)?;
//! ```
//!
//! Steppers and harnesses are single-owner and single-pass; the whole
//! pipeline is synchronous. A runner that blocks forever blocks the run.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod harness;
mod result;
mod runner;
mod stepper;

pub mod aggregate;
pub mod output;
pub mod palette;
pub mod reference;

pub use harness::{Harness, RunConfig};
pub use output::{OutputError, PlotConfig};
pub use result::{Measurement, Measurements, Results, Series, StepResult};
pub use runner::Runner;
pub use stepper::{ArrayStepper, RangeStepper, Stepper, StepperError};
