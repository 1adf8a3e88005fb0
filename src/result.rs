//! Data model for captured measurements.
//!
//! One [`Measurement`] is a single observation of the dependent variable O
//! (operation count, duration in some unit, any monotonic cost metric). A
//! [`StepResult`] groups every measurement captured for one N, and a run
//! produces [`Results`] in stepper-emission order. That ordering is load
//! bearing: aggregation and plotting treat it as the N-axis ordering.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single capture of the O value for one invocation of the routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Optional diagnostic payload produced by the routine under test.
    ///
    /// Never interpreted by this library. If the routine is deterministic
    /// this can be used to cross-check that it actually did the work being
    /// measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_value: Option<Value>,
    /// The observed cost for this invocation.
    ///
    /// Determining a true operation count can be anywhere from tricky to
    /// impossible; for a per-machine comparison a wall-clock duration works
    /// just as well.
    pub o: f64,
}

impl Measurement {
    /// Measurement with no diagnostic payload.
    pub fn new(o: f64) -> Self {
        Self {
            result_value: None,
            o,
        }
    }

    /// Measurement carrying a diagnostic payload.
    pub fn with_value(o: f64, value: impl Into<Value>) -> Self {
        Self {
            result_value: Some(value.into()),
            o,
        }
    }
}

/// The measurements captured by one runner invocation.
///
/// A correctly implemented [`Runner`](crate::Runner) returns at least one
/// entry per call.
pub type Measurements = Vec<Measurement>;

/// All measurements captured for one N.
///
/// Created the moment its N is consumed from the stepper and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// The nominal input size this result was captured for.
    pub n: f64,
    /// The measurements returned by the runner for this N, in return order.
    pub measurements: Measurements,
}

/// One result per distinct N, in stepper-emission order.
pub type Results = Vec<StepResult>;

/// A named results collection, used to compare variants in one plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Label shown in the plot legend and terminal summary.
    pub name: String,
    /// The results this series groups.
    pub results: Results,
}

impl Series {
    /// Group `results` under `name`.
    pub fn new(name: impl Into<String>, results: Results) -> Self {
        Self {
            name: name.into(),
            results,
        }
    }
}
