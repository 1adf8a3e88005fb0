//! Persistence and rendering over completed results.
//!
//! Terminal operations over a finished run: JSON persistence, PNG plot
//! rendering and a human-readable terminal summary. All failures propagate
//! to the caller; there is no retry and no partial-write cleanup, since a
//! silently swallowed failure would corrupt the experiment.

mod filename;
mod json;
mod plot;
mod terminal;

pub use filename::sanitize;
pub use json::{from_json, to_json, to_json_pretty, write_results_to_json_file};
pub use plot::{render, render_to, PlotConfig};
pub use terminal::format_series;

use thiserror::Error;

/// Errors from persistence and rendering.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Writing an output file failed.
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),
    /// Serializing or deserializing results failed.
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
    /// Rendering a plot failed.
    #[error("failed to render plot: {0}")]
    Plot(String),
}
