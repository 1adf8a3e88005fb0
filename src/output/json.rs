//! JSON persistence for captured results.
//!
//! The encoding is lossless for the whole data model, including the opaque
//! `result_value` payloads, so a persisted run can be reloaded and plotted
//! later or diffed against a newer run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::result::Results;

use super::filename::sanitize;
use super::OutputError;

/// Serialize results to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for this
/// data model).
pub fn to_json(results: &Results) -> Result<String, serde_json::Error> {
    serde_json::to_string(results)
}

/// Serialize results to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for this
/// data model).
pub fn to_json_pretty(results: &Results) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

/// Deserialize results from a JSON string.
///
/// # Errors
///
/// Returns an error for malformed input.
pub fn from_json(json: &str) -> Result<Results, serde_json::Error> {
    serde_json::from_str(json)
}

/// Write `results` to `<sanitized name>.json` under `dir`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Propagates serialization and I/O failures; no partial-write cleanup is
/// attempted.
pub fn write_results_to_json_file(
    dir: impl AsRef<Path>,
    name: &str,
    results: &Results,
) -> Result<PathBuf, OutputError> {
    let path = dir.as_ref().join(sanitize(name, "json"));
    fs::write(&path, to_json(results)?)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Measurement, StepResult};
    use serde_json::json;

    fn sample_results() -> Results {
        vec![
            StepResult {
                n: 1.0,
                measurements: vec![Measurement::new(10.0)],
            },
            StepResult {
                n: 2.0,
                measurements: vec![
                    Measurement::with_value(20.0, "checked"),
                    Measurement::with_value(21.0, json!(99)),
                    Measurement::with_value(22.0, json!(2.5)),
                    Measurement::with_value(23.0, json!(true)),
                ],
            },
        ]
    }

    #[test]
    fn string_round_trip_is_lossless() {
        let results = sample_results();
        let decoded = from_json(&to_json(&results).unwrap()).unwrap();
        assert_eq!(decoded, results);
    }

    #[test]
    fn pretty_round_trip_is_lossless() {
        let results = sample_results();
        let decoded = from_json(&to_json_pretty(&results).unwrap()).unwrap();
        assert_eq!(decoded, results);
    }

    #[test]
    fn file_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let results = sample_results();

        let path = write_results_to_json_file(dir.path(), "run: A", &results).unwrap();
        assert_eq!(path.file_name().unwrap(), "run A.json");

        let decoded = from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(decoded, results);
    }
}
