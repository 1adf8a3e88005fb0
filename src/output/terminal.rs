//! Human-readable terminal summary of an aggregated series.

use colored::Colorize;

use crate::aggregate::SeriesAggregate;

/// Format the cumulative aggregates of one series as a small table.
///
/// One row per N with the cumulative min/max/mean observed up through that
/// scale, followed by a totals line. Intended for quick inspection of a
/// run without opening the rendered plot.
pub fn format_series(aggregate: &SeriesAggregate) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", aggregate.name.bold()));
    output.push_str(&format!(
        "{}\n",
        format!(
            "{:>12} {:>12} {:>12} {:>12}",
            "N", "min", "max", "mean"
        )
        .dimmed()
    ));

    for point in &aggregate.points {
        output.push_str(&format!(
            "{:>12.3} {:>12.3} {:>12.3} {:>12.3}\n",
            point.n, point.min, point.max, point.mean
        ));
    }

    if let Some(last) = aggregate.points.last() {
        output.push_str(&format!(
            "{} {} measurements, min {:.3}, max {:.3}, mean {:.3}\n",
            "total:".bold(),
            aggregate.all.len(),
            last.min,
            last.max,
            last.mean
        ));
    } else {
        output.push_str(&format!("{}\n", "no measurements".yellow()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_series;
    use crate::result::{Measurement, Series, StepResult};

    fn aggregate() -> SeriesAggregate {
        aggregate_series(&Series::new(
            "identity",
            vec![
                StepResult {
                    n: 1.0,
                    measurements: vec![Measurement::new(1.0)],
                },
                StepResult {
                    n: 2.0,
                    measurements: vec![Measurement::new(2.0)],
                },
            ],
        ))
    }

    #[test]
    fn summary_names_the_series_and_final_aggregates() {
        colored::control::set_override(false);
        let summary = format_series(&aggregate());

        assert!(summary.contains("identity"));
        assert!(summary.contains("min"));
        assert!(summary.contains("2 measurements"));
        assert!(summary.contains("mean 1.500"));
    }

    #[test]
    fn summary_has_one_row_per_aggregate_point() {
        colored::control::set_override(false);
        let summary = format_series(&aggregate());

        // header + two rows + totals
        assert_eq!(summary.lines().count(), 5);
    }

    #[test]
    fn empty_series_says_so() {
        colored::control::set_override(false);
        let summary = format_series(&aggregate_series(&Series::new("empty", Vec::new())));
        assert!(summary.contains("no measurements"));
    }
}
