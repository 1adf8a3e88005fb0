//! End-to-end runs through stepper, harness, aggregation and overlay.

use bigo::aggregate::{aggregate_series, Extent};
use bigo::reference::{scaled, Reference};
use bigo::{ArrayStepper, Harness, Measurement, RangeStepper};

/// The identity scenario: O mirrors N for steps [1, 2, 3].
fn identity_harness() -> bigo::Series {
    let stepper = ArrayStepper::new(vec![1.0, 2.0, 3.0]).unwrap();
    let mut harness = Harness::new("identity", |n: f64| vec![Measurement::new(n)], stepper);
    harness.run();
    harness.into_series()
}

#[test]
fn identity_run_produces_expected_results() {
    let series = identity_harness();

    let shape: Vec<(f64, Vec<f64>)> = series
        .results
        .iter()
        .map(|r| (r.n, r.measurements.iter().map(|m| m.o).collect()))
        .collect();

    assert_eq!(
        shape,
        vec![(1.0, vec![1.0]), (2.0, vec![2.0]), (3.0, vec![3.0])]
    );
}

#[test]
fn identity_run_aggregates_cumulatively() {
    let aggregate = aggregate_series(&identity_harness());

    let points: Vec<(f64, f64, f64, f64)> = aggregate
        .points
        .iter()
        .map(|p| (p.n, p.min, p.max, p.mean))
        .collect();

    assert_eq!(
        points,
        vec![
            (1.0, 1.0, 1.0, 1.0),
            (2.0, 1.0, 2.0, 1.5),
            (3.0, 1.0, 3.0, 2.0),
        ]
    );
}

#[test]
fn linear_reference_spans_the_identity_extent() {
    let aggregate = aggregate_series(&identity_harness());
    let extent = Extent::of(std::slice::from_ref(&aggregate)).unwrap();

    assert_eq!(extent.min_n, 1.0);
    assert_eq!(extent.max_n, 3.0);
    assert_eq!(extent.min_o, 1.0);
    assert_eq!(extent.max_o, 3.0);

    let linear = scaled(extent, Reference::Linear);
    assert!((linear(extent.min_n) - extent.min_o).abs() < 1e-12);
    assert!((linear(extent.max_n) - extent.max_o).abs() < 1e-12);
}

#[test]
fn speed_rescales_the_driven_n_only() {
    let stepper = RangeStepper::new(2.0, 6.0, 2.0).unwrap();
    let mut harness = Harness::new(
        "half speed",
        // Echo the N the runner actually received.
        |n: f64| vec![Measurement::new(n)],
        stepper,
    )
    .speed(2.0);
    harness.run();

    for result in harness.results() {
        assert_eq!(result.measurements[0].o, result.n / 2.0);
    }
}

#[test]
fn multiple_measurements_per_step_feed_the_cumulative_stream() {
    let stepper = ArrayStepper::new(vec![1.0, 2.0]).unwrap();
    let mut harness = Harness::new(
        "subscales",
        |n: f64| vec![Measurement::new(n), Measurement::new(n * 10.0)],
        stepper,
    );
    harness.run();

    let aggregate = aggregate_series(&harness.into_series());
    assert_eq!(aggregate.all.len(), 4);

    // Cumulative over [1, 10, 2, 20].
    let last = aggregate.points[1];
    assert_eq!(last.min, 1.0);
    assert_eq!(last.max, 20.0);
    assert!((last.mean - 8.25).abs() < 1e-12);
}
