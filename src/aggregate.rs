//! Statistical reduction of raw measurements.
//!
//! For every result in a series the aggregator records the min, max and
//! mean of the **cumulative** stream of O values seen across all results
//! processed so far in that series, not just the current result's own
//! measurements. The k-th aggregate point therefore reads as "best, worst
//! and typical cost observed up through this scale". A per-bucket
//! reduction over only the k-th result's measurements is a different
//! statistic and would be wrong here.

use crate::result::Series;

/// Running min/max/sum/count over a stream of values.
#[derive(Debug, Clone)]
pub struct RunningStats {
    min: f64,
    max: f64,
    sum: f64,
    count: usize,
}

impl RunningStats {
    /// Empty stream.
    pub fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        }
    }

    /// Fold one value into the stream.
    pub fn push(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
    }

    /// Number of values folded in so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Smallest value seen, or `None` for an empty stream.
    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    /// Largest value seen, or `None` for an empty stream.
    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    /// Arithmetic mean of the values seen, or `None` for an empty stream.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.sum / self.count as f64)
    }
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Cumulative min/max/mean at one N.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatePoint {
    /// The nominal input size this point belongs to.
    pub n: f64,
    /// Smallest O observed up through this N.
    pub min: f64,
    /// Largest O observed up through this N.
    pub max: f64,
    /// Mean O observed up through this N.
    pub mean: f64,
}

/// The aggregated view of one series, ready for rendering.
#[derive(Debug, Clone)]
pub struct SeriesAggregate {
    /// The series label.
    pub name: String,
    /// One cumulative aggregate point per result, in result order.
    pub points: Vec<AggregatePoint>,
    /// Every individual `(n, o)` measurement, for the scatter overlay.
    pub all: Vec<(f64, f64)>,
}

/// Reduce a series into cumulative aggregate points plus the raw scatter.
///
/// Results contributing no measurements advance the walk without producing
/// an aggregate point; the cumulative state is scoped to this one call and
/// discarded afterwards.
pub fn aggregate_series(series: &Series) -> SeriesAggregate {
    let mut stats = RunningStats::new();
    let mut points = Vec::with_capacity(series.results.len());
    let mut all = Vec::new();

    for result in &series.results {
        for measurement in &result.measurements {
            all.push((result.n, measurement.o));
            stats.push(measurement.o);
        }

        if let (Some(min), Some(max), Some(mean)) = (stats.min(), stats.max(), stats.mean()) {
            points.push(AggregatePoint {
                n: result.n,
                min,
                max,
                mean,
            });
        }
    }

    SeriesAggregate {
        name: series.name.clone(),
        points,
        all,
    }
}

/// The shared bounding box of a set of aggregated series.
///
/// N spans the nominal result N values; O spans the min/max/mean/all point
/// cloud. These four scalars parameterize the reference-curve overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Smallest nominal N across all series.
    pub min_n: f64,
    /// Largest nominal N across all series.
    pub max_n: f64,
    /// Smallest O across all aggregate and scatter points.
    pub min_o: f64,
    /// Largest O across all aggregate and scatter points.
    pub max_o: f64,
}

impl Extent {
    /// Compute the shared extent, or `None` when no series has any points.
    pub fn of(aggregates: &[SeriesAggregate]) -> Option<Self> {
        let mut extent: Option<Self> = None;

        for aggregate in aggregates {
            for point in &aggregate.points {
                let e = extent.get_or_insert(Self {
                    min_n: point.n,
                    max_n: point.n,
                    min_o: point.min,
                    max_o: point.max,
                });
                e.min_n = e.min_n.min(point.n);
                e.max_n = e.max_n.max(point.n);
                e.min_o = e.min_o.min(point.min).min(point.mean);
                e.max_o = e.max_o.max(point.max).max(point.mean);
            }
            for &(n, o) in &aggregate.all {
                let e = extent.get_or_insert(Self {
                    min_n: n,
                    max_n: n,
                    min_o: o,
                    max_o: o,
                });
                e.min_n = e.min_n.min(n);
                e.max_n = e.max_n.max(n);
                e.min_o = e.min_o.min(o);
                e.max_o = e.max_o.max(o);
            }
        }

        extent
    }
}
