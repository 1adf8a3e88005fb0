//! PNG plot rendering for aggregated series.
//!
//! Each series contributes four sub-plots in its palette color: min, max
//! and mean lines over the cumulative aggregate points, plus a scatter of
//! every raw measurement. Optionally the known reference shapes are
//! overlaid in gray, scaled into the shared empirical bounding box so the
//! curves are visually comparable regardless of absolute magnitude.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::aggregate::{aggregate_series, Extent, SeriesAggregate};
use crate::palette::color_for;
use crate::reference::{sample, Reference};
use crate::result::Series;

use super::filename::sanitize;
use super::OutputError;

/// Number of points each reference curve is sampled at.
const REFERENCE_SAMPLES: usize = 128;

/// Gray used for all reference curves.
const REFERENCE_COLOR: RGBColor = RGBColor(130, 130, 130);

/// Plot rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    /// Overlay the reference complexity curves. Default: off.
    pub reference_curves: bool,
    /// Plot width in pixels. Default: 600.
    pub width: u32,
    /// Plot height in pixels. Default: 600.
    pub height: u32,
    /// Width of the legend thumbnails in pixels. Default: 50.
    pub legend_thumbnail: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            reference_curves: false,
            width: 600,
            height: 600,
            legend_thumbnail: 50,
        }
    }
}

/// Render `series` to `<sanitized name>.png` in the working directory.
///
/// # Errors
///
/// Fails when no series contains any measurement, and propagates drawing
/// and I/O failures.
pub fn render(name: &str, series: &[Series], config: &PlotConfig) -> Result<PathBuf, OutputError> {
    render_to(".", name, series, config)
}

/// Render `series` to `<sanitized name>.png` under `dir`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Fails when no series contains any measurement, and propagates drawing
/// and I/O failures.
pub fn render_to(
    dir: impl AsRef<Path>,
    name: &str,
    series: &[Series],
    config: &PlotConfig,
) -> Result<PathBuf, OutputError> {
    let aggregates: Vec<SeriesAggregate> = series.iter().map(aggregate_series).collect();
    let extent = Extent::of(&aggregates)
        .ok_or_else(|| OutputError::Plot("no measurements to plot".to_string()))?;

    let path = dir.as_ref().join(sanitize(name, "png"));
    draw_chart(&path, name, &aggregates, extent, config)?;

    Ok(path)
}

fn draw_chart(
    path: &Path,
    name: &str,
    aggregates: &[SeriesAggregate],
    extent: Extent,
    config: &PlotConfig,
) -> Result<(), OutputError> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_range, y_range) = axis_ranges(extent);
    let mut chart = ChartBuilder::on(&root)
        .caption(name, ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("N")
        .y_desc("O")
        .draw()
        .map_err(plot_err)?;

    let thumbnail = config.legend_thumbnail as i32;

    for (index, aggregate) in aggregates.iter().enumerate() {
        let color = color_for(index);

        let min_points: Vec<_> = aggregate.points.iter().map(|p| (p.n, p.min)).collect();
        let max_points: Vec<_> = aggregate.points.iter().map(|p| (p.n, p.max)).collect();
        let mean_points: Vec<_> = aggregate.points.iter().map(|p| (p.n, p.mean)).collect();

        for (suffix, points) in [("min", min_points), ("max", max_points), ("mean", mean_points)] {
            chart
                .draw_series(LineSeries::new(points, color))
                .map_err(plot_err)?
                .label(format!("{} {}", aggregate.name, suffix))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + thumbnail, y)], color)
                });
        }

        chart
            .draw_series(
                aggregate
                    .all
                    .iter()
                    .map(|&(n, o)| Circle::new((n, o), 3, color.filled())),
            )
            .map_err(plot_err)?
            .label(format!("{} all", aggregate.name))
            .legend(move |(x, y)| Circle::new((x + thumbnail / 2, y), 3, color.filled()));
    }

    if config.reference_curves {
        for reference in Reference::ALL {
            chart
                .draw_series(LineSeries::new(
                    sample(extent, reference, REFERENCE_SAMPLES),
                    REFERENCE_COLOR,
                ))
                .map_err(plot_err)?
                .label(reference.label())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + thumbnail, y)], REFERENCE_COLOR)
                });
        }
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;

    Ok(())
}

/// Widen degenerate axis extents so plotters gets a non-empty range.
fn axis_ranges(extent: Extent) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let x = pad_degenerate(extent.min_n, extent.max_n);
    let y = pad_degenerate(extent.min_o, extent.max_o);
    (x, y)
}

fn pad_degenerate(min: f64, max: f64) -> std::ops::Range<f64> {
    if min < max {
        min..max
    } else {
        (min - 0.5)..(max + 0.5)
    }
}

fn plot_err(error: impl std::fmt::Display) -> OutputError {
    OutputError::Plot(error.to_string())
}
