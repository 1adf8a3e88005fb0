//! Deterministic per-series plot colors.
//!
//! Series are colored by their position in the comparison: the i-th series
//! gets `PALETTE[i % PALETTE.len()]`. A pure index lookup instead of a
//! mutating cursor keeps color assignment reproducible across renders.

use plotters::style::RGBColor;

/// The fixed series color palette, cycled in series order.
pub const PALETTE: [RGBColor; 8] = [
    RGBColor(57, 106, 177),
    RGBColor(218, 124, 48),
    RGBColor(62, 150, 81),
    RGBColor(204, 37, 41),
    RGBColor(83, 81, 84),
    RGBColor(107, 76, 154),
    RGBColor(146, 36, 40),
    RGBColor(148, 139, 61),
];

/// Color for the series at `index`, wrapping around the palette.
pub fn color_for(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}
