//! Reference growth curves scaled into the empirical extent.
//!
//! A reference curve answers "does my series bend like x² or like log x?"
//! by drawing a known complexity-class shape inside the same bounding box
//! as the empirical data, regardless of the reference function's natural
//! magnitude.
//!
//! The mapping is a consistent min-max normalize/denormalize pair:
//!
//! 1. `t = normalize(n, min_n, max_n)` maps N into the unit interval.
//! 2. The reference is evaluated at `t * 100`, a percent-scaled domain.
//!    Log is non-positive everywhere on the unit interval, so the wider
//!    domain keeps the logarithmic shapes from degenerating.
//! 3. The output is divided by the reference's value at the domain's right
//!    edge, putting every monotone reference into `[0, 1]`.
//! 4. `denormalize` maps that back into `[min_o, max_o]`.
//!
//! Every curve therefore starts and ends inside the empirical bounding
//! box, and the linear reference hits `(min_n, min_o)` and `(max_n,
//! max_o)` exactly.

use crate::aggregate::Extent;

/// Right edge of the domain reference functions are evaluated over.
pub const REFERENCE_DOMAIN: f64 = 100.0;

/// A known complexity-class shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    /// `x`
    Linear,
    /// `x²`
    Quadratic,
    /// `2^x`
    Exponential,
    /// `log x`, clamped at 0 for non-positive logs
    Log,
    /// `log log x`, clamped at 0 at both levels
    LogLog,
}

impl Reference {
    /// Every reference shape, in legend order.
    pub const ALL: [Reference; 5] = [
        Reference::Quadratic,
        Reference::Exponential,
        Reference::Linear,
        Reference::Log,
        Reference::LogLog,
    ];

    /// Legend label for this shape.
    pub fn label(self) -> &'static str {
        match self {
            Reference::Linear => "linear",
            Reference::Quadratic => "x^2",
            Reference::Exponential => "2^x",
            Reference::Log => "log x",
            Reference::LogLog => "log log x",
        }
    }

    /// Evaluate the raw, unscaled reference function.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Reference::Linear => x,
            Reference::Quadratic => x * x,
            Reference::Exponential => 2f64.powf(x),
            Reference::Log => log_limited(x),
            Reference::LogLog => log_limited(log_limited(x)),
        }
    }
}

/// `ln(x)` clamped to 0 for non-positive results.
///
/// Raw negative logs on (0, 1) would pull a reference curve below the
/// shared scale and distort the comparison, so they are cut off rather
/// than propagated. Inputs `<= 0` also map to 0.
fn log_limited(x: f64) -> f64 {
    let l = x.ln();
    if l.is_nan() || l < 0.0 {
        0.0
    } else {
        l
    }
}

/// Min-max scale `value` from `[min, max]` into the unit interval.
///
/// Degenerate extents (`max <= min`) map everything to 0 instead of
/// dividing by zero.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.0
    }
}

/// Map `t` from the unit interval back into `[min, max]`.
pub fn denormalize(t: f64, min: f64, max: f64) -> f64 {
    min + t * (max - min)
}

/// Build the reference function scaled into the given empirical extent.
///
/// The returned function maps a nominal N to the O value at which the
/// reference curve should be drawn.
pub fn scaled(extent: Extent, reference: Reference) -> impl Fn(f64) -> f64 {
    let peak = reference.eval(REFERENCE_DOMAIN);

    move |n| {
        let t = normalize(n, extent.min_n, extent.max_n);
        let raw = reference.eval(t * REFERENCE_DOMAIN);
        let unit = if peak > 0.0 { raw / peak } else { raw };
        denormalize(unit, extent.min_o, extent.max_o)
    }
}

/// Sample the scaled reference curve as an `(n, o)` polyline.
///
/// `count` must be at least 2; the first and last points sit exactly on
/// the extent's N bounds.
pub fn sample(extent: Extent, reference: Reference, count: usize) -> Vec<(f64, f64)> {
    assert!(count >= 2, "a polyline needs at least two points");

    let f = scaled(extent, reference);
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            let n = denormalize(t, extent.min_n, extent.max_n);
            (n, f(n))
        })
        .collect()
}
