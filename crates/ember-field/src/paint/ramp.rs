use crate::error::{FieldError, Result};

use super::Color;

/// A single ramp stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// 1D piecewise-linear colour lookup.
///
/// Invariants (checked by `new`):
/// - at least two stops
/// - stop positions finite and non-decreasing
///
/// Positions outside the stop range clamp to the edge colours.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
}

/// The flame palette: deep indigo through magenta and peach to near-white.
const FLAME_STOPS: [&str; 5] = ["#090033", "#5f1f93", "#e02e96", "#ffbd80", "#fff0db"];

impl ColorRamp {
    pub fn new(stops: Vec<ColorStop>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(FieldError::InvalidRamp("needs at least two stops"));
        }
        if !stops.iter().all(|s| s.t.is_finite() && s.color.is_finite()) {
            return Err(FieldError::InvalidRamp("stops must be finite"));
        }
        if stops.windows(2).any(|w| w[1].t < w[0].t) {
            return Err(FieldError::InvalidRamp("stops must be sorted by position"));
        }
        Ok(Self { stops })
    }

    /// Evenly spaced stops from sRGB hex literals.
    pub fn from_hex_stops(literals: &[&str]) -> Result<Self> {
        let last = literals.len().saturating_sub(1).max(1) as f32;
        let stops = literals
            .iter()
            .enumerate()
            .map(|(i, lit)| Ok(ColorStop::new(i as f32 / last, Color::from_hex(lit)?)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(stops)
    }

    /// The gradient used by the liquid flame.
    pub fn flame() -> Result<Self> {
        Self::from_hex_stops(&FLAME_STOPS)
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Samples the ramp at `t`. NaN yields the first stop.
    pub fn sample(&self, t: f32) -> Color {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if t.is_nan() || t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        // First stop strictly past t; exists because t < last.t.
        let hi = self.stops.partition_point(|s| s.t <= t);
        let (a, b) = (self.stops[hi - 1], self.stops[hi]);
        let span = b.t - a.t;
        if span <= 0.0 {
            return b.color;
        }
        a.color.lerp(b.color, (t - a.t) / span)
    }
}
