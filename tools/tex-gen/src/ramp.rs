//! Piecewise-linear opacity curves

use crate::error::{Result, TexError};

/// Piecewise-linear function through ordered `(x, y)` breakpoints
///
/// Outside the breakpoint range the first and last segments are extended.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaRamp {
    points: Vec<(f32, f32)>,
}

impl AlphaRamp {
    /// At least two breakpoints with strictly increasing x
    pub fn new(points: Vec<(f32, f32)>) -> Result<Self> {
        if points.len() < 2 {
            return Err(TexError::invalid(
                "breakpoints",
                format!("need at least 2, got {}", points.len()),
            ));
        }
        if let Some(pair) = points.windows(2).find(|w| w[1].0 <= w[0].0) {
            return Err(TexError::invalid(
                "breakpoints",
                format!("x must increase, found {} then {}", pair[0].0, pair[1].0),
            ));
        }
        Ok(Self { points })
    }

    pub fn breakpoints(&self) -> &[(f32, f32)] {
        &self.points
    }

    /// Evaluate the curve at `x`
    pub fn eval(&self, x: f32) -> f32 {
        // Last segment whose start is strictly left of x, first segment otherwise
        let last = self.points.len() - 2;
        let seg = self.points[1..=last]
            .iter()
            .rposition(|&(xi, _)| x > xi)
            .map_or(0, |i| i + 1);
        self.segment(seg, x)
    }

    /// Evaluate segment `index` (between breakpoints `index` and `index + 1`)
    fn segment(&self, index: usize, x: f32) -> f32 {
        let (x0, y0) = self.points[index];
        let (x1, y1) = self.points[index + 1];
        if x == x0 {
            return y0;
        }
        if x == x1 {
            return y1;
        }
        let slope = (y1 - y0) / (x1 - x0);
        y0 + slope * (x - x0)
    }
}

/// Opacity that fades from 1 at the center to 0 at unit distance
#[inline]
pub fn radial_falloff(dx: f32, dy: f32) -> f32 {
    (1.0 - dx.hypot(dy)).clamp(0.0, 1.0)
}
