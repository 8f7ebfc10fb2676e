//! Integer polygons and even-odd scanline rasterization

use crate::error::{Result, TexError};
use glam::IVec2;

/// A closed polygon in pixel coordinates
///
/// The last vertex connects back to the first. Self-intersecting outlines are
/// filled with the even-odd rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<IVec2>,
}

impl Polygon {
    /// Create a polygon from at least 3 vertices
    pub fn new(points: Vec<IVec2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(TexError::TooFewVertices(points.len()));
        }
        Ok(Self { points })
    }

    /// Build from parallel coordinate lists
    pub fn from_coords(xs: &[i32], ys: &[i32]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(TexError::invalid(
                "ys",
                format!("{} y coordinates for {} x coordinates", ys.len(), xs.len()),
            ));
        }
        Self::new(xs.iter().zip(ys).map(|(&x, &y)| IVec2::new(x, y)).collect())
    }

    pub fn points(&self) -> &[IVec2] {
        &self.points
    }

    /// Twice the signed area (shoelace formula)
    pub fn doubled_area(&self) -> i64 {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let p = self.points[i];
                let q = self.points[(i + 1) % n];
                p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64
            })
            .sum()
    }

    /// Visit every horizontal span covered by the polygon inside `width x height`
    ///
    /// A pixel is covered when its center lies inside the outline. The callback
    /// receives `(y, x_start, x_end)` with `x_end` exclusive.
    pub fn for_each_span(&self, width: u32, height: u32, mut span: impl FnMut(u32, u32, u32)) {
        let min_y = self.points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = self
            .points
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(0)
            .min(height as i32);

        // Reused per scanline
        let mut crossings: Vec<f64> = Vec::with_capacity(self.points.len());
        let n = self.points.len();

        for y in min_y..max_y {
            crossings.clear();
            let yc = y as f64 + 0.5;

            for i in 0..n {
                let p = self.points[i].as_dvec2();
                let q = self.points[(i + 1) % n].as_dvec2();
                if (p.y <= yc) != (q.y <= yc) {
                    crossings.push(p.x + (yc - p.y) * (q.x - p.x) / (q.y - p.y));
                }
            }

            crossings.sort_unstable_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil().max(0.0);
                let x1 = (pair[1] - 0.5).ceil().min(width as f64);
                if x1 > x0 {
                    span(y as u32, x0 as u32, x1 as u32);
                }
            }
        }
    }
}
