//! Normalized-coordinate geometry: angle convention, ring sectors, radial polygons
//!
//! Shapes are described in normalized `[0, 1]` space and scaled to a canvas by
//! multiplying by its pixel extent and rounding half up. Angles are measured
//! counter-clockwise from the +Y axis, so `sin` feeds the X offset and `cos`
//! feeds the Y offset (see [`to_cartesian`]).

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{Result, TexError};
use crate::polygon::Polygon;
use glam::{DVec2, IVec2};
use std::f64::consts::{PI, TAU};

/// Arc samples used by the fill helpers
pub const DEFAULT_ARC_SAMPLES: usize = 99;

/// Center of the canvas in normalized space
pub const CENTER: DVec2 = DVec2::new(0.5, 0.5);

/// Offset of a point at `radius` and angle `theta` (CCW from +Y)
#[inline]
pub fn to_cartesian(theta: f64, radius: f64) -> DVec2 {
    DVec2::new(theta.sin() * radius, theta.cos() * radius)
}

/// Round to nearest, ties toward +infinity
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Scale a normalized point to pixel coordinates
#[inline]
pub fn to_pixel(point: DVec2, extent: DVec2) -> IVec2 {
    IVec2::new(round_half_up(point.x * extent.x), round_half_up(point.y * extent.y))
}

/// Build a polygon from normalized vertices
pub fn normalized_polygon(points: &[DVec2], extent: DVec2) -> Result<Polygon> {
    Polygon::new(points.iter().map(|&p| to_pixel(p, extent)).collect())
}

pub(crate) fn check_radius(name: &'static str, radius: f64) -> Result<()> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(TexError::invalid(name, format!("must be > 0, got {radius}")))
    }
}

pub(crate) fn check_samples(name: &'static str, samples: usize, min: usize) -> Result<()> {
    if samples < min {
        return Err(TexError::invalid(
            name,
            format!("need at least {min}, got {samples}"),
        ));
    }
    Ok(())
}

/// A section of a circular ring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnulusSector {
    pub center: DVec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_theta: f64,
    pub end_theta: f64,
}

impl AnnulusSector {
    /// Sector centered on the canvas
    pub fn new(inner_radius: f64, outer_radius: f64, start_theta: f64, end_theta: f64) -> Self {
        Self {
            center: CENTER,
            inner_radius,
            outer_radius,
            start_theta,
            end_theta,
        }
    }

    /// Full ring swept in one pass
    pub fn full(inner_radius: f64, outer_radius: f64) -> Self {
        Self::new(inner_radius, outer_radius, 0.0, TAU)
    }

    fn validate(&self, samples: usize) -> Result<()> {
        check_samples("samples", samples, 2)?;
        check_radius("inner_radius", self.inner_radius)?;
        check_radius("outer_radius", self.outer_radius)?;
        if self.inner_radius > self.outer_radius {
            return Err(TexError::invalid(
                "inner_radius",
                format!(
                    "{} exceeds outer radius {}",
                    self.inner_radius, self.outer_radius
                ),
            ));
        }
        Ok(())
    }

    /// Outline with `samples` angles from start to end inclusive
    ///
    /// Outer-radius points come first in sweep order, then inner-radius points
    /// in reverse, giving `2 * samples` vertices.
    pub fn polygon(&self, samples: usize, extent: DVec2) -> Result<Polygon> {
        self.validate(samples)?;

        let step = (self.end_theta - self.start_theta) / (samples - 1) as f64;
        let count = 2 * samples;
        let mut points = vec![IVec2::ZERO; count];

        for i in 0..samples {
            let theta = self.start_theta + i as f64 * step;
            let outer = self.center + to_cartesian(theta, self.outer_radius);
            let inner = self.center + to_cartesian(theta, self.inner_radius);
            points[i] = to_pixel(outer, extent);
            points[count - i - 1] = to_pixel(inner, extent);
        }

        Polygon::new(points)
    }

    pub fn fill(&self, canvas: &mut Canvas, samples: usize, color: Color) -> Result<()> {
        let polygon = self.polygon(samples, canvas.extent())?;
        canvas.fill_polygon(&polygon, color);
        Ok(())
    }
}

/// Fill a ring section centered on the canvas
pub fn fill_annulus_sector(
    canvas: &mut Canvas,
    inner_radius: f64,
    outer_radius: f64,
    start_theta: f64,
    end_theta: f64,
    color: Color,
) -> Result<()> {
    AnnulusSector::new(inner_radius, outer_radius, start_theta, end_theta).fill(
        canvas,
        DEFAULT_ARC_SAMPLES,
        color,
    )
}

/// Fill a complete ring centered on the canvas
///
/// The even-odd fill cancels the coincident seam edges, so a single 0..2pi
/// sweep is enough.
pub fn fill_full_annulus(
    canvas: &mut Canvas,
    inner_radius: f64,
    outer_radius: f64,
    color: Color,
) -> Result<()> {
    AnnulusSector::full(inner_radius, outer_radius).fill(canvas, DEFAULT_ARC_SAMPLES, color)
}

/// Regular polygon or star around a center
///
/// Vertex `i` sits at angle `phase + i * 2pi / vertex_count`; even indices use
/// the outer radius and odd indices the inner one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialPolygon {
    pub center: DVec2,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub vertex_count: usize,
    pub phase: f64,
}

impl RadialPolygon {
    pub fn regular(center: DVec2, radius: f64, vertex_count: usize) -> Self {
        Self {
            center,
            outer_radius: radius,
            inner_radius: radius,
            vertex_count,
            phase: 0.0,
        }
    }

    /// Star with `points` tips, the first tip pointing up
    pub fn star(center: DVec2, outer_radius: f64, inner_radius: f64, points: usize) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius,
            vertex_count: 2 * points,
            phase: PI,
        }
    }

    /// Normalized vertex positions
    pub fn vertices(&self) -> Result<Vec<DVec2>> {
        check_samples("vertex_count", self.vertex_count, 3)?;
        check_radius("outer_radius", self.outer_radius)?;
        check_radius("inner_radius", self.inner_radius)?;

        let step = TAU / self.vertex_count as f64;
        Ok((0..self.vertex_count)
            .map(|i| {
                let radius = if i % 2 == 0 {
                    self.outer_radius
                } else {
                    self.inner_radius
                };
                self.center + to_cartesian(self.phase + i as f64 * step, radius)
            })
            .collect())
    }

    pub fn polygon(&self, extent: DVec2) -> Result<Polygon> {
        normalized_polygon(&self.vertices()?, extent)
    }

    pub fn fill(&self, canvas: &mut Canvas, color: Color) -> Result<()> {
        let polygon = self.polygon(canvas.extent())?;
        canvas.fill_polygon(&polygon, color);
        Ok(())
    }
}

/// Fill a regular polygon (equal radii) or star (distinct radii)
pub fn fill_radial_polygon(
    canvas: &mut Canvas,
    center: DVec2,
    outer_radius: f64,
    inner_radius: f64,
    vertex_count: usize,
    phase: f64,
    color: Color,
) -> Result<()> {
    RadialPolygon {
        center,
        outer_radius,
        inner_radius,
        vertex_count,
        phase,
    }
    .fill(canvas, color)
}

/// Fill a circle given a normalized center and radius
///
/// The bounding box edges are rounded independently, matching how the
/// rectangle and polygon helpers snap to pixels.
pub fn fill_disc(canvas: &mut Canvas, center: DVec2, radius: f64, color: Color) -> Result<()> {
    check_radius("radius", radius)?;
    let extent = canvas.extent();
    let min = to_pixel(center - DVec2::splat(radius), extent);
    let max = to_pixel(center + DVec2::splat(radius), extent);
    canvas.fill_oval(min.x, min.y, max.x - min.x, max.y - min.y, color);
    Ok(())
}

/// Fill the rectangle between two normalized corners
pub fn fill_rect_norm(canvas: &mut Canvas, min: DVec2, max: DVec2, color: Color) {
    let extent = canvas.extent();
    let a = to_pixel(min, extent);
    let b = to_pixel(max, extent);
    canvas.fill_rect(a.x, a.y, b.x - a.x, b.y - a.y, color);
}
