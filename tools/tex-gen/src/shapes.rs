//! Hand-authored outline families for button icons and props
//!
//! Each shape is a small parameter record with a `polygon` method. The defaults
//! reproduce the icons the catalog draws; callers tweak fields to get variants.

use crate::error::{Result, TexError};
use crate::geometry::{check_radius, check_samples, normalized_polygon, round_half_up};
use crate::polygon::Polygon;
use glam::{DVec2, IVec2};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI, SQRT_2};

/// Speaker icon: a rectangular neck flaring into a cone (concave hexagon)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speaker {
    /// Normalized X of the neck/cone joint
    pub joint_x: f64,
    pub center_y: f64,
    /// Total width, split evenly between neck and cone
    pub width: f64,
    /// Height of the cone mouth
    pub height: f64,
    /// Neck half-height as a fraction of `height`
    pub neck: f64,
}

impl Default for Speaker {
    fn default() -> Self {
        Self {
            joint_x: 0.4,
            center_y: 0.5,
            width: 0.3,
            height: 0.6,
            neck: 0.2,
        }
    }
}

impl Speaker {
    pub fn vertices(&self) -> [DVec2; 6] {
        let x0 = self.joint_x - self.width / 2.0;
        let x1 = self.joint_x;
        let x2 = self.joint_x + self.width / 2.0;
        let neck_top = self.center_y - self.neck * self.height;
        let neck_bottom = self.center_y + self.neck * self.height;
        let mouth_top = self.center_y - 0.5 * self.height;
        let mouth_bottom = self.center_y + 0.5 * self.height;

        [
            DVec2::new(x0, neck_top),
            DVec2::new(x1, neck_top),
            DVec2::new(x2, mouth_top),
            DVec2::new(x2, mouth_bottom),
            DVec2::new(x1, neck_bottom),
            DVec2::new(x0, neck_bottom),
        ]
    }

    pub fn polygon(&self, extent: DVec2) -> Result<Polygon> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(TexError::invalid("width", "speaker must have positive size"));
        }
        normalized_polygon(&self.vertices(), extent)
    }
}

/// Horn bell: two quarter arcs joining the lower and upper ends of the bore
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HornBell {
    /// Center of the lower arc
    pub lower_center: DVec2,
    /// Center of the upper arc
    pub upper_center: DVec2,
    pub radius: f64,
    /// Samples per quarter arc
    pub samples: usize,
}

impl Default for HornBell {
    fn default() -> Self {
        Self {
            lower_center: DVec2::new(0.36, 0.64),
            upper_center: DVec2::new(0.36, 0.24),
            radius: 0.18,
            samples: 13,
        }
    }
}

impl HornBell {
    pub fn vertices(&self) -> Result<Vec<DVec2>> {
        check_samples("samples", self.samples, 2)?;
        check_radius("radius", self.radius)?;

        let n = self.samples;
        let mut points = vec![DVec2::ZERO; 2 * n];
        for i in 0..n {
            let theta = FRAC_PI_2 * i as f64 / (n - 1) as f64;
            let (sin, cos) = theta.sin_cos();
            let r = self.radius;
            points[i] = self.lower_center - DVec2::new(r * cos, r * sin);
            points[i + n] = self.upper_center + DVec2::new(-r * sin, r * cos);
        }
        Ok(points)
    }

    pub fn polygon(&self, extent: DVec2) -> Result<Polygon> {
        normalized_polygon(&self.vertices()?, extent)
    }
}

/// Double coil of a horn: a band looping around two arc centers
///
/// Inner-radius half arcs run left then right, outer-radius half arcs return,
/// so the band crosses itself between the centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HornCoil {
    pub left_center: DVec2,
    pub right_center: DVec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Samples per half arc
    pub samples: usize,
}

impl Default for HornCoil {
    fn default() -> Self {
        Self {
            left_center: DVec2::new(0.45, 0.58),
            right_center: DVec2::new(0.66, 0.58),
            inner_radius: 0.12,
            outer_radius: 0.16,
            samples: 25,
        }
    }
}

impl HornCoil {
    pub fn vertices(&self) -> Result<Vec<DVec2>> {
        check_samples("samples", self.samples, 2)?;
        check_radius("inner_radius", self.inner_radius)?;
        check_radius("outer_radius", self.outer_radius)?;
        if self.inner_radius >= self.outer_radius {
            return Err(TexError::invalid(
                "inner_radius",
                "coil inner radius must be below its outer radius",
            ));
        }

        let n = self.samples;
        let (r, rr) = (self.inner_radius, self.outer_radius);
        let (left, right) = (self.left_center, self.right_center);
        let mut points = vec![DVec2::ZERO; 4 * n];
        for i in 0..n {
            let theta = PI * i as f64 / (n - 1) as f64;
            let (sin, cos) = theta.sin_cos();
            points[i] = left - DVec2::new(r * sin, r * cos);
            points[i + n] = right + DVec2::new(r * sin, r * cos);
            points[i + 2 * n] = right + DVec2::new(rr * sin, -rr * cos);
            points[i + 3 * n] = left + DVec2::new(-rr * sin, rr * cos);
        }
        Ok(points)
    }

    pub fn polygon(&self, extent: DVec2) -> Result<Polygon> {
        normalized_polygon(&self.vertices()?, extent)
    }
}

/// Half disc bulging toward -X, flat side vertical (horn mouthpiece)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfDisc {
    pub center: DVec2,
    pub radius: f64,
    pub samples: usize,
}

impl HalfDisc {
    pub fn vertices(&self) -> Result<Vec<DVec2>> {
        check_samples("samples", self.samples, 3)?;
        check_radius("radius", self.radius)?;

        let n = self.samples;
        Ok((0..n)
            .map(|i| {
                let theta = PI * i as f64 / (n - 1) as f64;
                let (sin, cos) = theta.sin_cos();
                self.center - DVec2::new(self.radius * sin, self.radius * cos)
            })
            .collect())
    }

    pub fn polygon(&self, extent: DVec2) -> Result<Polygon> {
        normalized_polygon(&self.vertices()?, extent)
    }
}

/// Diagonal "X" built from four arms of three vertices each
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cross {
    pub center: DVec2,
    /// Arm length from the center
    pub arm: f64,
    /// Half thickness of each arm
    pub thickness: f64,
}

impl Cross {
    pub fn vertices(&self) -> Result<[DVec2; 12]> {
        check_radius("arm", self.arm)?;
        check_radius("thickness", self.thickness)?;

        let (c, arm, thi) = (self.center, self.arm, self.thickness);
        let mut points = [DVec2::ZERO; 12];
        for k in 0..4 {
            let theta = (0.25 - 0.5 * k as f64) * PI;
            let (sin, cos) = theta.sin_cos();
            points[3 * k] = c + DVec2::new(thi * sin + thi * cos, -thi * sin + thi * cos);
            points[3 * k + 1] = c + DVec2::new(arm * sin + thi * cos, -thi * sin + arm * cos);
            points[3 * k + 2] = c + DVec2::new(arm * sin - thi * cos, thi * sin + arm * cos);
        }
        Ok(points)
    }

    pub fn polygon(&self, extent: DVec2) -> Result<Polygon> {
        normalized_polygon(&self.vertices()?, extent)
    }
}

/// Rectangle with 45-degree chamfered corners, in pixel coordinates
///
/// Sized so the chamfers and the short sides form a regular octagon profile
/// across the height: each short side is `height / (1 + sqrt 2)`.
pub fn chamfered_rect(left: f64, top: f64, right: f64, bottom: f64) -> Result<Polygon> {
    let height = bottom - top;
    if right <= left || height <= 0.0 {
        return Err(TexError::invalid(
            "bounds",
            format!("empty rectangle ({left}, {top})..({right}, {bottom})"),
        ));
    }
    let side = height / (1.0 + SQRT_2);
    let leg = FRAC_1_SQRT_2 * side;

    let (l, r) = (round_half_up(left), round_half_up(right));
    let (t, b) = (round_half_up(top), round_half_up(bottom));
    let (x1, x2) = (round_half_up(left + leg), round_half_up(right - leg));
    let (y1, y2) = (round_half_up(top + leg), round_half_up(bottom - leg));

    Polygon::new(vec![
        IVec2::new(l, y1),
        IVec2::new(x1, t),
        IVec2::new(x2, t),
        IVec2::new(r, y1),
        IVec2::new(r, y2),
        IVec2::new(x2, b),
        IVec2::new(x1, b),
        IVec2::new(l, y2),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::color::Color;

    const EXTENT: DVec2 = DVec2::new(2048.0, 2048.0);

    #[test]
    fn test_speaker_default_vertices() {
        let poly = Speaker::default().polygon(EXTENT).unwrap();
        let pts: Vec<(i32, i32)> = poly.points().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            pts,
            vec![
                (512, 778),
                (819, 778),
                (1126, 410),
                (1126, 1638),
                (819, 1270),
                (512, 1270)
            ]
        );
    }

    #[test]
    fn test_speaker_is_concave() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.fill_polygon(&Speaker::default().polygon(canvas.extent()).unwrap(), Color::WHITE);
        // Neck is painted, space above the neck is not, cone mouth is
        assert_eq!(canvas.get_pixel(30, 50), [255; 4]);
        assert_eq!(canvas.get_pixel(30, 30), [0; 4]);
        assert_eq!(canvas.get_pixel(54, 25), [255; 4]);
    }

    #[test]
    fn test_horn_bell_endpoints() {
        let bell = HornBell::default();
        let verts = bell.vertices().unwrap();
        assert_eq!(verts.len(), 26);
        // Lower arc starts left of its center, ends straight above it
        assert!((verts[0] - DVec2::new(0.18, 0.64)).length() < 1e-12);
        assert!((verts[12] - DVec2::new(0.36, 0.46)).length() < 1e-12);
        // Upper arc starts straight below its center, ends left of it
        assert!((verts[13] - DVec2::new(0.36, 0.42)).length() < 1e-12);
        assert!((verts[25] - DVec2::new(0.18, 0.24)).length() < 1e-12);
    }

    #[test]
    fn test_horn_coil_vertex_radii() {
        let coil = HornCoil::default();
        let verts = coil.vertices().unwrap();
        assert_eq!(verts.len(), 100);
        for i in 0..25 {
            assert!((verts[i].distance(coil.left_center) - 0.12).abs() < 1e-12);
            assert!((verts[i + 25].distance(coil.right_center) - 0.12).abs() < 1e-12);
            assert!((verts[i + 50].distance(coil.right_center) - 0.16).abs() < 1e-12);
            assert!((verts[i + 75].distance(coil.left_center) - 0.16).abs() < 1e-12);
        }
    }

    #[test]
    fn test_horn_coil_rejects_inverted_radii() {
        let coil = HornCoil {
            inner_radius: 0.2,
            ..HornCoil::default()
        };
        assert!(coil.vertices().is_err());
        let coil = HornCoil {
            samples: 1,
            ..HornCoil::default()
        };
        assert!(coil.vertices().is_err());
    }

    #[test]
    fn test_half_disc_spans_diameter() {
        let disc = HalfDisc {
            center: DVec2::new(0.88, 0.44),
            radius: 0.05,
            samples: 13,
        };
        let verts = disc.vertices().unwrap();
        assert!((verts[0] - DVec2::new(0.88, 0.39)).length() < 1e-12);
        assert!((verts[6] - DVec2::new(0.83, 0.44)).length() < 1e-12);
        assert!((verts[12] - DVec2::new(0.88, 0.49)).length() < 1e-12);
    }

    #[test]
    fn test_cross_is_point_symmetric() {
        let cross = Cross {
            center: DVec2::new(0.7, 0.5),
            arm: 0.12,
            thickness: 0.02,
        };
        let verts = cross.vertices().unwrap();
        for k in 0..6 {
            let a = verts[k] - cross.center;
            let b = verts[k + 6] - cross.center;
            assert!((a + b).length() < 1e-12);
        }
        let mut canvas = Canvas::new(200, 200).unwrap();
        canvas.fill_polygon(&cross.polygon(canvas.extent()).unwrap(), Color::WHITE);
        assert_eq!(canvas.get_pixel(140, 100), [255; 4]);
        // Diagonal arm painted, axis-aligned gap between arms is not
        assert_eq!(canvas.get_pixel(155, 115), [255; 4]);
        assert_eq!(canvas.get_pixel(160, 100), [0; 4]);
    }

    #[test]
    fn test_chamfered_rect() {
        let poly = chamfered_rect(0.0, 0.0, 1280.0, 640.0).unwrap();
        let pts = poly.points();
        assert_eq!(pts.len(), 8);
        // leg = 640 / (1 + sqrt 2) / sqrt 2 = 187.45
        assert_eq!(pts[0], IVec2::new(0, 187));
        assert_eq!(pts[1], IVec2::new(187, 0));
        assert_eq!(pts[2], IVec2::new(1093, 0));
        assert_eq!(pts[4], IVec2::new(1280, 453));
        assert!(chamfered_rect(10.0, 0.0, 5.0, 10.0).is_err());
    }
}
