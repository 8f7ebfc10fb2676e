//! RGBA drawing surface
//!
//! Every drawing operation uses a paint-over model: the fill color (including
//! its alpha) replaces the destination pixel. Nothing composites with earlier
//! fills. Coordinates outside the canvas are clipped silently.

use crate::color::Color;
use crate::error::{Result, TexError};
use crate::polygon::Polygon;
use glam::DVec2;

/// RGBA8 raster that textures are drawn into
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// RGBA pixel data (4 bytes per pixel, row-major order)
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas initialized to transparent black
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TexError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * 4],
        })
    }

    /// Create a canvas filled with an opaque background
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let mut canvas = Self::new(width, height)?;
        canvas.fill(color);
        Ok(canvas)
    }

    /// Wrap an existing RGBA8 buffer
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TexError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(TexError::invalid(
                "pixels",
                format!("expected {expected} bytes, got {}", pixels.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels, for scaling normalized coordinates
    pub fn extent(&self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64)
    }

    /// Raw RGBA8 bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Get pixel at (x, y)
    ///
    /// Panics when (x, y) lies outside the canvas.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Get mutable slice of pixel data at (x, y)
    #[inline]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let idx = self.index(x, y);
        &mut self.pixels[idx..idx + 4]
    }

    /// Write one pixel using the color's RGB and an explicit alpha
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let rgba = color.with_alpha(alpha).to_rgba8();
        self.pixel_mut(x as u32, y as u32).copy_from_slice(&rgba);
    }

    /// Paint the whole canvas
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill a horizontal run of pixels, `x_end` exclusive, already clipped
    fn fill_span(&mut self, y: u32, x_start: u32, x_end: u32, rgba: [u8; 4]) {
        let start = self.index(x_start, y);
        let end = self.index(x_end, y);
        for chunk in self.pixels[start..end].chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill the rectangle `x <= px < x + w`, `y <= py < y + h`
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let rgba = color.to_rgba8();
        for row in y0..y1 {
            self.fill_span(row as u32, x0 as u32, x1 as u32, rgba);
        }
    }

    /// Fill the axis-aligned ellipse inscribed in the given bounding box
    ///
    /// A pixel is painted when its center lies inside the ellipse.
    pub fn fill_oval(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let rx = w as f64 / 2.0;
        let ry = h as f64 / 2.0;
        let cx = x as f64 + rx;
        let cy = y as f64 + ry;

        let y0 = y.max(0);
        let y1 = y.saturating_add(h).min(self.height as i32);
        let rgba = color.to_rgba8();

        for row in y0..y1 {
            let dy = (row as f64 + 0.5 - cy) / ry;
            let t = 1.0 - dy * dy;
            if t < 0.0 {
                continue;
            }
            let half = rx * t.sqrt();
            let x_start = (cx - half - 0.5).ceil().max(0.0);
            let x_end = ((cx + half - 0.5).floor() + 1.0).min(self.width as f64);
            if x_end > x_start {
                self.fill_span(row as u32, x_start as u32, x_end as u32, rgba);
            }
        }
    }

    /// Fill a polygon with the even-odd rule
    pub fn fill_polygon(&mut self, polygon: &Polygon, color: Color) {
        let rgba = color.to_rgba8();
        let (width, height) = (self.width, self.height);
        polygon.for_each_span(width, height, |y, x0, x1| self.fill_span(y, x0, x1, rgba));
    }

    /// True when every pixel holds the same RGBA value
    pub fn is_uniform(&self) -> bool {
        let first = &self.pixels[..4];
        self.pixels.chunks_exact(4).all(|p| p == first)
    }

    /// Number of pixels matching `rgba` exactly
    pub fn count_pixels(&self, rgba: [u8; 4]) -> usize {
        self.pixels.chunks_exact(4).filter(|p| *p == rgba).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    #[test]
    fn test_canvas_new() {
        let canvas = Canvas::new(64, 32).unwrap();
        assert_eq!(canvas.width(), 64);
        assert_eq!(canvas.height(), 32);
        assert_eq!(canvas.pixels().len(), 64 * 32 * 4);
        // All pixels should be zero (transparent black)
        assert!(canvas.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Canvas::new(0, 8),
            Err(TexError::InvalidDimensions { width: 0, height: 8 })
        ));
        assert!(Canvas::new(8, 0).is_err());
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(Canvas::from_raw(2, 2, vec![0; 16]).is_ok());
        assert!(Canvas::from_raw(2, 2, vec![0; 15]).is_err());
    }

    #[test]
    fn test_filled() {
        let canvas = Canvas::filled(8, 8, RED).unwrap();
        assert!(canvas.is_uniform());
        assert_eq!(canvas.get_pixel(7, 7), [255, 0, 0, 255]);
    }

    #[test]
    fn test_set_pixel_with_alpha() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.set_pixel(2, 3, Color::WHITE, 0.4);
        assert_eq!(canvas.get_pixel(2, 3), [255, 255, 255, 102]);
        assert_eq!(canvas.get_pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.set_pixel(-1, 0, RED, 1.0);
        canvas.set_pixel(4, 0, RED, 1.0);
        canvas.set_pixel(0, 4, RED, 1.0);
        assert_eq!(canvas.count_pixels([0, 0, 0, 0]), 16);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.fill_rect(-5, 8, 8, 10, RED);
        // x in 0..3, y in 8..10
        assert_eq!(canvas.count_pixels([255, 0, 0, 255]), 6);
        assert_eq!(canvas.get_pixel(2, 9), [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(3, 9), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_rect_empty() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.fill_rect(2, 2, 0, 5, RED);
        canvas.fill_rect(2, 2, 5, -1, RED);
        canvas.fill_rect(20, 20, 5, 5, RED);
        assert_eq!(canvas.count_pixels([255, 0, 0, 255]), 0);
    }

    #[test]
    fn test_fill_replaces_rather_than_blends() {
        let mut canvas = Canvas::filled(4, 4, RED).unwrap();
        canvas.fill_rect(0, 0, 4, 4, Color::rgba(0.0, 0.0, 1.0, 0.5));
        assert_eq!(canvas.get_pixel(1, 1), [0, 0, 255, 128]);
    }

    #[test]
    fn test_fill_oval_inscribed() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        canvas.fill_oval(0, 0, 20, 20, RED);
        // Center and edge midpoints painted, corners untouched
        assert_eq!(canvas.get_pixel(10, 10), [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(0, 10), [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(19, 9), [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(canvas.get_pixel(19, 19), [0, 0, 0, 0]);

        // Area close to pi * r^2
        let painted = canvas.count_pixels([255, 0, 0, 255]) as f64;
        let expected = std::f64::consts::PI * 100.0;
        assert!((painted - expected).abs() < 0.05 * expected);
    }

    #[test]
    fn test_fill_oval_is_symmetric() {
        let mut canvas = Canvas::new(31, 17).unwrap();
        canvas.fill_oval(3, 2, 25, 13, RED);
        for y in 0..17 {
            for x in 0..31 {
                assert_eq!(canvas.get_pixel(x, y), canvas.get_pixel(30 - x, y));
                assert_eq!(canvas.get_pixel(x, y), canvas.get_pixel(x, 16 - y));
            }
        }
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let tri = Polygon::from_coords(&[0, 10, 0], &[0, 0, 10]).unwrap();
        canvas.fill_polygon(&tri, RED);
        assert_eq!(canvas.get_pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(8, 0), [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(9, 9), [0, 0, 0, 0]);
        // Centers lying exactly on the hypotenuse stay unpainted
        assert_eq!(canvas.count_pixels([255, 0, 0, 255]), 45);
    }
}
