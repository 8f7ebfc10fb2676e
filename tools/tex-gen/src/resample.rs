//! Downsampling from the working canvas to the final texture size
//!
//! The default filter averages every source pixel by the fraction of its area
//! that falls inside each output pixel. Color is accumulated premultiplied by
//! alpha so transparent regions do not darken the edges of opaque shapes.

use crate::canvas::Canvas;
use crate::error::{Result, TexError};
use image::imageops::{self, FilterType};
use image::Rgba32FImage;

/// Resampling filter used to shrink a working canvas
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResampleFilter {
    /// Exact area averaging with premultiplied alpha
    #[default]
    Area,
    /// Windowed sinc via the `image` crate, premultiplied like `Area` (sharper edges)
    Lanczos3,
}

/// Shrink `canvas` to exactly `width x height` with area averaging
pub fn downsample(canvas: &Canvas, width: u32, height: u32) -> Result<Canvas> {
    resample(canvas, width, height, ResampleFilter::Area)
}

/// Shrink `canvas` to exactly `width x height` with the chosen filter
pub fn resample(canvas: &Canvas, width: u32, height: u32, filter: ResampleFilter) -> Result<Canvas> {
    if width == 0 || height == 0 || width > canvas.width() || height > canvas.height() {
        return Err(TexError::InvalidTarget {
            target_w: width,
            target_h: height,
            source_w: canvas.width(),
            source_h: canvas.height(),
        });
    }

    tracing::debug!(
        "resampling {}x{} -> {}x{} ({:?})",
        canvas.width(),
        canvas.height(),
        width,
        height,
        filter
    );

    if width == canvas.width() && height == canvas.height() {
        return Ok(canvas.clone());
    }

    match filter {
        ResampleFilter::Area => area_average(canvas, width, height),
        ResampleFilter::Lanczos3 => lanczos(canvas, width, height),
    }
}

/// Source indices and coverage weights for each output index along one axis
///
/// Weights for one output sum to 1.
fn axis_weights(src: u32, dst: u32) -> Vec<Vec<(usize, f64)>> {
    let scale = src as f64 / dst as f64;
    (0..dst)
        .map(|o| {
            let start = o as f64 * scale;
            let end = (o + 1) as f64 * scale;
            let first = start.floor() as u32;
            let last = (end.ceil() as u32).min(src);
            (first..last)
                .filter_map(|s| {
                    let lo = start.max(s as f64);
                    let hi = end.min(s as f64 + 1.0);
                    let w = hi - lo;
                    (w > 0.0).then_some((s as usize, w / scale))
                })
                .collect()
        })
        .collect()
}

fn area_average(canvas: &Canvas, width: u32, height: u32) -> Result<Canvas> {
    let src_w = canvas.width() as usize;
    let src_h = canvas.height() as usize;
    let dst_w = width as usize;
    let dst_h = height as usize;
    let columns = axis_weights(canvas.width(), width);
    let rows = axis_weights(canvas.height(), height);
    let src = canvas.pixels();

    // Horizontal pass: premultiplied [r, g, b, a] per (output column, source row)
    let mut horizontal = vec![[0.0f64; 4]; dst_w * src_h];
    for y in 0..src_h {
        let row = &src[y * src_w * 4..(y + 1) * src_w * 4];
        for (ox, weights) in columns.iter().enumerate() {
            let mut acc = [0.0f64; 4];
            for &(sx, w) in weights {
                let p = &row[sx * 4..sx * 4 + 4];
                let a = p[3] as f64 / 255.0;
                acc[0] += w * p[0] as f64 * a;
                acc[1] += w * p[1] as f64 * a;
                acc[2] += w * p[2] as f64 * a;
                acc[3] += w * a;
            }
            horizontal[y * dst_w + ox] = acc;
        }
    }

    // Vertical pass, then un-premultiply
    let mut pixels = vec![0u8; dst_w * dst_h * 4];
    for (oy, weights) in rows.iter().enumerate() {
        for ox in 0..dst_w {
            let mut acc = [0.0f64; 4];
            for &(sy, w) in weights {
                let h = horizontal[sy * dst_w + ox];
                for c in 0..4 {
                    acc[c] += w * h[c];
                }
            }

            let out = &mut pixels[(oy * dst_w + ox) * 4..(oy * dst_w + ox) * 4 + 4];
            let alpha = acc[3];
            if alpha > 0.0 {
                for c in 0..3 {
                    out[c] = to_channel(acc[c] / alpha);
                }
            }
            out[3] = to_channel(alpha * 255.0);
        }
    }

    Canvas::from_raw(width, height, pixels)
}

#[inline]
fn to_channel(v: f64) -> u8 {
    (v + 0.5).clamp(0.0, 255.0) as u8
}

/// Lanczos3 via the `image` crate on premultiplied float RGBA
fn lanczos(canvas: &Canvas, width: u32, height: u32) -> Result<Canvas> {
    let premultiplied: Vec<f32> = canvas
        .pixels()
        .chunks_exact(4)
        .flat_map(|p| {
            let a = p[3] as f32 / 255.0;
            [
                p[0] as f32 / 255.0 * a,
                p[1] as f32 / 255.0 * a,
                p[2] as f32 / 255.0 * a,
                a,
            ]
        })
        .collect();
    let image = Rgba32FImage::from_raw(canvas.width(), canvas.height(), premultiplied)
        .ok_or_else(|| TexError::invalid("canvas", "pixel buffer does not match its dimensions"))?;
    let resized = imageops::resize(&image, width, height, FilterType::Lanczos3);

    // The kernel rings, so clamp before and after un-premultiplying
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for p in resized.pixels() {
        let alpha = p[3].clamp(0.0, 1.0) as f64;
        let a8 = to_channel(alpha * 255.0);
        if a8 == 0 {
            pixels.extend_from_slice(&[0; 4]);
            continue;
        }
        for c in 0..3 {
            pixels.push(to_channel(p[c].max(0.0) as f64 / alpha * 255.0));
        }
        pixels.push(a8);
    }
    Canvas::from_raw(width, height, pixels)
}
