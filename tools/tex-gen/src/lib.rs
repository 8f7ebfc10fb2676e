//! Raster primitives for procedural game textures
//!
//! Textures are drawn with flat-colored rectangles, ovals and polygons on a
//! large working [`Canvas`], shrunk with an area filter, and written as PNG.
//! Geometry is laid out in normalized `[0, 1]` coordinates so the same shape
//! code targets any working resolution.
//!
//! # Example
//! ```no_run
//! use tex_gen::*;
//! use std::path::Path;
//!
//! // A dial face: dark ring with a red zone
//! let spec = TextureSpec::square("dial", 2048, 201, Background::Transparent, |canvas| {
//!     fill_full_annulus(canvas, 0.3, 0.482, Color::BLACK)?;
//!     fill_annulus_sector(canvas, 0.44, 0.482, 0.0, std::f64::consts::FRAC_PI_2,
//!         Color::rgb(0.7, 0.0, 0.0))?;
//!     Ok(())
//! });
//!
//! generate(&spec, Path::new("build"), ResampleFilter::Area)?;
//! # Ok::<(), TexError>(())
//! ```

mod canvas;
mod color;
mod error;
mod export;
mod geometry;
mod pipeline;
mod polygon;
mod ramp;
mod resample;
mod shapes;

// Core types
pub use canvas::Canvas;
pub use color::Color;
pub use error::{Result, TexError};
pub use polygon::Polygon;

// Geometry
pub use geometry::{
    fill_annulus_sector, fill_disc, fill_full_annulus, fill_radial_polygon, fill_rect_norm,
    normalized_polygon, round_half_up, to_cartesian, to_pixel, AnnulusSector, RadialPolygon,
    CENTER, DEFAULT_ARC_SAMPLES,
};
pub use shapes::{chamfered_rect, Cross, HalfDisc, HornBell, HornCoil, Speaker};

// Opacity curves
pub use ramp::{radial_falloff, AlphaRamp};

// Resampling and export
pub use export::{read_png, write_png};
pub use resample::{downsample, resample, ResampleFilter};

// Pipeline
pub use pipeline::{generate, Background, DrawFn, TextureSpec};

// Re-exported so callers build points with the same glam version
pub use glam::{DVec2, IVec2};
