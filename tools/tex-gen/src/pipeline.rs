//! Generic texture pipeline: create canvas, draw, downsample, export
//!
//! A [`TextureSpec`] captures everything that varies between textures; one
//! [`generate`] call turns it into a PNG on disk.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Result;
use crate::export::write_png;
use crate::resample::{resample, ResampleFilter};
use std::fmt;
use std::path::{Path, PathBuf};

/// Draw callback invoked on the working canvas
pub type DrawFn = Box<dyn Fn(&mut Canvas) -> Result<()> + Send + Sync>;

/// Initial contents of the working canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    Transparent,
    Opaque(Color),
}

/// Everything needed to produce one texture file
pub struct TextureSpec {
    /// Identifier used on the command line
    pub name: String,
    /// Output file name relative to the asset directory
    pub file_name: String,
    /// Working canvas size (width, height)
    pub working: (u32, u32),
    /// Final texture size (width, height)
    pub output: (u32, u32),
    pub background: Background,
    pub draw: DrawFn,
}

impl TextureSpec {
    /// Square texture named after its output file (`name` + ".png")
    pub fn square(
        name: impl Into<String>,
        working: u32,
        output: u32,
        background: Background,
        draw: impl Fn(&mut Canvas) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, (working, working), (output, output), background, draw)
    }

    pub fn new(
        name: impl Into<String>,
        working: (u32, u32),
        output: (u32, u32),
        background: Background,
        draw: impl Fn(&mut Canvas) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        Self {
            file_name: format!("{name}.png"),
            name,
            working,
            output,
            background,
            draw: Box::new(draw),
        }
    }

    /// Override the output file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Draw onto a fresh working canvas
    pub fn render(&self) -> Result<Canvas> {
        let (w, h) = self.working;
        let mut canvas = match self.background {
            Background::Transparent => Canvas::new(w, h)?,
            Background::Opaque(color) => Canvas::filled(w, h, color)?,
        };
        (self.draw)(&mut canvas)?;
        Ok(canvas)
    }

    /// Render and shrink to the final size
    pub fn build(&self, filter: ResampleFilter) -> Result<Canvas> {
        let canvas = self.render()?;
        let (w, h) = self.output;
        if (w, h) == self.working {
            return Ok(canvas);
        }
        resample(&canvas, w, h, filter)
    }
}

impl fmt::Debug for TextureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureSpec")
            .field("name", &self.name)
            .field("file_name", &self.file_name)
            .field("working", &self.working)
            .field("output", &self.output)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}

/// Generate one texture into `asset_dir`, returning the written path
pub fn generate(spec: &TextureSpec, asset_dir: &Path, filter: ResampleFilter) -> Result<PathBuf> {
    tracing::debug!(
        "generating {} at {}x{}",
        spec.name,
        spec.working.0,
        spec.working.1
    );
    let texture = spec.build(filter)?;
    let path = asset_dir.join(&spec.file_name);
    write_png(&texture, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TexError;

    #[test]
    fn test_render_uses_background() {
        let spec = TextureSpec::square("bg", 8, 4, Background::Opaque(Color::WHITE), |_| Ok(()));
        assert!(spec.render().unwrap().is_uniform());
        assert_eq!(spec.render().unwrap().get_pixel(0, 0), [255; 4]);

        let spec = TextureSpec::square("clear", 8, 4, Background::Transparent, |_| Ok(()));
        assert_eq!(spec.render().unwrap().get_pixel(3, 3), [0; 4]);
    }

    #[test]
    fn test_build_downsamples() {
        let spec = TextureSpec::new("strip", (40, 20), (4, 2), Background::Transparent, |c| {
            c.fill_rect(0, 0, 20, 20, Color::BLACK);
            Ok(())
        });
        let out = spec.build(ResampleFilter::Area).unwrap();
        assert_eq!((out.width(), out.height()), (4, 2));
        assert_eq!(out.get_pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(out.get_pixel(3, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_build_skips_resample_at_final_size() {
        let spec = TextureSpec::new("ramp", (64, 2), (64, 2), Background::Transparent, |c| {
            c.set_pixel(0, 0, Color::WHITE, 0.5);
            Ok(())
        });
        let out = spec.build(ResampleFilter::Area).unwrap();
        assert_eq!(out.get_pixel(0, 0), [255, 255, 255, 128]);
    }

    #[test]
    fn test_draw_errors_propagate() {
        let spec = TextureSpec::square("bad", 8, 4, Background::Transparent, |_| {
            Err(TexError::TooFewVertices(1))
        });
        assert!(matches!(spec.render(), Err(TexError::TooFewVertices(1))));
    }

    #[test]
    fn test_file_name_defaults_to_name() {
        let spec = TextureSpec::square("rock", 8, 4, Background::Transparent, |_| Ok(()));
        assert_eq!(spec.file_name, "rock.png");
        let spec = spec.with_file_name("fc/rock.png");
        assert_eq!(spec.file_name, "fc/rock.png");
    }
}
