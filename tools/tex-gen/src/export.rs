//! PNG export (and re-import) for canvases

use crate::canvas::Canvas;
use crate::error::{Result, TexError};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a Canvas to an RGBA8 PNG file
///
/// Missing parent directories are created. On failure the file may be left
/// partially written.
///
/// # Example
/// ```no_run
/// use tex_gen::{Canvas, Color, write_png};
/// use std::path::Path;
///
/// let canvas = Canvas::filled(64, 64, Color::rgb(1.0, 0.0, 0.0))?;
/// write_png(&canvas, Path::new("build/red.png"))?;
/// # Ok::<(), tex_gen::TexError>(())
/// ```
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(&mut w, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(canvas.pixels())?;
    writer.finish()?;
    // Dropping a BufWriter swallows its flush error
    w.flush()?;

    tracing::info!(
        "wrote {} ({}x{})",
        path.display(),
        canvas.width(),
        canvas.height()
    );
    Ok(())
}

/// Read an 8-bit RGBA PNG back into a Canvas
pub fn read_png(path: &Path) -> Result<Canvas> {
    let file = File::open(path)?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    if info.color_type != png::ColorType::Rgba || info.bit_depth != png::BitDepth::Eight {
        return Err(TexError::UnsupportedFormat(format!(
            "{:?} at {:?} bits",
            info.color_type, info.bit_depth
        )));
    }
    buf.truncate(info.buffer_size());

    Canvas::from_raw(info.width, info.height, buf)
}
