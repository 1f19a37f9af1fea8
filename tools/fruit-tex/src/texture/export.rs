//! PNG export for pixel buffers

use super::PixelBuffer;
use crate::error::PersistError;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a PixelBuffer to an 8-bit RGB PNG file
///
/// The parent directory must already exist; [`crate::batch::PngSink`]
/// takes care of creating it.
///
/// # Example
/// ```no_run
/// use fruit_tex::texture::{generate, write_png, Color, GradientKind};
/// use std::path::Path;
///
/// let tex = generate(64, Color::new(255, 0, 0), GradientKind::Radial)?;
/// write_png(&tex, Path::new("red.png"))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_png(texture: &PixelBuffer, path: &Path) -> Result<(), PersistError> {
    let file = File::create(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, texture.width(), texture.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut writer = encoder
        .write_header()
        .map_err(|e| PersistError::encode(path, e))?;

    writer
        .write_image_data(texture.as_bytes())
        .map_err(|e| PersistError::encode(path, e))?;

    writer.finish().map_err(|e| PersistError::encode(path, e))?;

    Ok(())
}
