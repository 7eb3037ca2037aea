//! PNG export for rendered buffers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::error::RenderError;

/// Encode `buffer` as an 8-bit RGBA PNG into `writer`.
pub fn encode_png<W: Write>(buffer: &PixelBuffer, writer: W) -> Result<(), RenderError> {
    let mut encoder = png::Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header().map_err(RenderError::Encode)?;
    png_writer
        .write_image_data(&buffer.to_rgba8())
        .map_err(RenderError::Encode)?;
    png_writer.finish().map_err(RenderError::Encode)
}

/// Write `buffer` to `path` as a PNG, creating parent directories.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(RenderError::Io)?;
    }

    let file = File::create(path).map_err(RenderError::Io)?;
    let mut writer = BufWriter::new(file);
    encode_png(buffer, &mut writer)?;
    writer.flush().map_err(RenderError::Io)?;

    tracing::info!(path = %path.display(), width = buffer.width(), height = buffer.height(), "wrote png");
    Ok(())
}
