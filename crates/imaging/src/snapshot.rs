//! PNG output and logo input.
//!
//! Logos may be any format the enabled `image` codecs understand; output is
//! always PNG.

use image::{DynamicImage, ImageFormat, RgbaImage};
use qrstyle_core::error::StyleError;
use std::io::Cursor;
use std::path::Path;

/// Encodes an image as PNG bytes.
///
/// Returns `StyleError::Io` if the encoder fails.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, StyleError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| StyleError::Io(e.to_string()))?;
    Ok(bytes)
}

/// Writes an image as a PNG file.
///
/// Returns `StyleError::Io` on write failure.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<(), StyleError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| StyleError::Io(format!("{}: {e}", path.display())))
}

/// Decodes a logo from in-memory bytes, guessing the format.
pub fn decode_logo(bytes: &[u8]) -> Result<DynamicImage, StyleError> {
    image::load_from_memory(bytes).map_err(|e| StyleError::Image(format!("cannot decode logo: {e}")))
}

/// Reads and decodes a logo file.
///
/// A missing or unreadable file is `StyleError::Io`; undecodable content is
/// `StyleError::Image`.
pub fn open_logo(path: &Path) -> Result<DynamicImage, StyleError> {
    let bytes =
        std::fs::read(path).map_err(|e| StyleError::Io(format!("{}: {e}", path.display())))?;
    decode_logo(&bytes)
}
