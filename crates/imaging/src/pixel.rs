//! Conversion from the core [`Canvas`] to an `image` buffer.

use image::RgbaImage;
use qrstyle_core::canvas::Canvas;
use qrstyle_core::error::StyleError;

/// Moves the canvas bytes into an [`RgbaImage`] of the same dimensions.
///
/// Returns `StyleError::InvalidDimensions` if the canvas dimensions overflow `u32`.
pub fn canvas_to_image(canvas: Canvas) -> Result<RgbaImage, StyleError> {
    let w = u32::try_from(canvas.width()).map_err(|_| StyleError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| StyleError::InvalidDimensions)?;
    RgbaImage::from_raw(w, h, canvas.into_raw())
        .ok_or_else(|| StyleError::Image("RGBA buffer size mismatch".into()))
}
