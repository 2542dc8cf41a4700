#![deny(unsafe_code)]
//! Encoding, compositing and PNG output around `qrstyle-core`.
//!
//! This crate holds everything that depends on an external codec: the
//! `qrcode` encoder behind [`SymbolEncoder`], the `image` buffers used for
//! logo compositing, and PNG encoding. [`generate`] runs the whole pipeline.

pub mod compositor;
pub mod encode;
pub mod pixel;
pub mod snapshot;

use image::{DynamicImage, RgbaImage};
use qrstyle_core::config::RenderConfig;
use qrstyle_core::encoder::{SymbolEncoder, SYMBOL_EC_LEVEL};
use qrstyle_core::error::StyleError;

pub use encode::QrEncoder;

/// Encodes `text`, renders it with `config`, and overlays `logo` if given.
///
/// Returns `StyleError::EmptyText` for empty input and `StyleError::Encode`
/// if the text does not fit in a QR symbol.
pub fn generate(
    text: &str,
    config: &RenderConfig,
    logo: Option<&DynamicImage>,
) -> Result<RgbaImage, StyleError> {
    generate_with(&QrEncoder, text, config, logo)
}

/// Like [`generate`], with a caller-supplied encoder.
pub fn generate_with(
    encoder: &dyn SymbolEncoder,
    text: &str,
    config: &RenderConfig,
    logo: Option<&DynamicImage>,
) -> Result<RgbaImage, StyleError> {
    if text.is_empty() {
        return Err(StyleError::EmptyText);
    }
    let matrix = encoder.encode(text, SYMBOL_EC_LEVEL)?;
    let canvas = qrstyle_core::render(&matrix, config)?;
    let img = pixel::canvas_to_image(canvas)?;
    Ok(match logo {
        Some(logo) => compositor::overlay_logo(&img, logo),
        None => img,
    })
}

/// Runs [`generate`] and encodes the result as PNG bytes.
pub fn generate_png(
    text: &str,
    config: &RenderConfig,
    logo: Option<&DynamicImage>,
) -> Result<Vec<u8>, StyleError> {
    snapshot::encode_png(&generate(text, config, logo)?)
}
