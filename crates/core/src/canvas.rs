//! RGBA8 pixel canvas that rendered modules are painted into.
//!
//! A [`Canvas`] is owned by a single render call. Drawing primitives clip
//! silently: writes outside the buffer are dropped rather than reported.

use crate::color::Rgb;
use crate::error::StyleError;

/// Pixel edge length of one module cell.
pub const UNIT: usize = 10;

/// Largest accepted canvas edge, in pixels.
pub const MAX_CANVAS_SIDE: usize = 8192;

/// A mutable RGBA8 buffer, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    ///
    /// Returns `StyleError::InvalidDimensions` if either dimension is zero
    /// or the byte length would overflow `usize`, and
    /// `StyleError::CanvasTooLarge` if either exceeds [`MAX_CANVAS_SIDE`].
    pub fn new(width: usize, height: usize, background: Rgb) -> Result<Self, StyleError> {
        if width == 0 || height == 0 {
            return Err(StyleError::InvalidDimensions);
        }
        if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            return Err(StyleError::CanvasTooLarge {
                width,
                height,
                max: MAX_CANVAS_SIDE,
            });
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(StyleError::InvalidDimensions)?;
        let data = background.to_rgba().into_iter().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a square canvas for a symbol of `size` modules with `padding`
    /// blank modules on every side: `(size + 2 * padding) * UNIT` pixels.
    ///
    /// Sides past [`MAX_CANVAS_SIDE`] (including arithmetic overflow) are
    /// rejected with `StyleError::CanvasTooLarge` before anything is allocated.
    pub fn for_symbol(size: usize, padding: usize, background: Rgb) -> Result<Self, StyleError> {
        let side = padding
            .saturating_mul(2)
            .saturating_add(size)
            .saturating_mul(UNIT);
        Self::new(side, side, background)
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the canvas and returns its RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns the RGBA value at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[i..i + 4]);
        Some(px)
    }

    /// Writes one pixel; coordinates outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: isize, y: isize, color: Rgb) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&color.to_rgba());
    }

    /// Fills the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the canvas.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: Rgb) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let rgba = color.to_rgba();
        for y in y0..y1 {
            let row = y * self.width * 4;
            for px in self.data[row + x0 * 4..row + x1 * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }
}
