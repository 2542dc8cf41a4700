//! Module matrix to styled [`Canvas`].
//!
//! For each dark module the eye classification picks shape and color:
//! eyeballs are always square in the eye color, other eye modules use the
//! eye shape and color, everything else the dot shape and color. Light
//! modules are left as background.

use crate::canvas::{Canvas, UNIT};
use crate::color::Rgb;
use crate::config::RenderConfig;
use crate::error::StyleError;
use crate::eye::{classify, EyeClass};
use crate::matrix::ModuleMatrix;
use crate::shape::{paint_module, ShapeKind};

/// Chooses shape and color for a dark module with the given classification.
pub fn module_style(class: EyeClass, config: &RenderConfig) -> (ShapeKind, Rgb) {
    if class.is_eyeball {
        (ShapeKind::Square, config.eye_color())
    } else if class.is_eye {
        (config.eye_shape, config.eye_color())
    } else {
        (config.dot_shape, config.dot_color)
    }
}

/// Renders `matrix` into a new canvas of `(size + 2 * padding) * UNIT` pixels
/// per side, filled with the background color.
///
/// Fails with `StyleError::CanvasTooLarge` when the padded symbol would
/// exceed the canvas size limit.
pub fn render(matrix: &ModuleMatrix, config: &RenderConfig) -> Result<Canvas, StyleError> {
    let size = matrix.size();
    let mut canvas = Canvas::for_symbol(size, config.padding, config.background_color)?;
    let mut painted = 0usize;
    for (x, y) in matrix.dark_modules() {
        let (shape, color) = module_style(classify(x, y, size), config);
        paint_module(
            &mut canvas,
            (x + config.padding) * UNIT,
            (y + config.padding) * UNIT,
            shape,
            color,
        );
        painted += 1;
    }
    tracing::debug!(
        size,
        padding = config.padding,
        painted,
        width = canvas.width(),
        "rendered symbol"
    );
    Ok(canvas)
}
