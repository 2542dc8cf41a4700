//! Error types for qrstyle.

use thiserror::Error;

/// Errors produced while encoding, rendering or writing a styled QR image.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A module matrix or canvas was built with a zero, undersized or
    /// overflowing size.
    #[error("invalid dimensions")]
    InvalidDimensions,

    /// A canvas would exceed the per-side pixel limit.
    #[error("canvas too large: {width}x{height} pixels, limit is {max} per side")]
    CanvasTooLarge { width: usize, height: usize, max: usize },

    /// Module data did not match the declared symbol size.
    #[error("dimension mismatch: expected {expected} modules, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// No text was supplied to encode.
    #[error("no text to encode")]
    EmptyText,

    /// The QR encoder rejected the input (typically data too long).
    #[error("encode error: {0}")]
    Encode(String),

    /// An image could not be decoded or converted.
    #[error("image error: {0}")]
    Image(String),

    /// An I/O error (file read/write, PNG encoding).
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_is_generic() {
        let msg = StyleError::InvalidDimensions.to_string();
        assert_eq!(msg, "invalid dimensions");
    }

    #[test]
    fn canvas_too_large_includes_size_and_limit() {
        let err = StyleError::CanvasTooLarge {
            width: 9000,
            height: 9000,
            max: 8192,
        };
        let msg = err.to_string();
        assert!(msg.contains("9000x9000"), "missing size in: {msg}");
        assert!(msg.contains("8192"), "missing limit in: {msg}");
    }

    #[test]
    fn dimension_mismatch_includes_both_counts() {
        let err = StyleError::DimensionMismatch {
            expected: 441,
            got: 440,
        };
        let msg = format!("{err}");
        assert!(msg.contains("441"), "missing expected count in: {msg}");
        assert!(msg.contains("440"), "missing actual count in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let msg = StyleError::InvalidColor("#zzzzzz".into()).to_string();
        assert!(msg.contains("#zzzzzz"), "missing input in: {msg}");
    }

    #[test]
    fn encode_includes_message() {
        let msg = StyleError::Encode("data too long".into()).to_string();
        assert!(msg.contains("data too long"), "missing message in: {msg}");
    }

    #[test]
    fn style_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StyleError>();
    }

    #[test]
    fn style_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<StyleError>();
    }
}
