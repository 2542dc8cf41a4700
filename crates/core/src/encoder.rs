//! The seam between the renderer and the QR symbol encoder.
//!
//! Encoding text into modules is delegated to an external library; this trait
//! is the only thing the rest of the system knows about it.

use crate::error::StyleError;
use crate::matrix::ModuleMatrix;

/// QR error-correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcLevel {
    Low,
    Medium,
    Quartile,
    High,
}

/// Error-correction level used for every rendered symbol.
pub const SYMBOL_EC_LEVEL: EcLevel = EcLevel::Medium;

/// Encodes text into a QR module matrix.
///
/// This trait is object-safe: use `&dyn SymbolEncoder` to swap encoders.
pub trait SymbolEncoder {
    /// Encodes `text` at the given error-correction level.
    ///
    /// Returns `StyleError::Encode` if the encoder rejects the input.
    fn encode(&self, text: &str, level: EcLevel) -> Result<ModuleMatrix, StyleError>;
}
