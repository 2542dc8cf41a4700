//! Square grid of dark/light QR modules.
//!
//! A `ModuleMatrix` is produced once by an encoder and then only read. Modules
//! are stored row-major; `true` means dark.

use crate::error::StyleError;

/// Smallest symbol size the renderer accepts (QR version 1).
pub const MIN_SYMBOL_SIZE: usize = 21;

/// An immutable N x N grid of QR modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Builds a matrix from row-major module data.
    ///
    /// Returns `StyleError::InvalidDimensions` if `size` is below
    /// [`MIN_SYMBOL_SIZE`] or `size * size` overflows, and
    /// `StyleError::DimensionMismatch` if `modules` has the wrong length.
    pub fn from_modules(size: usize, modules: Vec<bool>) -> Result<Self, StyleError> {
        if size < MIN_SYMBOL_SIZE {
            return Err(StyleError::InvalidDimensions);
        }
        let expected = size
            .checked_mul(size)
            .ok_or(StyleError::InvalidDimensions)?;
        if modules.len() != expected {
            return Err(StyleError::DimensionMismatch {
                expected,
                got: modules.len(),
            });
        }
        Ok(Self { size, modules })
    }

    /// Builds a matrix by evaluating `dark(x, y)` for every module.
    pub fn from_fn(
        size: usize,
        mut dark: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, StyleError> {
        if size < MIN_SYMBOL_SIZE {
            return Err(StyleError::InvalidDimensions);
        }
        let modules = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .map(|(x, y)| dark(x, y))
            .collect();
        Self::from_modules(size, modules)
    }

    /// Number of modules per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns whether the module at `(x, y)` is dark. Out-of-range
    /// coordinates read as light.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        self.modules[y * self.size + x]
    }

    /// Iterates over the coordinates of every dark module in row-major order.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(move |(i, _)| (i % self.size, i / self.size))
    }

    /// Read-only access to the row-major module data.
    pub fn modules(&self) -> &[bool] {
        &self.modules
    }
}
