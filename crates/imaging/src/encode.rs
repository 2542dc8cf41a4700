//! QR symbol encoding backed by the `qrcode` crate.

use qrstyle_core::encoder::{EcLevel, SymbolEncoder};
use qrstyle_core::error::StyleError;
use qrstyle_core::matrix::ModuleMatrix;

/// [`SymbolEncoder`] implementation using the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

fn to_qr_level(level: EcLevel) -> qrcode::EcLevel {
    match level {
        EcLevel::Low => qrcode::EcLevel::L,
        EcLevel::Medium => qrcode::EcLevel::M,
        EcLevel::Quartile => qrcode::EcLevel::Q,
        EcLevel::High => qrcode::EcLevel::H,
    }
}

impl SymbolEncoder for QrEncoder {
    fn encode(&self, text: &str, level: EcLevel) -> Result<ModuleMatrix, StyleError> {
        let code = qrcode::QrCode::with_error_correction_level(text.as_bytes(), to_qr_level(level))
            .map_err(|e| StyleError::Encode(e.to_string()))?;
        let size = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        tracing::debug!(size, bytes = text.len(), ?level, "encoded symbol");
        ModuleMatrix::from_modules(size, modules)
    }
}
