#![deny(unsafe_code)]
//! Core types for qrstyle, the styled QR code renderer.
//!
//! Takes an already-encoded [`ModuleMatrix`] and paints it into a [`Canvas`]:
//! [`eye`] classifies finder-pattern modules, [`shape`] rasterizes one module
//! cell, and [`render`] applies the per-module decision rule using a
//! [`RenderConfig`]. Nothing here performs I/O or touches an image codec.

pub mod canvas;
pub mod color;
pub mod config;
pub mod encoder;
pub mod error;
pub mod eye;
pub mod matrix;
pub mod params;
pub mod render;
pub mod shape;

pub use canvas::{Canvas, UNIT};
pub use color::Rgb;
pub use config::RenderConfig;
pub use encoder::{EcLevel, SymbolEncoder, SYMBOL_EC_LEVEL};
pub use error::StyleError;
pub use eye::{classify, EyeClass};
pub use matrix::ModuleMatrix;
pub use render::render;
pub use shape::{paint_module, ShapeKind};
