//! Per-image conversion pipeline.
//!
//! - [`ImageConverter`]: drives one task end to end.
//! - [`resize`]: width-capped Lanczos downscaling.
//! - [`encode`]: lossy WebP encoding via libwebp.

mod converter;
pub mod encode;
pub mod resize;

pub use converter::ImageConverter;
