//! Core types shared across the pipeline.
//!
//! - [`ConversionSettings`] / [`RunConfig`]: configuration resolved at startup
//! - [`ConversionTask`]: one file's unit of work
//! - [`ConversionResult`]: measurements for a successful conversion
//! - [`RasterImage`]: decoded pixels with an explicit [`ColorMode`]

mod types;
mod task;
mod raster;

pub use types::{
    ConversionSettings, RunConfig, ConversionResult, default_worker_count,
    DEFAULT_MAX_WIDTH, DEFAULT_QUALITY, DEFAULT_EXTENSIONS, DEFAULT_ROOT,
};
pub use task::{ConversionTask, TaskOutcome};
pub use raster::{RasterImage, ColorMode};
