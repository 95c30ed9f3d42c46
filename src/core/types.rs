//! Core types for conversion settings and results.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_WIDTH: u32 = 1920;
pub const DEFAULT_QUALITY: u8 = 85;
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
pub const DEFAULT_ROOT: &str = "projects";

/// Settings applied to every image in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Images wider than this are downscaled to exactly this width
    pub max_width: u32,
    /// Lossy WebP quality, 0-100
    pub quality: u8,
    /// Input extensions, matched case-insensitively
    pub extensions: Vec<String>,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_QUALITY,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory tree to scan
    pub root: PathBuf,
    /// Number of conversions allowed to run at once
    pub workers: usize,
    pub settings: ConversionSettings,
    /// Optional JSON report destination
    pub report_path: Option<PathBuf>,
}

/// Host parallelism, falling back to a single worker when it can't be queried.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Result of one successful conversion.
///
/// `reduction_percent` is negative when the WebP came out larger than its source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    /// Path to the original input file
    pub source_path: PathBuf,
    /// Path of the written WebP
    pub output_path: PathBuf,
    /// Original file size in bytes
    pub original_size: u64,
    /// WebP file size in bytes
    pub new_size: u64,
    #[serde(rename = "reductionPercent")]
    pub reduction_percent: f64,
    /// Decoded source dimensions (width, height)
    pub original_dimensions: (u32, u32),
    /// Encoded output dimensions (width, height)
    pub output_dimensions: (u32, u32),
}
