//! Lossy WebP encoding and output writing.

use std::path::Path;
use image::RgbImage;
use webp::WebPConfig;
use crate::utils::{OptimizerError, OptimizerResult};

// 0 = fast, 6 = slowest and smallest output
const WEBP_METHOD: i32 = 6;

/// Lossy encoder settings: requested quality, maximum compression effort.
pub fn webp_config(quality: u8, output_path: &Path) -> OptimizerResult<WebPConfig> {
    let mut config = WebPConfig::new()
        .map_err(|_| OptimizerError::encode(output_path, "libwebp rejected the default config"))?;

    config.lossless = 0;
    config.quality = quality.min(100) as f32;
    config.method = WEBP_METHOD;
    Ok(config)
}

/// Encodes `image` as lossy WebP at `quality` (0-100).
pub fn encode_webp(image: &RgbImage, quality: u8, output_path: &Path) -> OptimizerResult<Vec<u8>> {
    let (width, height) = image.dimensions();
    let encoder = webp::Encoder::from_rgb(image.as_raw(), width, height);
    let config = webp_config(quality, output_path)?;

    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| OptimizerError::encode(output_path, format!("WebP encoding failed: {:?}", e)))?;

    Ok(memory.to_vec())
}

/// Encodes and writes `image` to `output_path`, replacing any existing file.
pub fn save_webp(image: &RgbImage, quality: u8, output_path: &Path) -> OptimizerResult<()> {
    let bytes = encode_webp(image, quality, output_path)?;

    std::fs::write(output_path, bytes)
        .map_err(|e| OptimizerError::encode(output_path, format!("Failed to write output: {}", e)))
}
