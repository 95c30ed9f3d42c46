//! Single-file conversion: decode, flatten, downscale, encode, measure.
//!
//! Everything here is blocking. The worker pool calls [`ImageConverter::convert`]
//! from `spawn_blocking` so decode and resample never stall the async runtime.

use std::io::Cursor;
use std::path::Path;
use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::core::{ConversionResult, ConversionSettings, ConversionTask, RasterImage};
use crate::utils::{
    OptimizerError, OptimizerResult, format_from_path, get_file_size, reduction_percent,
};

use super::encode::save_webp;
use super::resize::apply_max_width;

#[derive(Debug, Clone)]
pub struct ImageConverter {
    settings: ConversionSettings,
}

impl ImageConverter {
    pub fn new(settings: ConversionSettings) -> Self {
        Self { settings }
    }

    /// Converts one task's input into WebP next to it.
    pub fn convert(&self, task: &ConversionTask) -> OptimizerResult<ConversionResult> {
        let decoded = decode_image(&task.input_path)?;
        let raster = RasterImage::from_dynamic(decoded);
        let original_dimensions = raster.dimensions();

        if raster.has_alpha() {
            debug!("Flattening alpha onto white: {}", task.input_path.display());
        }
        let rgb = raster.into_rgb_image().ok_or_else(|| OptimizerError::decode(
            &task.input_path,
            "pixel buffer does not match image dimensions",
        ))?;

        let resized = apply_max_width(rgb, self.settings.max_width);
        let output_dimensions = resized.dimensions();

        save_webp(&resized, self.settings.quality, &task.output_path)?;

        let original_size = get_file_size(&task.input_path)?;
        let new_size = get_file_size(&task.output_path)?;
        let reduction = reduction_percent(original_size, new_size);

        debug!(
            "Converted {} ({}x{} -> {}x{}, {} -> {} bytes, {:.1}%)",
            task.input_path.display(),
            original_dimensions.0, original_dimensions.1,
            output_dimensions.0, output_dimensions.1,
            original_size, new_size, reduction
        );

        Ok(ConversionResult {
            source_path: task.input_path.clone(),
            output_path: task.output_path.clone(),
            original_size,
            new_size,
            reduction_percent: reduction,
            original_dimensions,
            output_dimensions,
        })
    }
}

/// Reads and decodes `path`, sniffing the format from content first and
/// falling back to the extension. Multi-frame sources yield their first frame.
fn decode_image(path: &Path) -> OptimizerResult<DynamicImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| OptimizerError::decode(path, format!("Failed to read file: {}", e)))?;

    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| OptimizerError::decode(path, e))?;

    if reader.format().is_none() {
        if let Some(format) = format_from_path(path) {
            reader.set_format(format.as_image_format());
        }
    }

    reader.decode().map_err(|e| OptimizerError::decode(path, e))
}
