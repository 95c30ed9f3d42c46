//! Width-capped downscaling.

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Dimensions after applying the width cap. Images at or below `max_width`
/// keep their size; wider ones get exactly `max_width` and a proportional,
/// rounded height of at least one pixel.
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width {
        return (width, height);
    }

    let scaled = (height as f64 * max_width as f64 / width as f64).round() as u32;
    (max_width, scaled.max(1))
}

/// Resizes with Lanczos3 when the image is wider than `max_width`; never upscales.
pub fn apply_max_width(image: RgbImage, max_width: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let (new_w, new_h) = target_dimensions(width, height, max_width);

    if (new_w, new_h) == (width, height) {
        return image;
    }

    debug!("Resizing {}x{} -> {}x{}", width, height, new_w, new_h);
    imageops::resize(&image, new_w, new_h, FilterType::Lanczos3)
}
