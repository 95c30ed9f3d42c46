//! In-memory pixel buffer with an explicit color mode.
//!
//! Decoded images are normalized into [`RasterImage`] so the rest of the
//! pipeline only ever deals with 8-bit interleaved samples in one of four
//! layouts. [`RasterImage::flatten_onto_white`] is the only way alpha leaves
//! the pipeline; everything downstream of it is opaque RGB.

use image::{DynamicImage, RgbImage};

/// Sample layout of a [`RasterImage`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::LumaAlpha | Self::Rgba)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
    pub pixels: Vec<u8>,
}

const WHITE: u32 = 255;

/// `alpha * fg + (1 - alpha) * white` in 8-bit fixed point, rounded.
fn blend_on_white(fg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + WHITE * (255 - a) + 127) / 255) as u8
}

impl RasterImage {
    /// Takes ownership of a decoded image. 16-bit and float sources are
    /// reduced to 8 bits per sample, keeping alpha when present.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let (mode, pixels) = match img {
            DynamicImage::ImageLuma8(buf) => (ColorMode::Luma, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (ColorMode::LumaAlpha, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (ColorMode::Rgb, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (ColorMode::Rgba, buf.into_raw()),
            other if other.color().has_alpha() => (ColorMode::Rgba, other.to_rgba8().into_raw()),
            other => (ColorMode::Rgb, other.to_rgb8().into_raw()),
        };

        Self { width, height, mode, pixels }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn has_alpha(&self) -> bool {
        self.mode.has_alpha()
    }

    /// Composites any alpha onto an opaque white background and expands grey
    /// to RGB. The result is always [`ColorMode::Rgb`].
    pub fn flatten_onto_white(self) -> Self {
        let pixels = match self.mode {
            ColorMode::Rgb => return self,
            ColorMode::Rgba => self.pixels
                .chunks_exact(4)
                .flat_map(|px| {
                    let a = px[3];
                    [blend_on_white(px[0], a), blend_on_white(px[1], a), blend_on_white(px[2], a)]
                })
                .collect(),
            ColorMode::LumaAlpha => self.pixels
                .chunks_exact(2)
                .flat_map(|px| {
                    let v = blend_on_white(px[0], px[1]);
                    [v, v, v]
                })
                .collect(),
            ColorMode::Luma => self.pixels
                .iter()
                .flat_map(|&v| [v, v, v])
                .collect(),
        };

        Self {
            width: self.width,
            height: self.height,
            mode: ColorMode::Rgb,
            pixels,
        }
    }

    /// Flattens and hands the buffer to the `image` crate. `None` only if the
    /// buffer length disagrees with the dimensions.
    pub fn into_rgb_image(self) -> Option<RgbImage> {
        let flat = self.flatten_onto_white();
        RgbImage::from_raw(flat.width, flat.height, flat.pixels)
    }
}
