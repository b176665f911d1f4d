use std::path::Path;

use anyhow::Context;

use crate::{
    color::{gamma::Gamma, model::Color},
    foundation::error::{PixfmtError, PixfmtResult},
    pixel::{
        batch::{BatchThreading, decode_colors, encode_colors, par_encode_colors},
        format::PixelFormat,
    },
};

/// A row-major grid of straight-alpha colors.
///
/// This is the file-facing edge of the crate: images come in through the `image` crate as
/// float RGBA, and leave either as packed buffers or as 8-bit PNG.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height` colors, row-major.
    pub pixels: Vec<Color>,
}

impl Raster {
    /// Create a validated raster (`pixels.len() == width * height`).
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> PixfmtResult<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(PixfmtError::validation(format!(
                "raster {width}x{height} needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode an encoded image file (any format the `image` crate was built with).
    #[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
    pub fn load(bytes: &[u8]) -> PixfmtResult<Self> {
        let dyn_img = image::load_from_memory(bytes)
            .map_err(|e| PixfmtError::image(format!("decode image from memory: {e}")))?;
        let rgba = dyn_img.to_rgba32f();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .into_raw()
            .chunks_exact(4)
            .map(|px| Color::new(px[0], px[1], px[2], px[3]))
            .collect();
        tracing::debug!(width, height, "loaded raster");
        Self::new(width, height, pixels)
    }

    /// Read and decode an image file.
    pub fn open(path: &Path) -> PixfmtResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        Self::load(&bytes)
    }

    /// Rebuild a raster from a packed buffer.
    #[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
    pub fn unpack(width: u32, height: u32, format: PixelFormat, bytes: &[u8]) -> PixfmtResult<Self> {
        let expected = pixel_count(width, height)?
            .checked_mul(format.channel_count())
            .ok_or_else(|| {
                PixfmtError::validation(format!(
                    "packed {width}x{height} '{format}' does not fit in memory"
                ))
            })?;
        if bytes.len() != expected {
            return Err(PixfmtError::validation(format!(
                "packed {width}x{height} '{format}' needs {expected} bytes, got {}",
                bytes.len()
            )));
        }
        Self::new(width, height, decode_colors(format, bytes)?)
    }

    /// Pack every pixel with `format`.
    pub fn pack(&self, format: PixelFormat, gamma: &Gamma) -> Vec<u8> {
        encode_colors(&self.pixels, format, gamma)
    }

    /// Pack every pixel with `format`, optionally in parallel.
    pub fn pack_with(
        &self,
        format: PixelFormat,
        gamma: &Gamma,
        threading: &BatchThreading,
    ) -> PixfmtResult<Vec<u8>> {
        par_encode_colors(&self.pixels, format, gamma, threading)
    }

    /// Straight-alpha 8-bit RGBA image.
    pub fn to_rgba8(&self) -> PixfmtResult<image::RgbaImage> {
        let raw = self.pack(PixelFormat::RGBA, &Gamma::NONE);
        image::RgbaImage::from_raw(self.width, self.height, raw)
            .ok_or_else(|| PixfmtError::image("packed RGBA buffer does not match dimensions"))
    }

    /// Write as an 8-bit RGBA PNG, creating parent directories.
    pub fn save_png(&self, path: &Path) -> PixfmtResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        self.to_rgba8()?
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| PixfmtError::image(format!("write png '{}': {e}", path.display())))
    }
}

fn pixel_count(width: u32, height: u32) -> PixfmtResult<usize> {
    usize::try_from(u64::from(width) * u64::from(height))
        .map_err(|_| PixfmtError::validation(format!("raster {width}x{height} is too large")))
}

#[cfg(test)]
#[path = "../tests/unit/raster.rs"]
mod tests;
