//! PNG raster codec
//!
//! 8-bit RGBA PNG through the `image` crate. PNG is lossless for every
//! channel including alpha, so fully transparent pixels keep their RGB bytes.

use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, ImageReader};

use super::RasterCodec;
use crate::error::Result;
use crate::pixel::PixelGrid;

/// zlib effort used when writing PNGs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

impl PngCompression {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PngCompression::Fast => "fast",
            PngCompression::Default => "default",
            PngCompression::Best => "best",
        }
    }

    fn to_image(self) -> CompressionType {
        match self {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        }
    }
}

impl fmt::Display for PngCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PngCompression {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(PngCompression::Fast),
            "default" => Ok(PngCompression::Default),
            "best" => Ok(PngCompression::Best),
            _ => Err(format!(
                "Invalid compression '{s}'. Valid values: fast, default, best"
            )),
        }
    }
}

/// Lossless RGBA8 PNG codec
#[derive(Debug, Clone, Copy)]
pub struct PngCodec {
    compression: PngCompression,
    filter: FilterType,
}

impl Default for PngCodec {
    fn default() -> Self {
        Self {
            compression: PngCompression::Default,
            filter: FilterType::Adaptive,
        }
    }
}

impl PngCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_compression(mut self, compression: PngCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Row filter applied before deflate (does not affect losslessness)
    #[must_use]
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn compression(&self) -> PngCompression {
        self.compression
    }
}

impl RasterCodec for PngCodec {
    fn encode(&self, grid: &PixelGrid) -> Result<Vec<u8>> {
        let mut png = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut png, self.compression.to_image(), self.filter);
        encoder.write_image(
            grid.as_rgba(),
            grid.width(),
            grid.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(png)
    }

    fn decode(&self, png: &[u8]) -> Result<PixelGrid> {
        let mut reader = ImageReader::with_format(Cursor::new(png), ImageFormat::Png);
        // Any grid this codec wrote must read back, so no 512 MiB allocation cap
        reader.no_limits();
        let rgba = reader.decode()?.into_rgba8();
        let (width, height) = rgba.dimensions();
        PixelGrid::from_rgba(width, height, rgba.into_raw())
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}
