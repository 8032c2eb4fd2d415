//! Raster codec boundary
//!
//! The archive core only needs a codec that hands back exactly the RGBA
//! bytes it was given. Anything lossy (colour space conversion, premultiplied
//! alpha, chroma subsampling) breaks the payload.

pub mod data_url;
mod png;

pub use png::{PngCodec, PngCompression};

use crate::error::Result;
use crate::pixel::PixelGrid;

/// Lossless image encode/decode of an RGBA8 pixel grid
pub trait RasterCodec {
    /// Encode the grid into image file bytes
    fn encode(&self, grid: &PixelGrid) -> Result<Vec<u8>>;

    /// Decode image file bytes back into the grid they were encoded from
    fn decode(&self, image: &[u8]) -> Result<PixelGrid>;

    /// MIME type of the produced image (used for data URLs)
    fn mime_type(&self) -> &'static str;
}
