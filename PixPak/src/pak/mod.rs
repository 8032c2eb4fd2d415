//! Image pak operations
//!
//! Glue between the archive format, the pixel grid and a raster codec:
//!
//! ```text
//! entries -> serialize -> pack -> codec.encode -> image bytes
//! image bytes -> codec.decode -> unpack -> deserialize -> entries
//! ```

mod creator;
mod extractor;
mod types;

pub use creator::collect_entries;
pub use extractor::{load_image_bytes, write_entries};
pub use types::{PackOutput, PakInfo, PakPhase, PakProgress, ProgressCallback};

use crate::archive::{self, Entry};
use crate::codec::data_url::{from_data_url, to_data_url};
use crate::codec::{PngCodec, RasterCodec};
use crate::error::Result;
use crate::pixel;

/// Packs entries into images and back using a raster codec
#[derive(Debug, Clone, Default)]
pub struct ImagePak<C = PngCodec> {
    codec: C,
}

impl ImagePak<PngCodec> {
    /// Image pak with the default PNG codec
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: RasterCodec> ImagePak<C> {
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Encode entries into image bytes
    ///
    /// # Errors
    /// Returns the archive field-limit errors from [`archive::serialize`] or
    /// [`Error::Codec`](crate::Error::Codec) if the image cannot be written.
    pub fn encode(&self, entries: &[Entry]) -> Result<Vec<u8>> {
        let payload = archive::serialize(entries)?;
        let payload_len = payload.len();
        let grid = pixel::pack(payload)?;
        let image = self.codec.encode(&grid)?;

        tracing::info!(
            "Packed {} entries ({} payload bytes) into {}x{} image ({} bytes)",
            entries.len(),
            payload_len,
            grid.width(),
            grid.height(),
            image.len()
        );
        Ok(image)
    }

    /// Decode image bytes back into entries
    ///
    /// # Errors
    /// Returns [`Error::Codec`](crate::Error::Codec) for an unreadable image
    /// and the archive errors from [`archive::deserialize`] for a corrupt or
    /// foreign payload.
    pub fn decode(&self, image: &[u8]) -> Result<Vec<Entry>> {
        let grid = self.codec.decode(image)?;
        let (width, height) = (grid.width(), grid.height());
        let entries = archive::deserialize(&pixel::unpack(grid))?;

        tracing::info!(
            "Unpacked {} entries from {}x{} image",
            entries.len(),
            width,
            height
        );
        Ok(entries)
    }

    /// Encode entries straight to a data URL
    pub fn encode_to_data_url(&self, entries: &[Entry]) -> Result<String> {
        let image = self.encode(entries)?;
        Ok(to_data_url(&image, self.codec.mime_type()))
    }

    /// Decode entries from a data URL holding an encoded image
    pub fn decode_data_url(&self, url: &str) -> Result<Vec<Entry>> {
        self.decode(&from_data_url(url)?)
    }

    /// Report grid geometry and payload statistics without keeping entries
    pub fn inspect(&self, image: &[u8]) -> Result<PakInfo> {
        let grid = self.codec.decode(image)?;
        let summary = archive::summarize(grid.as_rgba())?;

        Ok(PakInfo {
            width: grid.width(),
            height: grid.height(),
            capacity: grid.capacity(),
            payload_len: summary.payload_len,
            padding: grid.padding(summary.payload_len),
            entry_count: summary.entry_count,
            data_len: summary.data_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("a.txt", vec![0x41, 0x42]),
            Entry::new("b/c.txt", Vec::new()),
        ]
    }

    #[test]
    fn test_round_trip() {
        let pak = ImagePak::new();
        let image = pak.encode(&sample()).unwrap();
        assert_eq!(pak.decode(&image).unwrap(), sample());
    }

    #[test]
    fn test_empty_archive_round_trip() {
        let pak = ImagePak::new();
        let image = pak.encode(&[]).unwrap();
        assert!(!image.is_empty());
        assert!(pak.decode(&image).unwrap().is_empty());
    }

    #[test]
    fn test_data_url_round_trip() {
        let pak = ImagePak::new();
        let url = pak.encode_to_data_url(&sample()).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(pak.decode_data_url(&url).unwrap(), sample());
    }

    #[test]
    fn test_inspect() {
        let pak = ImagePak::new();
        let image = pak.encode(&sample()).unwrap();
        let info = pak.inspect(&image).unwrap();

        // 7 + (6 + 5 + 2) + (6 + 7 + 0) = 33 bytes -> 9 pixels -> 3x3
        assert_eq!(info.payload_len, 33);
        assert_eq!((info.width, info.height), (3, 3));
        assert_eq!(info.capacity, 36);
        assert_eq!(info.padding, 3);
        assert_eq!(info.entry_count, 2);
        assert_eq!(info.data_len, 2);
    }

    #[test]
    fn test_foreign_png_is_bad_magic() {
        let grid = pixel::PixelGrid::from_rgba(2, 2, vec![0xAB; 16]).unwrap();
        let image = PngCodec::new().encode(&grid).unwrap();
        assert!(matches!(
            ImagePak::new().decode(&image),
            Err(Error::BadMagic { found: [0xAB, 0xAB, 0xAB, 0xAB] })
        ));
    }

    #[test]
    fn test_encode_validates_before_writing() {
        let entries = vec![Entry::new("x".repeat(70_000), Vec::new())];
        assert!(matches!(
            ImagePak::new().encode(&entries),
            Err(Error::NameTooLong { len: 70_000 })
        ));
    }
}
