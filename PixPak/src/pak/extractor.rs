//! Extracting an image back into a directory tree

use std::path::Path;

use super::{ImagePak, PakPhase, PakProgress, ProgressCallback};
use crate::archive::Entry;
use crate::codec::RasterCodec;
use crate::codec::data_url::{from_data_url, is_data_url};
use crate::error::{Error, Result};

/// Read a packed image from disk
///
/// Accepts either raw image bytes or a text file holding a data URL.
pub fn load_image_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let contents = std::fs::read(path.as_ref())?;
    if !is_data_url(&contents) {
        return Ok(contents);
    }

    let text = std::str::from_utf8(&contents).map_err(|_| Error::InvalidDataUrl)?;
    from_data_url(text)
}

/// Write entries under `dest`, creating directories as needed
///
/// Returns the number of files written.
pub fn write_entries<P: AsRef<Path>>(
    dest: P,
    entries: &[Entry],
    progress: ProgressCallback,
) -> Result<usize> {
    let dest = dest.as_ref();
    std::fs::create_dir_all(dest)?;

    let total = entries.len();
    for (index, entry) in entries.iter().enumerate() {
        progress(&PakProgress::with_file(
            PakPhase::WritingFiles,
            index + 1,
            total,
            entry.name.as_str(),
        ));

        let out_path = dest.join(&entry.name);
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&out_path, &entry.data)?;
        tracing::debug!("Wrote {} ({} bytes)", out_path.display(), entry.data.len());
    }

    progress(&PakProgress::new(PakPhase::Complete, total, total));
    Ok(total)
}

impl<C: RasterCodec> ImagePak<C> {
    /// Read and decode a packed image file (raw or data URL)
    pub fn read_entries<P: AsRef<Path>>(&self, image_path: P) -> Result<Vec<Entry>> {
        self.decode(&load_image_bytes(image_path)?)
    }

    /// Extract every entry of the image at `image_path` under `dest`
    ///
    /// Returns the number of files written.
    pub fn unpack_image<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        image_path: P,
        dest: Q,
    ) -> Result<usize> {
        self.unpack_image_with_progress(image_path, dest, &|_| {})
    }

    /// Extract an image with progress reporting
    pub fn unpack_image_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        image_path: P,
        dest: Q,
        progress: ProgressCallback,
    ) -> Result<usize> {
        tracing::info!("Extracting {:?} to {:?}", image_path.as_ref(), dest.as_ref());

        progress(&PakProgress::new(PakPhase::Decoding, 0, 1));
        let entries = self.read_entries(image_path)?;
        write_entries(dest, &entries, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_entries_creates_parents() {
        let dir = tempdir().unwrap();
        let entries = vec![
            Entry::new("a.txt", b"AB".to_vec()),
            Entry::new("b/c/d.txt", Vec::new()),
        ];

        let count = write_entries(dir.path(), &entries, &|_| {}).unwrap();

        assert_eq!(count, 2);
        assert_eq!(std::fs::read(dir.path().join("a.txt")).unwrap(), b"AB");
        assert!(std::fs::read(dir.path().join("b/c/d.txt")).unwrap().is_empty());
    }

    #[test]
    fn test_load_image_bytes_raw_and_data_url() {
        let dir = tempdir().unwrap();
        let raw = dir.path().join("raw.png");
        let url = dir.path().join("url.txt");
        std::fs::write(&raw, b"\x89PNG-ish").unwrap();
        std::fs::write(&url, "data:image/png;base64,iVBORy1pc2g=\n").unwrap();

        assert_eq!(load_image_bytes(&raw).unwrap(), b"\x89PNG-ish");
        assert_eq!(load_image_bytes(&url).unwrap(), b"\x89PNG-ish");
    }

    #[test]
    fn test_unpack_missing_image_is_io_error() {
        let dir = tempdir().unwrap();
        let result = ImagePak::new().unpack_image(dir.path().join("nope.png"), dir.path());
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
