//! Packing a directory tree into an image

use std::path::Path;

use walkdir::WalkDir;

use super::{ImagePak, PackOutput, PakPhase, PakProgress, ProgressCallback};
use crate::archive::Entry;
use crate::codec::RasterCodec;
use crate::codec::data_url::to_data_url;
use crate::error::{Error, Result};
use crate::utils::relative_path;

/// Read every regular file under `source_dir` into an entry
///
/// Files are visited in sorted order and named by their slash-separated path
/// relative to `source_dir`. Symlinks are not followed.
///
/// # Errors
/// Returns [`Error::InvalidPath`] if `source_dir` is not a directory or a
/// file name is not valid UTF-8, and [`Error::Io`] / [`Error::WalkDirError`]
/// if reading fails.
pub fn collect_entries<P: AsRef<Path>>(
    source_dir: P,
    progress: ProgressCallback,
) -> Result<Vec<Entry>> {
    let base_path = source_dir.as_ref();
    if !base_path.is_dir() {
        return Err(Error::InvalidPath(format!(
            "not a directory: {}",
            base_path.display()
        )));
    }

    tracing::info!("Scanning directory: {:?}", base_path);

    let mut files = Vec::new();
    for entry in WalkDir::new(base_path).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    let total = files.len();
    let mut entries = Vec::with_capacity(total);
    for (index, path) in files.iter().enumerate() {
        let name = relative_path(path, base_path)
            .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?;
        progress(&PakProgress::with_file(
            PakPhase::ScanningFiles,
            index + 1,
            total,
            name.as_str(),
        ));

        let data = std::fs::read(path)?;
        tracing::debug!("Read {} ({} bytes)", name, data.len());
        entries.push(Entry::new(name, data));
    }

    tracing::info!("Found {} files", entries.len());
    Ok(entries)
}

impl<C: RasterCodec> ImagePak<C> {
    /// Pack every file under `source_dir` into an image at `output`
    ///
    /// Returns the number of files packed.
    ///
    /// # Errors
    /// Returns [`Error::EmptySource`] if the tree holds no files, plus any
    /// error from scanning, encoding or writing.
    pub fn pack_directory<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source_dir: P,
        output: Q,
        format: PackOutput,
    ) -> Result<usize> {
        self.pack_directory_with_progress(source_dir, output, format, &|_| {})
    }

    /// Pack a directory with progress reporting
    pub fn pack_directory_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source_dir: P,
        output: Q,
        format: PackOutput,
        progress: ProgressCallback,
    ) -> Result<usize> {
        let entries = collect_entries(source_dir.as_ref(), progress)?;
        if entries.is_empty() {
            return Err(Error::EmptySource {
                path: source_dir.as_ref().to_path_buf(),
            });
        }

        let count = entries.len();
        progress(&PakProgress::new(PakPhase::Encoding, 0, 1));
        let image = self.encode(&entries)?;
        // Entry data is no longer needed once the image exists
        drop(entries);

        match format {
            PackOutput::Image => std::fs::write(output.as_ref(), &image)?,
            PackOutput::DataUrl => std::fs::write(
                output.as_ref(),
                to_data_url(&image, self.codec().mime_type()),
            )?,
        }

        progress(&PakProgress::new(PakPhase::Complete, count, count));
        tracing::info!("Wrote {} ({} files)", output.as_ref().display(), count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::tempdir;

    #[test]
    fn test_collect_entries_sorted_relative() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        std::fs::write(dir.path().join("b.txt"), b"bee").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"ay").unwrap();
        std::fs::write(dir.path().join("sub/deeper/c.bin"), [0u8, 1, 2]).unwrap();
        std::fs::write(dir.path().join("sub/empty"), b"").unwrap();

        let seen = RefCell::new(Vec::new());
        let entries = collect_entries(dir.path(), &|p| {
            seen.borrow_mut().push((p.current, p.total));
        })
        .unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "sub/deeper/c.bin", "sub/empty"]);
        assert_eq!(entries[2].data, vec![0, 1, 2]);
        assert!(entries[3].data.is_empty());
        assert_eq!(seen.into_inner(), vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    }

    #[test]
    fn test_collect_entries_requires_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, b"x").unwrap();
        assert!(matches!(
            collect_entries(&file, &|_| {}),
            Err(Error::InvalidPath(_))
        ));
    }

    #[test]
    fn test_pack_empty_directory_fails() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("only-dirs")).unwrap();
        let out = tempdir().unwrap();

        let result = ImagePak::new().pack_directory(
            dir.path(),
            out.path().join("out.png"),
            PackOutput::Image,
        );
        assert!(matches!(result, Err(Error::EmptySource { .. })));
        assert!(!out.path().join("out.png").exists());
    }
}
