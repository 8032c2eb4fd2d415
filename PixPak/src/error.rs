//! Error types for `PixPak`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `PixPak` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Archive Decode Errors ====================
    /// The payload does not start with the `PXPK` magic.
    #[error("invalid archive magic: expected PXPK, found {found:?}")]
    BadMagic {
        /// The first four bytes of the payload.
        found: [u8; 4],
    },

    /// The archive declares a format version this build does not understand.
    #[error("unsupported archive version: {version} (supported: 1)")]
    UnsupportedVersion {
        /// The version byte found in the header.
        version: u8,
    },

    /// The payload is shorter than the fixed 7-byte header.
    #[error("buffer too short for archive header: {len} bytes")]
    BufferTooShort {
        /// Length of the buffer that was offered.
        len: usize,
    },

    /// A name (or its length field) runs past the end of the payload.
    #[error("truncated entry name at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedName {
        /// Byte offset where the read started.
        offset: u64,
        /// Bytes required to complete the read.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },

    /// Entry data (or its length field) runs past the end of the payload.
    #[error("truncated entry data at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedData {
        /// Byte offset where the read started.
        offset: u64,
        /// Bytes required to complete the read.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },

    /// An entry name is not valid UTF-8.
    #[error("entry name at offset {offset} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// Byte offset of the name bytes.
        offset: u64,
        /// The underlying conversion error.
        source: std::str::Utf8Error,
    },

    // ==================== Archive Encode Errors ====================
    /// An encoded name does not fit the 16-bit length field.
    #[error("entry name too long: {len} bytes (max 65535)")]
    NameTooLong {
        /// Encoded UTF-8 length of the name.
        len: usize,
    },

    /// The archive holds more entries than the 16-bit count field allows.
    #[error("too many entries: {count} (max 65535)")]
    TooManyEntries {
        /// Number of entries offered.
        count: usize,
    },

    /// Entry data does not fit the 32-bit length field.
    #[error("entry data too large for {name}: {len} bytes (max 4294967295)")]
    DataTooLarge {
        /// Name of the offending entry.
        name: String,
        /// Length of its data.
        len: usize,
    },

    // ==================== Pixel Grid Errors ====================
    /// The RGBA buffer does not match the declared grid geometry.
    #[error("pixel grid {width}x{height} does not match RGBA buffer of {len} bytes")]
    GridSizeMismatch {
        /// Grid width in pixels.
        width: u32,
        /// Grid height in pixels.
        height: u32,
        /// Actual RGBA buffer length.
        len: usize,
    },

    /// The payload needs a grid wider or taller than a `u32` can describe.
    #[error("payload of {payload_len} bytes does not fit a pixel grid")]
    GridTooLarge {
        /// Length of the payload to pack.
        payload_len: usize,
    },

    // ==================== Codec / Transport Errors ====================
    /// The raster codec failed to encode or decode an image.
    #[error("image codec error: {0}")]
    Codec(#[from] image::ImageError),

    /// Text is not a `data:<mime>;base64,<payload>` URL.
    #[error("invalid data URL: expected data:<mime>;base64,<payload>")]
    InvalidDataUrl,

    /// The data URL payload is not valid base64.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    // ==================== File System Errors ====================
    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),

    /// The source directory contains no files to pack.
    #[error("no files to compress in {}", .path.display())]
    EmptySource {
        /// The directory that was scanned.
        path: PathBuf,
    },
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `PixPak` operations.
pub type Result<T> = std::result::Result<T, Error>;
