//! `PXPK` archive format
//!
//! A self-delimiting container of named byte payloads. All multi-byte
//! fields are big-endian.
//!
//! | Offset | Field       | Width |
//! |--------|-------------|-------|
//! | 0      | magic       | 4     |
//! | 4      | version     | 1     |
//! | 5      | entry count | 2     |
//! | 7..    | entries     | var   |
//!
//! Each entry is `name_len (2) | name (UTF-8) | data_len (4) | data`.
//! The payload carries no length of its own: the reader stops after the
//! last declared entry and ignores whatever follows.

mod reader;
mod writer;

pub use reader::{ArchiveSummary, deserialize, summarize};
pub use writer::{serialize, serialized_len};

use crate::codec::data_url::to_data_url;

/// "PXPK" magic signature
pub const MAGIC: [u8; 4] = *b"PXPK";

/// Current (and only) format revision
pub const FORMAT_VERSION: u8 = 1;

/// Size of the fixed header (magic + version + entry count)
pub const HEADER_SIZE: usize = 7;

/// Fixed bytes per entry record besides name and data (2 + 4)
pub const ENTRY_OVERHEAD: usize = 6;

/// Longest encoded name the 16-bit length field can describe
pub const MAX_NAME_LEN: usize = u16::MAX as usize;

/// Most entries the 16-bit count field can describe
pub const MAX_ENTRIES: usize = u16::MAX as usize;

/// Largest entry data the 32-bit length field can describe
pub const MAX_DATA_LEN: u64 = u32::MAX as u64;

/// A single named file stored in an archive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Slash-separated relative path (e.g. "textures/a.png")
    pub name: String,
    /// Raw file contents
    pub data: Vec<u8>,
}

impl Entry {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Size of the entry data in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Expose the entry data as a `data:<mime>;base64,...` URL
    #[must_use]
    pub fn to_data_url(&self, mime: &str) -> String {
        to_data_url(&self.data, mime)
    }
}
