//! Archive parsing

use super::{Entry, FORMAT_VERSION, HEADER_SIZE, MAGIC};
use crate::error::{Error, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Entry counts and byte totals of a payload, gathered without copying data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub entry_count: usize,
    /// Sum of all entry data lengths
    pub data_len: u64,
    /// Bytes up to the end of the last entry (trailing padding excluded)
    pub payload_len: usize,
}

/// Parse a flat payload back into its entries
///
/// The buffer may carry trailing bytes (pixel grid padding); parsing stops
/// after the last declared entry and never looks at them.
///
/// # Errors
///
/// Returns [`Error::BufferTooShort`] if the header does not fit,
/// [`Error::BadMagic`] or [`Error::UnsupportedVersion`] for a foreign
/// header, [`Error::TruncatedName`] / [`Error::TruncatedData`] when an entry
/// runs past the end of the buffer and [`Error::InvalidUtf8`] for a
/// malformed name.
pub fn deserialize(payload: &[u8]) -> Result<Vec<Entry>> {
    let mut cursor = Cursor::new(payload);
    let count = read_header(&mut cursor)?;

    let mut entries = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        let (name, data) = read_entry(&mut cursor)?;
        entries.push(Entry::new(name, data.to_vec()));
    }

    tracing::debug!(
        "Parsed {} entries from {} bytes ({} trailing)",
        entries.len(),
        cursor.position(),
        remaining(&cursor)
    );
    Ok(entries)
}

/// Validate a payload and total up its entries without copying any data
///
/// # Errors
///
/// Same as [`deserialize`].
pub fn summarize(payload: &[u8]) -> Result<ArchiveSummary> {
    let mut cursor = Cursor::new(payload);
    let count = read_header(&mut cursor)?;

    let mut data_len = 0u64;
    for _ in 0..count {
        let (_, data) = read_entry(&mut cursor)?;
        data_len += data.len() as u64;
    }

    Ok(ArchiveSummary {
        entry_count: usize::from(count),
        data_len,
        payload_len: usize::try_from(cursor.position()).unwrap_or(payload.len()),
    })
}

/// Check magic and version, returning the entry count
fn read_header(cursor: &mut Cursor<&[u8]>) -> Result<u16> {
    let len = cursor.get_ref().len();
    if len < HEADER_SIZE {
        return Err(Error::BufferTooShort { len });
    }

    let mut magic = [0u8; 4];
    cursor.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(Error::BadMagic { found: magic });
    }

    let version = cursor.read_u8()?;
    if version != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion { version });
    }

    Ok(cursor.read_u16::<BigEndian>()?)
}

/// Read one record, borrowing its name and data from the payload
fn read_entry<'a>(cursor: &mut Cursor<&'a [u8]>) -> Result<(&'a str, &'a [u8])> {
    let offset = cursor.position();
    if remaining(cursor) < 2 {
        return Err(Error::TruncatedName {
            offset,
            needed: 2,
            available: remaining(cursor),
        });
    }
    let name_len = usize::from(cursor.read_u16::<BigEndian>()?);

    let offset = cursor.position();
    let Some(name_bytes) = take(cursor, name_len) else {
        return Err(Error::TruncatedName {
            offset,
            needed: name_len,
            available: remaining(cursor),
        });
    };
    let name = std::str::from_utf8(name_bytes)
        .map_err(|source| Error::InvalidUtf8 { offset, source })?;

    let offset = cursor.position();
    if remaining(cursor) < 4 {
        return Err(Error::TruncatedData {
            offset,
            needed: 4,
            available: remaining(cursor),
        });
    }
    let data_len = cursor.read_u32::<BigEndian>()? as usize;

    let offset = cursor.position();
    let Some(data) = take(cursor, data_len) else {
        return Err(Error::TruncatedData {
            offset,
            needed: data_len,
            available: remaining(cursor),
        });
    };

    Ok((name, data))
}

/// Borrow the next `len` bytes and advance past them, or `None` if the
/// buffer ends first (the cursor is left where it was).
fn take<'a>(cursor: &mut Cursor<&'a [u8]>, len: usize) -> Option<&'a [u8]> {
    let buffer: &'a [u8] = *cursor.get_ref();
    let start = usize::try_from(cursor.position()).ok()?;
    let end = start.checked_add(len)?;
    let bytes = buffer.get(start..end)?;
    cursor.set_position(end as u64);
    Some(bytes)
}

fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    let position = usize::try_from(cursor.position()).unwrap_or(usize::MAX);
    cursor.get_ref().len().saturating_sub(position)
}
