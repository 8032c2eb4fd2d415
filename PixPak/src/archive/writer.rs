//! Archive serialization

use super::{ENTRY_OVERHEAD, Entry, FORMAT_VERSION, HEADER_SIZE, MAGIC, MAX_ENTRIES};
use crate::error::{Error, Result};
use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

/// Exact size of the flat payload `serialize` would produce
#[must_use]
pub fn serialized_len(entries: &[Entry]) -> usize {
    HEADER_SIZE
        + entries
            .iter()
            .map(|e| ENTRY_OVERHEAD + e.name.len() + e.data.len())
            .sum::<usize>()
}

/// Serialize entries into a flat payload
///
/// Every entry is validated against the field widths before anything is
/// written, so a failure never leaves a partial payload behind.
///
/// # Errors
///
/// Returns [`Error::TooManyEntries`] for more than 65535 entries,
/// [`Error::NameTooLong`] for a name over 65535 UTF-8 bytes and
/// [`Error::DataTooLarge`] for data over `u32::MAX` bytes.
pub fn serialize(entries: &[Entry]) -> Result<Vec<u8>> {
    validate(entries)?;

    let mut payload = Vec::with_capacity(serialized_len(entries));
    write_archive(&mut payload, entries)?;

    tracing::debug!(
        "Serialized {} entries into {} payload bytes",
        entries.len(),
        payload.len()
    );
    Ok(payload)
}

fn validate(entries: &[Entry]) -> Result<()> {
    if entries.len() > MAX_ENTRIES {
        return Err(Error::TooManyEntries {
            count: entries.len(),
        });
    }

    for entry in entries {
        name_len_field(entry.name.len())?;
        data_len_field(&entry.name, entry.data.len())?;
    }
    Ok(())
}

fn name_len_field(len: usize) -> Result<u16> {
    u16::try_from(len).map_err(|_| Error::NameTooLong { len })
}

fn data_len_field(name: &str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::DataTooLarge {
        name: name.to_string(),
        len,
    })
}

fn write_archive<W: Write>(writer: &mut W, entries: &[Entry]) -> Result<()> {
    // Header
    writer.write_all(&MAGIC)?;
    writer.write_u8(FORMAT_VERSION)?;
    writer.write_u16::<BigEndian>(entries.len() as u16)?;

    for entry in entries {
        writer.write_u16::<BigEndian>(name_len_field(entry.name.len())?)?;
        writer.write_all(entry.name.as_bytes())?;
        writer.write_u32::<BigEndian>(data_len_field(&entry.name, entry.data.len())?)?;
        writer.write_all(&entry.data)?;
    }

    Ok(())
}
