//! `data:` URL transport
//!
//! Plain text wrapping of image bytes (`data:<mime>;base64,<payload>`) so a
//! packed image can travel through text-only channels. Not part of the
//! archive format.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::{Error, Result};

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Wrap bytes in a base64 data URL
#[must_use]
pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("{DATA_PREFIX}{mime}{BASE64_MARKER}{}", BASE64.encode(bytes))
}

/// Extract the bytes of a base64 data URL
///
/// The MIME type is not checked. Leading and trailing whitespace is ignored.
///
/// # Errors
/// Returns [`Error::InvalidDataUrl`] if the text is not a base64 data URL and
/// [`Error::Base64`] if the payload does not decode.
pub fn from_data_url(text: &str) -> Result<Vec<u8>> {
    let rest = text
        .trim()
        .strip_prefix(DATA_PREFIX)
        .ok_or(Error::InvalidDataUrl)?;
    let (_mime, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or(Error::InvalidDataUrl)?;
    Ok(BASE64.decode(payload)?)
}

/// Whether a file's contents look like a data URL rather than raw image bytes
#[must_use]
pub fn is_data_url(contents: &[u8]) -> bool {
    contents.trim_ascii_start().starts_with(DATA_PREFIX.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_url() {
        assert_eq!(to_data_url(b"hi", "image/png"), "data:image/png;base64,aGk=");
        assert_eq!(to_data_url(&[], "text/plain"), "data:text/plain;base64,");
    }

    #[test]
    fn test_from_data_url() {
        assert_eq!(from_data_url("data:image/png;base64,aGk=").unwrap(), b"hi");
        // Any MIME type, surrounding whitespace
        assert_eq!(
            from_data_url("  data:application/octet-stream;base64,AAEC\n").unwrap(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_from_data_url_rejects_non_urls() {
        assert!(matches!(from_data_url("aGk="), Err(Error::InvalidDataUrl)));
        assert!(matches!(
            from_data_url("data:image/png,plain-text"),
            Err(Error::InvalidDataUrl)
        ));
        assert!(matches!(
            from_data_url("data:image/png;base64,@@@"),
            Err(Error::Base64(_))
        ));
    }

    #[test]
    fn test_is_data_url() {
        assert!(is_data_url(b"\ndata:image/png;base64,"));
        assert!(!is_data_url(b"\x89PNG\r\n\x1a\n"));
    }
}
