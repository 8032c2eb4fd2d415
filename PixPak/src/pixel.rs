//! RGBA pixel grid packing
//!
//! Lays a flat payload over a near-square RGBA8 grid, four bytes per pixel,
//! left-to-right and top-to-bottom. The grid only guarantees capacity: the
//! tail is zero padding and its extent is not recorded anywhere, the archive
//! reader finds the end of the payload on its own.

use crate::error::{Error, Result};

/// Bytes carried by one RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// A width x height grid of RGBA8 pixels in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelGrid {
    /// Wrap decoded RGBA bytes, checking they match the geometry
    ///
    /// # Errors
    /// Returns [`Error::GridSizeMismatch`] if `rgba.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        if grid_capacity(width, height) != Some(rgba.len()) {
            return Err(Error::GridSizeMismatch {
                width,
                height,
                len: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA channel bytes
    #[must_use]
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Total bytes the grid can hold
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.rgba.len()
    }

    /// Bytes of padding left after a payload of `payload_len` bytes
    #[must_use]
    pub fn padding(&self, payload_len: usize) -> usize {
        self.capacity().saturating_sub(payload_len)
    }

    /// Flatten the grid back into its byte stream
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.rgba
    }
}

/// Grid size for a payload of `payload_len` bytes
///
/// `pixels = ceil(len / 4)`, `width = ceil(sqrt(pixels))`,
/// `height = ceil(pixels / width)`. Never returns a zero-area grid.
///
/// # Errors
/// Returns [`Error::GridTooLarge`] if a side does not fit in `u32`.
pub fn grid_dimensions(payload_len: usize) -> Result<(u32, u32)> {
    let pixel_count = (payload_len as u64)
        .div_ceil(BYTES_PER_PIXEL as u64)
        .max(1);
    let width = ceil_sqrt(pixel_count);
    let height = pixel_count.div_ceil(width);

    let too_large = || Error::GridTooLarge { payload_len };
    Ok((
        u32::try_from(width).map_err(|_| too_large())?,
        u32::try_from(height).map_err(|_| too_large())?,
    ))
}

/// Pack a flat payload into a zero-padded pixel grid
///
/// Takes ownership of the payload and extends it in place, so the grid
/// shares the payload's allocation.
///
/// # Errors
/// Returns [`Error::GridTooLarge`] if the grid cannot be addressed on this
/// platform.
pub fn pack(mut payload: Vec<u8>) -> Result<PixelGrid> {
    let payload_len = payload.len();
    let (width, height) = grid_dimensions(payload_len)?;
    let capacity =
        grid_capacity(width, height).ok_or(Error::GridTooLarge { payload_len })?;

    payload.resize(capacity, 0);

    tracing::debug!(
        "Packed {} payload bytes into {}x{} grid ({} bytes padding)",
        payload_len,
        width,
        height,
        capacity - payload_len
    );

    Ok(PixelGrid {
        width,
        height,
        rgba: payload,
    })
}

/// Flatten a pixel grid back into the (padded) payload it was packed from
#[must_use]
pub fn unpack(grid: PixelGrid) -> Vec<u8> {
    grid.into_bytes()
}

fn grid_capacity(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

fn ceil_sqrt(n: u64) -> u64 {
    let root = n.isqrt();
    if root * root < n { root + 1 } else { root }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_payload() {
        // 7 bytes -> 2 pixels -> 2x1
        assert_eq!(grid_dimensions(7).unwrap(), (2, 1));
    }

    #[test]
    fn test_zero_payload_still_has_area() {
        assert_eq!(grid_dimensions(0).unwrap(), (1, 1));
    }

    #[test]
    fn test_known_dimensions() {
        assert_eq!(grid_dimensions(4).unwrap(), (1, 1));
        assert_eq!(grid_dimensions(16).unwrap(), (2, 2));
        // 5 pixels -> width 3, height 2
        assert_eq!(grid_dimensions(17).unwrap(), (3, 2));
        // 10 pixels -> width 4, height 3
        assert_eq!(grid_dimensions(40).unwrap(), (4, 3));
        assert_eq!(grid_dimensions(4 * 10_000).unwrap(), (100, 100));
    }

    #[test]
    fn test_capacity_and_shape() {
        for len in 0..5000 {
            let (width, height) = grid_dimensions(len).unwrap();
            let capacity = width as usize * height as usize * BYTES_PER_PIXEL;
            assert!(width >= 1 && height >= 1, "len {len}");
            assert!(capacity >= len, "len {len}: {width}x{height}");
            // Near-square: height is width or width - 1
            assert!(height <= width && height + 1 >= width, "len {len}: {width}x{height}");
        }
    }

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(4), 2);
        assert_eq!(ceil_sqrt(5), 3);
        assert_eq!(ceil_sqrt(u64::from(u32::MAX) * u64::from(u32::MAX)), u64::from(u32::MAX));
    }

    #[test]
    fn test_pack_zero_pads_tail() {
        let payload: Vec<u8> = (1..=7).collect();
        let grid = pack(payload.clone()).unwrap();

        assert_eq!((grid.width(), grid.height()), (2, 1));
        assert_eq!(grid.capacity(), 8);
        assert_eq!(grid.padding(payload.len()), 1);
        assert_eq!(&grid.as_rgba()[..7], &payload[..]);
        assert_eq!(grid.as_rgba()[7], 0);

        let bytes = unpack(grid);
        assert_eq!(bytes, vec![1, 2, 3, 4, 5, 6, 7, 0]);
    }

    #[test]
    fn test_from_rgba_checks_geometry() {
        assert!(PixelGrid::from_rgba(2, 1, vec![0; 8]).is_ok());
        assert!(matches!(
            PixelGrid::from_rgba(2, 2, vec![0; 8]),
            Err(Error::GridSizeMismatch {
                width: 2,
                height: 2,
                len: 8
            })
        ));
    }
}
