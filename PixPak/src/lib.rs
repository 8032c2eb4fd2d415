//! # PixPak
//!
//! Pack any set of named files into a single lossless PNG and get them back
//! byte for byte.
//!
//! The files are serialized into a small length-prefixed container (the
//! `PXPK` archive), the archive bytes are laid over a near-square RGBA pixel
//! grid, and the grid is written as a PNG. Decoding reverses each step.
//!
//! ## Quick Start
//!
//! ```
//! use pixpak::prelude::*;
//!
//! let pak = ImagePak::new();
//! let entries = vec![
//!     Entry::new("a.txt", b"AB".to_vec()),
//!     Entry::new("b/c.txt", Vec::new()),
//! ];
//!
//! let png = pak.encode(&entries)?;
//! assert_eq!(pak.decode(&png)?, entries);
//! # Ok::<(), pixpak::Error>(())
//! ```
//!
//! ### Working with Directories
//!
//! ```no_run
//! use pixpak::prelude::*;
//!
//! let pak = ImagePak::new();
//! let packed = pak.pack_directory("input/", "out.png", PackOutput::Image)?;
//! let extracted = pak.unpack_image("out.png", "output/")?;
//! assert_eq!(packed, extracted);
//! # Ok::<(), pixpak::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `pixpak` command-line binary

pub mod archive;
pub mod codec;
pub mod error;
pub mod pak;
pub mod pixel;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::archive::{Entry, deserialize, serialize};
    pub use crate::codec::data_url::{from_data_url, to_data_url};
    pub use crate::codec::{PngCodec, PngCompression, RasterCodec};
    pub use crate::error::{Error, Result};
    pub use crate::pak::{
        ImagePak, PackOutput, PakInfo, PakPhase, PakProgress, ProgressCallback,
        collect_entries, write_entries,
    };
    pub use crate::pixel::{PixelGrid, grid_dimensions, pack, unpack};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
