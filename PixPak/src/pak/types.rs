//! Types shared by image pak operations

/// Progress callback type
pub type ProgressCallback<'a> = &'a dyn Fn(&PakProgress);

/// Progress information during pak operations
#[derive(Debug, Clone)]
pub struct PakProgress {
    /// Current operation phase
    pub phase: PakPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current file being processed (if applicable)
    pub current_file: Option<String>,
}

impl PakProgress {
    #[must_use]
    pub fn new(phase: PakPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file name
    #[must_use]
    pub fn with_file(
        phase: PakPhase,
        current: usize,
        total: usize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Phase of a pak operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PakPhase {
    /// Reading files from a directory tree
    ScanningFiles,
    /// Serializing and encoding the image
    Encoding,
    /// Decoding the image and parsing the archive
    Decoding,
    /// Writing files to disk (during extraction)
    WritingFiles,
    /// Operation complete
    Complete,
}

impl PakPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScanningFiles => "Scanning files",
            Self::Encoding => "Encoding image",
            Self::Decoding => "Decoding image",
            Self::WritingFiles => "Writing files",
            Self::Complete => "Complete",
        }
    }
}

/// What `pack_directory` writes to the output path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackOutput {
    /// Raw image file bytes
    #[default]
    Image,
    /// The image as a `data:<mime>;base64,...` text file
    DataUrl,
}

/// Geometry and payload statistics of a packed image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PakInfo {
    /// Grid width in pixels
    pub width: u32,
    /// Grid height in pixels
    pub height: u32,
    /// Bytes the grid can carry (width * height * 4)
    pub capacity: usize,
    /// Length of the flat payload inside the grid
    pub payload_len: usize,
    /// Zero bytes after the payload
    pub padding: usize,
    /// Number of entries in the archive
    pub entry_count: usize,
    /// Sum of all entry data lengths
    pub data_len: u64,
}
