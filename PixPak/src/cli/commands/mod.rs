//! Subcommand definitions and dispatch

use clap::Subcommand;
use std::path::PathBuf;

use crate::codec::PngCompression;

pub mod compress;
pub mod extract;
pub mod info;
pub mod list;

#[derive(Subcommand)]
pub enum Commands {
    /// Compress a directory tree into one PNG image
    Compress {
        /// Source directory
        #[arg(default_value = "./input")]
        source: PathBuf,

        /// Output image (or data URL text file with --data-url)
        #[arg(default_value = "./out.png")]
        destination: PathBuf,

        /// PNG compression effort (fast, default, best)
        #[arg(short, long, default_value = "default")]
        compression: PngCompression,

        /// Write a data:image/png;base64 URL instead of raw PNG bytes
        #[arg(long)]
        data_url: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Extract an image back into a directory tree
    Extract {
        /// Packed image (PNG or data URL text file)
        #[arg(default_value = "./out.png")]
        source: PathBuf,

        /// Output directory
        #[arg(default_value = "./output")]
        destination: PathBuf,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the files stored in an image
    List {
        /// Packed image (PNG or data URL text file)
        source: PathBuf,

        /// Show file sizes
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show grid geometry and payload statistics of an image
    Info {
        /// Packed image (PNG or data URL text file)
        source: PathBuf,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Compress {
                source,
                destination,
                compression,
                data_url,
                quiet,
            } => compress::execute(source, destination, *compression, *data_url, *quiet),
            Commands::Extract {
                source,
                destination,
                quiet,
            } => extract::execute(source, destination, *quiet),
            Commands::List { source, detailed } => list::execute(source, *detailed),
            Commands::Info { source } => info::execute(source),
        }
    }
}
