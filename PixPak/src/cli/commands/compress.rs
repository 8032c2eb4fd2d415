//! CLI command for packing a directory into an image

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{LOOKING_GLASS, PICTURE, file_bar, print_done, print_step, update_bar};
use crate::codec::{PngCodec, PngCompression};
use crate::pak::{ImagePak, PackOutput, PakPhase};

pub fn execute(
    source: &Path,
    destination: &Path,
    compression: PngCompression,
    data_url: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let pak = ImagePak::with_codec(PngCodec::new().with_compression(compression));
    let format = if data_url {
        PackOutput::DataUrl
    } else {
        PackOutput::Image
    };

    if !quiet {
        print_step(1, 2, &LOOKING_GLASS, &format!("Reading {}...", source.display()));
    }

    let pb = file_bar(quiet);
    let count = pak.pack_directory_with_progress(source, destination, format, &|progress| {
        update_bar(&pb, progress);
        if progress.phase == PakPhase::Encoding {
            pb.finish_and_clear();
            if !quiet {
                print_step(2, 2, &PICTURE, &format!("Encoding image ({compression})..."));
            }
        }
    });
    pb.finish_and_clear();
    let count = count?;

    println!("Compressed {count} file(s) -> {}", destination.display());
    if !quiet {
        print_done(start.elapsed());
    }
    Ok(())
}
