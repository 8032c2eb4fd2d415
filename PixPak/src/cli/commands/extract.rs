//! CLI command for extracting an image into a directory

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{DISK, PACKAGE, file_bar, print_done, print_step, update_bar};
use crate::pak::{ImagePak, PakPhase};

pub fn execute(source: &Path, destination: &Path, quiet: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    let pak = ImagePak::new();

    if !quiet {
        print_step(1, 2, &PACKAGE, &format!("Decoding {}...", source.display()));
    }

    let pb = file_bar(quiet);
    let count = pak.unpack_image_with_progress(source, destination, &|progress| {
        if progress.phase == PakPhase::WritingFiles && progress.current == 1 && !quiet {
            pb.suspend(|| print_step(2, 2, &DISK, "Writing files..."));
        }
        update_bar(&pb, progress);
    });
    pb.finish_and_clear();
    let count = count?;

    println!("Extracted {count} file(s) -> {}", destination.display());
    if !quiet {
        print_done(start.elapsed());
    }
    Ok(())
}
