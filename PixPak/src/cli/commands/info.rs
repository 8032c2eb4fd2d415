//! CLI command for showing image geometry and payload statistics

use std::path::Path;

use super::list::format_size;
use crate::pak::{ImagePak, load_image_bytes};

pub fn execute(source: &Path) -> anyhow::Result<()> {
    let image = load_image_bytes(source)?;
    let info = ImagePak::new().inspect(&image)?;

    println!("Image: {}", source.display());
    println!();
    println!("Dimensions: {}x{} pixels", info.width, info.height);
    println!("Image size: {} ({} bytes)", format_size(image.len() as u64), image.len());
    println!("Capacity: {} bytes", info.capacity);
    println!("Payload: {} bytes", info.payload_len);
    println!("Padding: {} bytes", info.padding);
    println!();
    println!("Files: {}", info.entry_count);
    println!("File data: {} ({} bytes)", format_size(info.data_len), info.data_len);
    Ok(())
}
