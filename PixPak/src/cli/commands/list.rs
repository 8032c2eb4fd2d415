//! CLI command for listing the files in an image

use std::path::Path;

use crate::pak::ImagePak;

pub fn execute(source: &Path, detailed: bool) -> anyhow::Result<()> {
    let entries = ImagePak::new().read_entries(source)?;

    for entry in &entries {
        if detailed {
            println!("{:>10}  {}", format_size(entry.len() as u64), entry.name);
        } else {
            println!("{}", entry.name);
        }
    }

    if detailed {
        let total: u64 = entries.iter().map(|e| e.len() as u64).sum();
        println!();
        println!("{} file(s), {}", entries.len(), format_size(total));
    }
    Ok(())
}

/// Format byte size for display
pub(crate) fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    const GB: u64 = 1024 * MB;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
