//! Path utilities

use std::path::{Component, Path};

/// Join a relative path's components with forward slashes (archive names)
///
/// Returns `None` if a component is not valid UTF-8 or the path is not a
/// plain relative path.
pub fn normalize_path(path: &Path) -> Option<String> {
    let parts = path
        .components()
        .map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;

    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Get relative path and normalize separators
pub fn relative_path(path: &Path, base: &Path) -> Option<String> {
    path.strip_prefix(base).ok().and_then(normalize_path)
}
