// crates/geotop-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| GeoError::NotFound(format!("{} ({})", path.display(), e)))
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GeoError::NotFound(format!("{} ({})", path.display(), e)))
}

/// Creates the parent directory of an output file if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(GeoError::Io)
        }
        _ => Ok(()),
    }
}
