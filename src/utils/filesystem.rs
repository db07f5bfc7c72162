//! File system utility functions

use super::sanitizers::strip_bom;
use std::path::Path;

/// Read a text file, dropping a leading BOM
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(strip_bom(&text).to_string())
}
