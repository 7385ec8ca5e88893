use std::fs;
use std::path::Path;

use crate::error::Result;

/// Write the rendered index, replacing any previous content
pub fn write_index(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    Ok(())
}
