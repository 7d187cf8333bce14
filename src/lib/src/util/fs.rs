use std::fs;
use std::path::Path;

use crate::error::SchemaDiffError;

pub fn read_from_path(path: impl AsRef<Path>) -> Result<String, SchemaDiffError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| SchemaDiffError::file_read_error(path, err))
}

/// Write the contents to the path, creating any missing parent directories.
pub fn write_to_path(path: impl AsRef<Path>, value: impl AsRef<str>) -> Result<(), SchemaDiffError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    log::debug!("write_to_path {:?}", path);
    fs::write(path, value.as_ref().as_bytes())
        .map_err(|err| SchemaDiffError::file_create_error(path, err))
}

pub fn remove_dir_all(path: impl AsRef<Path>) -> Result<(), SchemaDiffError> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    Ok(())
}
