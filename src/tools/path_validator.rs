use crate::error::{ScanError, ScanResult};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> ScanResult<()> {
    if !path.exists() {
        return Err(ScanError::DirectoryNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}
