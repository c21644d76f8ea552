//! 掃描流程的錯誤型別
//!
//! 只有無法開始掃描的情況才是錯誤；單一檔案的探測失敗以 `ProbeOutcome::Unavailable` 表示

use std::path::PathBuf;
use thiserror::Error;

pub type ScanResult<T> = Result<T, ScanError>;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("target frame rate must be a finite number, got {0}")]
    InvalidThreshold(f64),

    #[error("no file extensions to scan for")]
    NoExtensions,
}
