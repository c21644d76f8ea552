use crate::config::ExtensionSet;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 遞迴列出副檔名符合的一般檔案，不跟隨符號連結
///
/// 無法讀取的項目（例如沒有權限的子資料夾）只記錄警告並略過
pub fn scan_video_files<'a>(
    directory: &Path,
    extensions: &'a ExtensionSet,
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| extensions.is_video_file(entry.path()))
        .map(DirEntry::into_path)
}
