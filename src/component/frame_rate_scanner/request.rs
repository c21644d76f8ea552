use crate::config::{ComparisonMode, ExtensionSet};
use crate::error::{ScanError, ScanResult};
use std::path::{Path, PathBuf};

/// 一次掃描的參數，建立後不可變更
#[derive(Debug, Clone)]
pub struct ScanRequest {
    root: PathBuf,
    target_fps: f64,
    mode: ComparisonMode,
    extensions: ExtensionSet,
}

impl ScanRequest {
    /// 門檻必須是有限數值，副檔名清單不可為空；資料夾是否存在留待掃描時檢查
    pub fn new(
        root: impl Into<PathBuf>,
        target_fps: f64,
        mode: ComparisonMode,
        extensions: ExtensionSet,
    ) -> ScanResult<Self> {
        if !target_fps.is_finite() {
            return Err(ScanError::InvalidThreshold(target_fps));
        }
        if extensions.is_empty() {
            return Err(ScanError::NoExtensions);
        }

        Ok(Self {
            root: root.into(),
            target_fps,
            mode,
            extensions,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn target_fps(&self) -> f64 {
        self.target_fps
    }

    #[must_use]
    pub const fn mode(&self) -> ComparisonMode {
        self.mode
    }

    #[must_use]
    pub const fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    #[must_use]
    pub fn qualifies(&self, frame_rate: f64) -> bool {
        self.mode.matches(frame_rate, self.target_fps)
    }
}
