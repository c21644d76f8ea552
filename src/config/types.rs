use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 預設會在工作目錄尋找的使用者設定檔
pub const SETTINGS_FILE_NAME: &str = "fps_scan.json";

/// Whether a file qualifies by matching the target exactly or by exceeding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonMode {
    Equals,
    #[default]
    GreaterThan,
}

impl ComparisonMode {
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn matches(self, frame_rate: f64, target_fps: f64) -> bool {
        match self {
            Self::Equals => frame_rate == target_fps,
            Self::GreaterThan => frame_rate > target_fps,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::GreaterThan => "greater-than",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equals => "==",
            Self::GreaterThan => ">",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 正規化後的副檔名清單（小寫、含前導點、去重，保留輸入順序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExtensionSet(Vec<String>);

impl ExtensionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            if let Some(ext) = normalize_extension(ext.as_ref())
                && !normalized.contains(&ext)
            {
                normalized.push(ext);
            }
        }
        Self(normalized)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        normalize_extension(extension).is_some_and(|ext| self.0.contains(&ext))
    }

    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.contains(ext))
    }
}

impl From<Vec<String>> for ExtensionSet {
    fn from(extensions: Vec<String>) -> Self {
        Self::new(extensions)
    }
}

impl From<ExtensionSet> for Vec<String> {
    fn from(set: ExtensionSet) -> Self {
        set.0
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// `mp4`、`.MP4`、` .mp4 ` 皆轉為 `.mp4`；空字串回傳 `None`
#[must_use]
pub fn normalize_extension(extension: &str) -> Option<String> {
    let trimmed = extension.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

/// 各比較模式的預設門檻：大於模式 25，等於模式 200
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DefaultTargets {
    pub greater_than: f64,
    pub equals: f64,
}

impl DefaultTargets {
    #[must_use]
    pub const fn for_mode(self, mode: ComparisonMode) -> f64 {
        match mode {
            ComparisonMode::Equals => self.equals,
            ComparisonMode::GreaterThan => self.greater_than,
        }
    }
}

/// 編譯時嵌入的預設值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanDefaults {
    pub target_fps: DefaultTargets,
    pub mode: ComparisonMode,
    pub extensions: ExtensionSet,
    pub ffprobe_path: PathBuf,
}

/// 使用者設定檔，所有欄位皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserSettings {
    pub target_fps: Option<f64>,
    pub mode: Option<ComparisonMode>,
    pub extensions: Option<ExtensionSet>,
    pub ffprobe_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub defaults: ScanDefaults,
    pub settings: UserSettings,
}

impl Config {
    /// 設定檔沒有指定門檻時，依實際使用的比較模式取預設值
    #[must_use]
    pub fn target_fps(&self, mode: ComparisonMode) -> f64 {
        self.settings
            .target_fps
            .unwrap_or_else(|| self.defaults.target_fps.for_mode(mode))
    }

    #[must_use]
    pub fn mode(&self) -> ComparisonMode {
        self.settings.mode.unwrap_or(self.defaults.mode)
    }

    #[must_use]
    pub fn extensions(&self) -> &ExtensionSet {
        self.settings
            .extensions
            .as_ref()
            .unwrap_or(&self.defaults.extensions)
    }

    #[must_use]
    pub fn ffprobe_path(&self) -> &Path {
        self.settings
            .ffprobe_path
            .as_deref()
            .unwrap_or(&self.defaults.ffprobe_path)
    }
}
