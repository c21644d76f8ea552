use crate::config::types::{Config, SETTINGS_FILE_NAME, ScanDefaults, UserSettings};
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// 編譯時嵌入的預設設定（不需要外部檔案）
const DEFAULT_SETTINGS_JSON: &str = include_str!("../data/default_settings.json");

impl Config {
    /// 載入預設值並套用使用者設定；未指定路徑時讀取工作目錄下的 `fps_scan.json`（若存在）
    ///
    /// 指定設定檔時，檔案不存在視為錯誤；未指定時才允許缺少
    pub fn load(settings_path: Option<&Path>) -> Result<Self> {
        let settings = match settings_path {
            Some(path) => Self::load_settings(path)?,
            None => Self::load_optional_settings(Path::new(SETTINGS_FILE_NAME))?,
        };
        Self::from_settings(settings)
    }

    pub fn from_settings(settings: UserSettings) -> Result<Self> {
        Ok(Self {
            defaults: Self::load_embedded_defaults()?,
            settings,
        })
    }

    fn load_optional_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(UserSettings::default());
        }
        Self::load_settings(path)
    }

    fn load_settings(path: &Path) -> Result<UserSettings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn load_embedded_defaults() -> Result<ScanDefaults> {
        serde_json::from_str(DEFAULT_SETTINGS_JSON).context("Failed to parse embedded default settings")
    }
}
