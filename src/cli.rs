//! 命令列參數定義
//!
//! 優先順序：命令列參數 > 設定檔 > 內建預設值

use crate::component::frame_rate_scanner::{OutputFormat, ScanRequest};
use crate::config::{ComparisonMode, Config, ExtensionSet};
use crate::error::ScanResult;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Find video files whose frame rate meets a threshold
#[derive(Parser, Debug)]
#[command(name = "fps_scan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan recursively
    pub directory: PathBuf,

    /// Frame rate threshold [default: 25.0, or 200.0 with --mode equals]
    #[arg(short = 't', long = "target-fps", allow_negative_numbers = true)]
    pub target_fps: Option<f64>,

    /// File extensions to check, with or without a leading dot [default: .mp4 .mkv .avi .mov .wmv]
    #[arg(short, long, num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Comparison against the threshold [default: greater-than]
    #[arg(short, long, value_enum)]
    pub mode: Option<ComparisonMode>,

    /// Settings file [default: ./fps_scan.json when present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// ffprobe executable to use
    #[arg(long)]
    pub ffprobe: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn scan_request(&self, config: &Config) -> ScanResult<ScanRequest> {
        let mode = self.mode.unwrap_or_else(|| config.mode());
        let target_fps = self.target_fps.unwrap_or_else(|| config.target_fps(mode));
        let extensions = self
            .extensions
            .as_ref()
            .map_or_else(|| config.extensions().clone(), ExtensionSet::new);

        ScanRequest::new(self.directory.clone(), target_fps, mode, extensions)
    }

    #[must_use]
    pub fn ffprobe_path(&self, config: &Config) -> PathBuf {
        self.ffprobe
            .clone()
            .unwrap_or_else(|| config.ffprobe_path().to_path_buf())
    }

    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserSettings;
    use crate::error::ScanError;
    use std::path::Path;

    fn config_with(settings: UserSettings) -> Config {
        Config::from_settings(settings).unwrap()
    }

    #[test]
    fn test_defaults_apply_without_flags() {
        let cli = Cli::parse_from(["fps_scan", "/media"]);
        let request = cli.scan_request(&config_with(UserSettings::default())).unwrap();

        assert_eq!(request.root(), Path::new("/media"));
        assert!((request.target_fps() - 25.0).abs() < f64::EPSILON);
        assert_eq!(request.mode(), ComparisonMode::GreaterThan);
        assert_eq!(request.extensions().as_slice().len(), 5);
        assert_eq!(cli.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_equals_mode_without_target_defaults_to_200() {
        let cli = Cli::parse_from(["fps_scan", "/media", "-m", "equals"]);
        let request = cli.scan_request(&config_with(UserSettings::default())).unwrap();

        assert_eq!(request.mode(), ComparisonMode::Equals);
        assert!((request.target_fps() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_explicit_target_wins_over_mode_default() {
        let cli = Cli::parse_from(["fps_scan", "/media", "-m", "equals", "-t", "120"]);
        let request = cli.scan_request(&config_with(UserSettings::default())).unwrap();
        assert!((request.target_fps() - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from([
            "fps_scan", "/media", "-t", "200", "-m", "equals", "-e", "MP4", ".mkv", "--json",
        ]);
        let settings = UserSettings {
            target_fps: Some(60.0),
            mode: Some(ComparisonMode::GreaterThan),
            extensions: Some(ExtensionSet::new(["avi"])),
            ffprobe_path: Some(PathBuf::from("/opt/ffprobe")),
        };
        let config = config_with(settings);
        let request = cli.scan_request(&config).unwrap();

        assert!((request.target_fps() - 200.0).abs() < f64::EPSILON);
        assert_eq!(request.mode(), ComparisonMode::Equals);
        assert_eq!(request.extensions().as_slice(), [".mp4", ".mkv"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert_eq!(cli.ffprobe_path(&config), PathBuf::from("/opt/ffprobe"));
    }

    #[test]
    fn test_settings_fill_missing_flags() {
        let cli = Cli::parse_from(["fps_scan", "/media", "--ffprobe", "/usr/bin/ffprobe"]);
        let settings = UserSettings {
            target_fps: Some(60.0),
            extensions: Some(ExtensionSet::new(["avi"])),
            ..UserSettings::default()
        };
        let config = config_with(settings);
        let request = cli.scan_request(&config).unwrap();

        assert!((request.target_fps() - 60.0).abs() < f64::EPSILON);
        assert_eq!(request.extensions().as_slice(), [".avi"]);
        assert_eq!(cli.ffprobe_path(&config), PathBuf::from("/usr/bin/ffprobe"));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let cli = Cli::parse_from(["fps_scan", "/media", "-t", "NaN"]);
        assert!(matches!(
            cli.scan_request(&config_with(UserSettings::default())),
            Err(ScanError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_missing_directory_argument_fails_to_parse() {
        assert!(Cli::try_parse_from(["fps_scan"]).is_err());
    }
}
