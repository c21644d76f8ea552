//! 幀率掃描主模組
//!
//! 協調掃描、進度顯示與報告輸出

use super::observer::ScanObserver;
use super::report::{ScanReport, format_report};
use super::request::ScanRequest;
use super::scanner::FrameRateScanner;
use crate::tools::FfprobeProbe;
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 幀率掃描元件
pub struct FpsFinder {
    request: ScanRequest,
    probe: FfprobeProbe,
    output: OutputFormat,
    show_progress: bool,
}

impl FpsFinder {
    pub const fn new(
        request: ScanRequest,
        probe: FfprobeProbe,
        output: OutputFormat,
        show_progress: bool,
    ) -> Self {
        Self {
            request,
            probe,
            output,
            show_progress,
        }
    }

    pub fn run(&self) -> Result<ScanReport> {
        self.check_ffprobe();

        let scanner = FrameRateScanner::new(&self.probe);
        let mut observer = ConsoleObserver::new(self.show_progress);
        let result = scanner.scan_with_observer(&self.request, &mut observer);
        observer.finish();
        let report = result?;

        let directory = absolute_directory(self.request.root());
        match self.output {
            OutputFormat::Text => {
                println!("{}", format_report(&report, &self.request, &directory));
            }
            OutputFormat::Json => {
                let json = report
                    .to_json(&self.request, &directory)
                    .context("Failed to serialize scan report")?;
                println!("{json}");
            }
        }

        Ok(report)
    }

    /// ffprobe 不可用時每個檔案都會探測失敗，先提醒使用者但不中止
    fn check_ffprobe(&self) {
        match self.probe.check_available() {
            Ok(version) => info!("Using {version}"),
            Err(e) => {
                warn!("ffprobe unavailable: {e:#}");
                eprintln!(
                    "{} {} ({e:#}); every file will be reported as unreadable",
                    style("Warning:").yellow().bold(),
                    style(format!("{} is not available", self.probe.program().display())).yellow()
                );
            }
        }
    }
}

fn absolute_directory(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// 在 stderr 顯示目前檢查的檔案，並輸出探測失敗的診斷訊息
struct ConsoleObserver {
    progress_bar: ProgressBar,
}

impl ConsoleObserver {
    fn new(show_progress: bool) -> Self {
        let progress_bar = if show_progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} checked {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { progress_bar }
    }

    fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl ScanObserver for ConsoleObserver {
    fn file_started(&mut self, path: &Path) {
        self.progress_bar.inc(1);
        self.progress_bar
            .set_message(format!("Checking {}", display_name(path)));
    }

    fn probe_failed(&mut self, path: &Path, reason: &str) {
        let name = display_name(path);
        self.progress_bar.suspend(|| {
            eprintln!(
                "{} {name}: {reason}",
                style("Could not read frame rate of").red()
            );
        });
    }
}
