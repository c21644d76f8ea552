use super::request::ScanRequest;
use crate::config::{ComparisonMode, ExtensionSet};
use console::style;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRateMatch {
    pub path: PathBuf,
    pub frame_rate: f64,
}

/// 掃描結果：符合門檻的檔案（依路徑排序）與統計
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    matches: Vec<FrameRateMatch>,
    files_examined: usize,
    probe_failures: usize,
    elapsed: Duration,
}

impl ScanReport {
    pub(super) fn record_examined(&mut self) {
        self.files_examined += 1;
    }

    pub(super) fn record_failure(&mut self) {
        self.probe_failures += 1;
    }

    pub(super) fn record_match(&mut self, path: PathBuf, frame_rate: f64) {
        self.matches.push(FrameRateMatch { path, frame_rate });
    }

    /// 依完整路徑字串排序，讓輸出不受檔案系統走訪順序影響
    pub(super) fn finish(mut self, elapsed: Duration) -> Self {
        self.matches
            .sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
        self.elapsed = elapsed;
        self
    }

    #[must_use]
    pub fn matches(&self) -> &[FrameRateMatch] {
        &self.matches
    }

    #[must_use]
    pub const fn files_examined(&self) -> usize {
        self.files_examined
    }

    #[must_use]
    pub const fn probe_failures(&self) -> usize {
        self.probe_failures
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn to_json(&self, request: &ScanRequest, directory: &Path) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            directory,
            target_fps: request.target_fps(),
            mode: request.mode(),
            extensions: request.extensions(),
            matches: &self.matches,
            files_examined: self.files_examined,
            probe_failures: self.probe_failures,
            elapsed_seconds: self.elapsed.as_secs_f64(),
        })
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    directory: &'a Path,
    target_fps: f64,
    mode: ComparisonMode,
    extensions: &'a ExtensionSet,
    matches: &'a [FrameRateMatch],
    files_examined: usize,
    probe_failures: usize,
    elapsed_seconds: f64,
}

/// 產生人類可讀的報告文字
#[must_use]
pub fn format_report(report: &ScanReport, request: &ScanRequest, directory: &Path) -> String {
    let mut lines = vec![
        style("=== Frame Rate Scan ===").cyan().bold().to_string(),
        format!(
            "Files with frame rate {} {:.2} fps:",
            request.mode().symbol(),
            request.target_fps()
        ),
    ];

    if report.matches.is_empty() {
        lines.push(format!("  {}", style("No matching files found").yellow()));
    }
    lines.extend(report.matches.iter().map(|found| {
        format!(
            "  {}  {}",
            found.path.display(),
            style(format!("{:.2} fps", found.frame_rate)).green()
        )
    }));

    let failures = if report.probe_failures > 0 {
        style(report.probe_failures).red().to_string()
    } else {
        report.probe_failures.to_string()
    };

    lines.extend([
        String::new(),
        style("=== Summary ===").cyan().bold().to_string(),
        format!("  Files examined: {}", report.files_examined),
        format!("  Probe failures: {failures}"),
        format!("  Checked directory: {}", directory.display()),
        format!(
            "  Target fps: {:.2} ({})",
            request.target_fps(),
            request.mode()
        ),
        format!("  Extensions: {}", request.extensions()),
        format!("  Elapsed: {:.2}s", report.elapsed.as_secs_f64()),
    ]);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ScanRequest {
        ScanRequest::new(
            "/media",
            25.0,
            ComparisonMode::GreaterThan,
            ExtensionSet::new(["mp4", "mkv"]),
        )
        .unwrap()
    }

    fn sample_report() -> ScanReport {
        let mut report = ScanReport::default();
        for _ in 0..3 {
            report.record_examined();
        }
        report.record_failure();
        report.record_match(PathBuf::from("/media/b.mkv"), 200.0);
        report.record_match(PathBuf::from("/media/a.mp4"), 29.97);
        report.finish(Duration::from_millis(1234))
    }

    #[test]
    fn test_finish_sorts_by_path() {
        let report = sample_report();
        let paths: Vec<&Path> = report.matches().iter().map(|m| m.path.as_path()).collect();
        assert_eq!(paths, [Path::new("/media/a.mp4"), Path::new("/media/b.mkv")]);
        assert_eq!(report.files_examined(), 3);
        assert_eq!(report.probe_failures(), 1);
    }

    #[test]
    fn test_finish_orders_by_full_path_string() {
        let mut report = ScanReport::default();
        report.record_match(PathBuf::from("/m/show/x.mp4"), 60.0);
        report.record_match(PathBuf::from("/m/show-2/x.mp4"), 60.0);
        report.record_match(PathBuf::from("/m/show.extra/x.mp4"), 60.0);
        let report = report.finish(Duration::ZERO);

        // '-' (0x2d) 與 '.' (0x2e) 都排在 '/' (0x2f) 之前
        let paths: Vec<&Path> = report.matches().iter().map(|m| m.path.as_path()).collect();
        assert_eq!(
            paths,
            [
                Path::new("/m/show-2/x.mp4"),
                Path::new("/m/show.extra/x.mp4"),
                Path::new("/m/show/x.mp4"),
            ]
        );
    }

    #[test]
    fn test_format_report_contents() {
        let text = console::strip_ansi_codes(&format_report(
            &sample_report(),
            &sample_request(),
            Path::new("/media"),
        ))
        .to_string();

        assert!(text.contains("Files with frame rate > 25.00 fps:"));
        assert!(text.contains("/media/a.mp4  29.97 fps"));
        assert!(text.contains("/media/b.mkv  200.00 fps"));
        assert!(text.contains("Files examined: 3"));
        assert!(text.contains("Probe failures: 1"));
        assert!(text.contains("Checked directory: /media"));
        assert!(text.contains("Target fps: 25.00 (greater-than)"));
        assert!(text.contains("Extensions: .mp4, .mkv"));
        assert!(text.contains("Elapsed: 1.23s"));
    }

    #[test]
    fn test_format_empty_report() {
        let report = ScanReport::default().finish(Duration::ZERO);
        let text = console::strip_ansi_codes(&format_report(
            &report,
            &sample_request(),
            Path::new("/media"),
        ))
        .to_string();
        assert!(text.contains("No matching files found"));
        assert!(text.contains("Files examined: 0"));
    }

    #[test]
    fn test_json_report() {
        let json = sample_report()
            .to_json(&sample_request(), Path::new("/media"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["mode"], "greater-than");
        assert_eq!(value["extensions"], serde_json::json!([".mp4", ".mkv"]));
        assert_eq!(value["files_examined"], 3);
        assert_eq!(value["probe_failures"], 1);
        assert_eq!(value["matches"][0]["path"], "/media/a.mp4");
        assert_eq!(value["matches"][1]["frame_rate"], 200.0);
    }
}
