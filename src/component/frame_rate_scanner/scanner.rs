use super::observer::{NoopObserver, ScanObserver};
use super::report::ScanReport;
use super::request::ScanRequest;
use crate::error::ScanResult;
use crate::tools::{
    FrameRateProbe, ProbeOutcome, VideoProbeResult, scan_video_files, validate_directory_exists,
};
use log::{debug, info};
use std::time::Instant;

/// 依序走訪資料夾並探測每個候選影片的幀率
///
/// 單一檔案探測失敗只會計入 `probe_failures`，不會中斷掃描；
/// 只有根目錄不存在或不是資料夾時才回傳錯誤
pub struct FrameRateScanner<P> {
    probe: P,
}

impl<P: FrameRateProbe> FrameRateScanner<P> {
    pub const fn new(probe: P) -> Self {
        Self { probe }
    }

    pub fn scan(&self, request: &ScanRequest) -> ScanResult<ScanReport> {
        self.scan_with_observer(request, &mut NoopObserver)
    }

    pub fn scan_with_observer(
        &self,
        request: &ScanRequest,
        observer: &mut dyn ScanObserver,
    ) -> ScanResult<ScanReport> {
        validate_directory_exists(request.root())?;

        info!(
            "Scanning {} for {} files with fps {} {}",
            request.root().display(),
            request.extensions(),
            request.mode().symbol(),
            request.target_fps()
        );

        let started = Instant::now();
        let mut report = ScanReport::default();

        for path in scan_video_files(request.root(), request.extensions()) {
            observer.file_started(&path);
            let result = VideoProbeResult {
                outcome: self.probe.probe(&path),
                path,
            };
            report.record_examined();

            match result.outcome {
                ProbeOutcome::Available(frame_rate) => {
                    debug!("{}: {frame_rate:.2} fps", result.path.display());
                    if request.qualifies(frame_rate) {
                        observer.match_found(&result.path, frame_rate);
                        report.record_match(result.path, frame_rate);
                    }
                }
                ProbeOutcome::Unavailable(reason) => {
                    debug!("{}: probe failed: {reason}", result.path.display());
                    observer.probe_failed(&result.path, &reason);
                    report.record_failure();
                }
            }
        }

        let report = report.finish(started.elapsed());
        info!(
            "Scan finished: {} examined, {} matched, {} failed in {:.2}s",
            report.files_examined(),
            report.matches().len(),
            report.probe_failures(),
            report.elapsed().as_secs_f64()
        );

        Ok(report)
    }
}
