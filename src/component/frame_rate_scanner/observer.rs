use std::path::Path;

/// 掃描過程的進度通知，不影響掃描結果
pub trait ScanObserver {
    fn file_started(&mut self, _path: &Path) {}

    fn probe_failed(&mut self, _path: &Path, _reason: &str) {}

    fn match_found(&mut self, _path: &Path, _frame_rate: f64) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
