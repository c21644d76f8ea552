//! 幀率掃描元件
//!
//! 遞迴掃描資料夾，透過 ffprobe 取得每個影片的幀率，列出符合門檻的檔案

mod main;
mod observer;
mod report;
mod request;
mod scanner;

pub use main::{FpsFinder, OutputFormat};
pub use observer::{NoopObserver, ScanObserver};
pub use report::{FrameRateMatch, ScanReport, format_report};
pub use request::ScanRequest;
pub use scanner::FrameRateScanner;
