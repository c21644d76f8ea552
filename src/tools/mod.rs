mod ffprobe_info;
mod path_validator;
mod video_scanner;

pub use ffprobe_info::{FfprobeProbe, FrameRateProbe, ProbeOutcome, VideoProbeResult};
pub use path_validator::validate_directory_exists;
pub use video_scanner::scan_video_files;
