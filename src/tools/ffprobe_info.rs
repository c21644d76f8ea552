use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 單一檔案的探測結果：成功取得幀率，或附上失敗原因
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    Available(f64),
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct VideoProbeResult {
    pub path: PathBuf,
    pub outcome: ProbeOutcome,
}

/// 取得影片幀率的外部能力。實作不得 panic，所有失敗都轉為 `Unavailable`
pub trait FrameRateProbe {
    fn probe(&self, path: &Path) -> ProbeOutcome;
}

impl<P: FrameRateProbe + ?Sized> FrameRateProbe for &P {
    fn probe(&self, path: &Path) -> ProbeOutcome {
        (**self).probe(path)
    }
}

#[derive(Deserialize)]
struct FfprobeOutput {
    streams: Option<Vec<StreamInfo>>,
}

#[derive(Deserialize)]
struct StreamInfo {
    codec_type: Option<String>,
    r_frame_rate: Option<String>,
    avg_frame_rate: Option<String>,
}

/// 使用 ffprobe 取得幀率
#[derive(Debug, Clone)]
pub struct FfprobeProbe {
    program: PathBuf,
}

impl FfprobeProbe {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// 執行 `ffprobe -version`，回傳版本資訊的第一行
    pub fn check_available(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("-version")
            .output()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        if !output.status.success() {
            bail!("{} -version exited with {}", self.program.display(), output.status);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or_default().to_string())
    }

    fn read_frame_rate(&self, path: &Path) -> Result<f64> {
        // output() 會等待子程序結束並關閉所有管線，失敗路徑也不會殘留檔案控制代碼
        let output = Command::new(&self.program)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=codec_type,r_frame_rate,avg_frame_rate",
                "-of",
                "json",
            ])
            .arg(path)
            .output()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if stderr.is_empty() {
                bail!("ffprobe exited with {}", output.status);
            }
            bail!("ffprobe failed: {stderr}");
        }

        parse_ffprobe_output(&String::from_utf8_lossy(&output.stdout))
    }
}

impl FrameRateProbe for FfprobeProbe {
    fn probe(&self, path: &Path) -> ProbeOutcome {
        match self.read_frame_rate(path) {
            Ok(rate) => ProbeOutcome::Available(rate),
            Err(e) => ProbeOutcome::Unavailable(format!("{e:#}")),
        }
    }
}

fn parse_ffprobe_output(stdout: &str) -> Result<f64> {
    let probe: FfprobeOutput =
        serde_json::from_str(stdout).context("Failed to parse ffprobe output")?;

    // 找到視訊串流
    let video_stream = probe
        .streams
        .as_ref()
        .and_then(|streams| {
            streams
                .iter()
                .find(|s| s.codec_type.as_deref().is_none_or(|t| t == "video"))
        })
        .ok_or_else(|| anyhow!("No video stream found"))?;

    // r_frame_rate 優先，無效時改用 avg_frame_rate
    [&video_stream.r_frame_rate, &video_stream.avg_frame_rate]
        .into_iter()
        .flatten()
        .find_map(|rate| parse_frame_rate(rate))
        .ok_or_else(|| anyhow!("Video stream reports no usable frame rate"))
}

/// 解析幀率字串（例如 "30/1"、"30000/1001" 或 "29.97"），0 與非有限值視為無效
fn parse_frame_rate(rate: &str) -> Option<f64> {
    let value = if let Some((num_str, den_str)) = rate.split_once('/') {
        let num: f64 = num_str.trim().parse().ok()?;
        let den: f64 = den_str.trim().parse().ok()?;
        if den == 0.0 {
            return None;
        }
        num / den
    } else {
        rate.trim().parse().ok()?
    };

    (value.is_finite() && value > 0.0).then_some(value)
}
