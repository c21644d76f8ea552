use env_logger::Env;

/// 初始化日誌，輸出到 stderr；`RUST_LOG` 會覆寫 `-v` 指定的等級
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // 重複初始化（例如測試中）時忽略錯誤
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
