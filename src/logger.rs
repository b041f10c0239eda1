use anyhow::{Context as _, Result};
use flexi_logger::{Logger, LoggerHandle};

/// 標準エラー出力へのロガーを起動する. レベルは `RUST_LOG` で変えられ, 既定は `warn`.
///
/// 返した `LoggerHandle` を捨てるとロガーも止まるので, `main` の終わりまで持っておく.
pub fn init() -> Result<LoggerHandle> {
    Logger::try_with_env_or_str("warn")
        .context("invalid log specification")?
        .log_to_stderr()
        .start()
        .context("failed to start logger")
}
