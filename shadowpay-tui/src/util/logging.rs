//! 日志初始化
//!
//! stdout 归 TUI 所有，日志写入文件：
//!     <data_local_dir>/shadowpay/shadowpay.log
//!
//! 代码通过 `log` 门面记录，`tracing-subscriber` 的 tracing-log 桥接负责转发。

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件路径
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("shadowpay").join("shadowpay.log"))
}

/// 过滤表达式无效时回退到 `info`
pub fn parse_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// 安装全局日志订阅者，返回日志文件路径
///
/// 找不到数据目录时不记录日志。
pub fn init_logging(filter: &str) -> Result<Option<PathBuf>> {
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(parse_filter(filter))
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(Some(path))
}
