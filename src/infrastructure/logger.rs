//! 日志基础设施

use super::config::LoggingConfig;
use anyhow::Result;
use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化全局日志订阅器
///
/// 控制台输出到 stdout；启用文件输出时按天滚动写入 `log_path`。
/// `RUST_LOG` 优先于配置的级别。返回的 guard 需在进程生命周期内持有，
/// drop 时刷新文件写入器。
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let console_layer = config
        .console_output
        .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

    let (file_layer, guard) = if config.file_output {
        std::fs::create_dir_all(&config.log_path)?;
        let file_appender = rolling::daily(&config.log_path, &config.file_prefix);
        let (writer, guard) = non_blocking(file_appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .with_thread_names(true);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
