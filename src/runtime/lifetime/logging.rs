use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// 初始化全局日志
///
/// 开发环境输出带文件行号的文本，其他环境输出 JSON。
/// 返回的 guard 必须存活到进程结束，否则缓冲中的日志会丢失。
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = EnvFilter::try_new(&config.app.log_level).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log level '{}': {e}, falling back to info",
            config.app.log_level
        );
        EnvFilter::new("info")
    });

    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(config.is_development());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .event_format(format);

    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }

    guard
}
