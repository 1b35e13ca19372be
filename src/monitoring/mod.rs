/*!
 * 日志初始化
 *
 * RUST_LOG 优先，未设置时使用配置中的级别；日志写到 stderr，stdout 留给渲染输出。
 */
use tracing_subscriber::EnvFilter;

use crate::models::LoggingConfig;

/// 根据 RUST_LOG 和配置构造过滤器
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    build_filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), config)
}

/// `directives` 非空且可解析时优先，否则使用 `logging.level`
pub fn build_filter_from(directives: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(config.level.to_ascii_lowercase()))
}

/// 安装全局 tracing subscriber
///
/// 重复调用时保留已有的 subscriber。
pub fn init_logging(config: &LoggingConfig) {
    let filter = build_filter(config);
    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    if installed.is_ok() {
        tracing::debug!(level = %config.level, json = config.json, "logging initialized");
    }
}
