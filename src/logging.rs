//! 日志系统配置模块
//! 支持结构化日志与日志级别配置

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::config::LoggingConfig;

/// 初始化日志系统
///
/// 库本身只通过 `tracing` 宏产生事件；宿主进程调用一次本函数即可
/// 接上控制台输出。重复初始化返回错误。
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    // 设置日志级别过滤器
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.format == "json" {
        Registry::default()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()?;
    } else {
        Registry::default()
            .with(filter)
            .with(fmt::layer())
            .try_init()?;
    }

    Ok(())
}
