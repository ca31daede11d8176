//! 配置管理模块
//! 支持从环境变量和 TOML 配置文件加载配置

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 核心配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 链级配置
///
/// 地址前缀与派生命名空间。注册表、列表语法和格式转换器都以显式参数
/// 接收这些值，避免隐藏的全局状态。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// 本链 Bech32 人类可读前缀
    pub bech32_hrp: String,
    /// 模块账户派生命名空间
    pub module_name: String,
    /// 外部资产标识符前缀（IBC 资产）
    pub external_asset_prefix: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            bech32_hrp: crate::domain::address::BECH32_HRP.to_string(),
            module_name: crate::domain::derivation::MODULE_NAME.to_string(),
            external_asset_prefix: "ibc/".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            chain: ChainConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl CoreConfig {
    /// 从环境变量加载配置（缺省值兜底）
    pub fn from_env() -> Result<Self> {
        // 加载 .env 文件（如果存在）
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            chain: ChainConfig {
                bech32_hrp: std::env::var("TOKENCORE_BECH32_HRP")
                    .unwrap_or(defaults.chain.bech32_hrp),
                module_name: std::env::var("TOKENCORE_MODULE_NAME")
                    .unwrap_or(defaults.chain.module_name),
                external_asset_prefix: std::env::var("TOKENCORE_EXTERNAL_ASSET_PREFIX")
                    .unwrap_or(defaults.chain.external_asset_prefix),
            },
            logging: LoggingConfig {
                level: std::env::var("TOKENCORE_LOG_LEVEL").unwrap_or(defaults.logging.level),
                format: std::env::var("TOKENCORE_LOG_FORMAT").unwrap_or(defaults.logging.format),
            },
        })
    }

    /// 从 TOML 配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
