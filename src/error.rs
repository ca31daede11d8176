//! 核心错误类型
//!
//! 地址编解码与文档解析的硬错误。规则校验发现的问题不走这里，
//! 它们作为 `ValidationIssue` 数据返回（见 `service::rule_validator`）。

use thiserror::Error;

/// 核心错误
#[derive(Debug, Error)]
pub enum CoreError {
    /// Bech32 / hex 解码失败（校验和、字符集、长度）
    #[error("decode error: {0}")]
    Decode(String),

    /// 地址格式无法识别，或目标格式不支持该负载长度
    #[error("address format error: {0}")]
    Format(String),

    /// 交易文档不是合法 JSON
    #[error("document parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CoreError {
    /// 稳定错误代码（snake_case，便于客户端处理）
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::Decode(_) => "invalid_address",
            CoreError::Format(_) => "unsupported_address_format",
            CoreError::Parse(_) => "invalid_json",
        }
    }
}
