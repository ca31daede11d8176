//! 地址编解码
//!
//! 两种文本形式：本链 Bech32（20 或 32 字节负载）与 EVM 风格 `0x` 十六进制
//! （固定 20 字节负载）。编解码只负责校验和与字符集，不解释负载长度，
//! 长度约束由上层（格式转换器）执行。

use bech32::{Bech32, Hrp};

use crate::error::CoreError;

/// 本链 Bech32 人类可读前缀
pub const BECH32_HRP: &str = "tkn";

/// 哈希派生地址的负载长度（SHA-256 摘要）
pub const MODULE_ADDRESS_LEN: usize = 32;

/// 简单账户地址的负载长度
pub const ACCOUNT_ADDRESS_LEN: usize = 20;

/// Bech32 编码
pub fn encode_bech32(hrp: &str, bytes: &[u8]) -> Result<String, CoreError> {
    let hrp = Hrp::parse(hrp).map_err(|e| CoreError::Decode(format!("invalid HRP: {e}")))?;

    bech32::encode::<Bech32>(hrp, bytes)
        .map_err(|e| CoreError::Decode(format!("bech32 encoding failed: {e}")))
}

/// Bech32 解码，返回（前缀, 负载字节）
pub fn decode_bech32(text: &str) -> Result<(String, Vec<u8>), CoreError> {
    let (hrp, bytes) =
        bech32::decode(text).map_err(|e| CoreError::Decode(format!("bech32 decode: {e}")))?;
    // 全大写输入也合法，前缀统一按小写返回
    Ok((hrp.to_string().to_lowercase(), bytes))
}

/// EVM 风格十六进制编码（`0x` + 40 位小写 hex）
pub fn encode_eth(bytes: &[u8; ACCOUNT_ADDRESS_LEN]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// EVM 风格十六进制解码
pub fn decode_eth(text: &str) -> Result<[u8; ACCOUNT_ADDRESS_LEN], CoreError> {
    let stripped = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .ok_or_else(|| CoreError::Decode("missing 0x prefix".to_string()))?;

    if stripped.len() != ACCOUNT_ADDRESS_LEN * 2 {
        return Err(CoreError::Decode(format!(
            "expected {} hex chars, got {}",
            ACCOUNT_ADDRESS_LEN * 2,
            stripped.len()
        )));
    }

    let decoded =
        hex::decode(stripped).map_err(|e| CoreError::Decode(format!("hex decode: {e}")))?;

    let mut bytes = [0u8; ACCOUNT_ADDRESS_LEN];
    bytes.copy_from_slice(&decoded);
    Ok(bytes)
}

/// 账户地址（原始字节 + 文本编码）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountAddress {
    bytes: Vec<u8>,
}

impl AccountAddress {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// 从 Bech32 文本解析，同时校验前缀
    pub fn from_bech32(text: &str, expected_hrp: &str) -> Result<Self, CoreError> {
        let (hrp, bytes) = decode_bech32(text)?;
        if hrp != expected_hrp {
            return Err(CoreError::Decode(format!(
                "unexpected address prefix: {hrp} (expected {expected_hrp})"
            )));
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// 是否为模块派生地址（32 字节负载）
    pub fn is_module_address(&self) -> bool {
        self.bytes.len() == MODULE_ADDRESS_LEN
    }

    pub fn to_bech32(&self, hrp: &str) -> Result<String, CoreError> {
        encode_bech32(hrp, &self.bytes)
    }
}
