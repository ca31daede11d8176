//! 地址格式转换
//!
//! 本链 Bech32 与 EVM 风格 `0x` 十六进制之间的双向映射。检测是纯语法的
//! （前缀 + 长度/字符集），转换只对 20 字节负载成立：32 字节的模块派生
//! 地址在十六进制形式中没有对应物，转换是硬失败而非截断。

use crate::domain::address::{
    decode_bech32, decode_eth, encode_bech32, encode_eth, ACCOUNT_ADDRESS_LEN,
};
use crate::error::CoreError;

/// 地址文本格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormat {
    /// 本链 Bech32 形式
    Native,
    /// EVM 风格 `0x` 十六进制形式
    Eth,
    /// 无法识别
    Unknown,
}

/// 格式转换器
pub struct FormatConverter {
    hrp: String,
}

impl FormatConverter {
    pub fn new(hrp: impl Into<String>) -> Self {
        Self { hrp: hrp.into() }
    }

    /// 检测地址文本格式（纯语法判断，不做密码学校验）
    pub fn detect_format(&self, address: &str) -> AddressFormat {
        if address.starts_with("0x") || address.starts_with("0X") {
            let hex_part = &address[2..];
            if hex_part.len() == ACCOUNT_ADDRESS_LEN * 2
                && hex_part.chars().all(|c| c.is_ascii_hexdigit())
            {
                return AddressFormat::Eth;
            }
            return AddressFormat::Unknown;
        }

        let prefix = format!("{}1", self.hrp);
        if address.to_lowercase().starts_with(&prefix) && decode_bech32(address).is_ok() {
            return AddressFormat::Native;
        }

        AddressFormat::Unknown
    }

    /// 转换到另一种格式
    pub fn to_other_format(&self, address: &str) -> Result<String, CoreError> {
        match self.detect_format(address) {
            AddressFormat::Native => {
                let (_, bytes) = decode_bech32(address)?;
                if bytes.len() != ACCOUNT_ADDRESS_LEN {
                    // 模块派生地址（32 字节）不可转换
                    return Err(CoreError::Format(format!(
                        "payload is {} bytes; only {}-byte addresses have a hex form",
                        bytes.len(),
                        ACCOUNT_ADDRESS_LEN
                    )));
                }
                let mut payload = [0u8; ACCOUNT_ADDRESS_LEN];
                payload.copy_from_slice(&bytes);
                Ok(encode_eth(&payload))
            }
            AddressFormat::Eth => {
                let payload = decode_eth(address)?;
                encode_bech32(&self.hrp, &payload)
            }
            AddressFormat::Unknown => Err(CoreError::Format(format!(
                "address matches no known convention: {address}"
            ))),
        }
    }
}
