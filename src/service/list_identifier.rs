//! 转账授权列表标识符语法
//!
//! 封闭语法（只接受以下形式的精确字符串）：
//! - 保留关键字：`Mint`、`All`、`None`
//! - `address`
//! - `!address`
//! - `address:address[:address...]`
//! - `!address:address[:address...]`
//! - `!Mint:address`（资产解托管专用复合形式）

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::address::decode_bech32;
use crate::error::CoreError;

/// 铸造/托管来源关键字
pub const MINT_KEYWORD: &str = "Mint";

/// 保留关键字全集
pub const RESERVED_KEYWORDS: &[&str] = &["Mint", "All", "None"];

/// Bech32 地址形状预筛（完整校验仍走解码）
static ADDRESS_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{1,10}1[02-9ac-hj-np-z]{6,90}$").expect("valid regex"));

/// 解析后的列表标识符
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListIdentifier {
    /// 保留关键字
    Reserved(String),
    /// 单个地址
    Address(String),
    /// 取反的单个地址
    NegatedAddress(String),
    /// 冒号连接的地址集合
    AddressSet(Vec<String>),
    /// 取反的地址集合
    NegatedAddressSet(Vec<String>),
    /// `!Mint:address` 解托管形式
    Unbacking(String),
}

/// 按封闭语法解析列表标识符
pub fn parse_list_identifier(text: &str, hrp: &str) -> Result<ListIdentifier, CoreError> {
    if text.is_empty() {
        return Err(CoreError::Format("empty list identifier".to_string()));
    }

    if RESERVED_KEYWORDS.contains(&text) {
        return Ok(ListIdentifier::Reserved(text.to_string()));
    }

    let (negated, body) = match text.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    // 解托管复合形式：!Mint:address
    if negated {
        if let Some(addr) = body.strip_prefix("Mint:") {
            if !addr.contains(':') && is_chain_address(addr, hrp) {
                return Ok(ListIdentifier::Unbacking(addr.to_string()));
            }
        }
    }

    let parts: Vec<&str> = body.split(':').collect();
    if parts.iter().any(|p| !is_chain_address(p, hrp)) {
        return Err(CoreError::Format(format!(
            "list identifier is neither a reserved keyword nor an address expression: {text}"
        )));
    }

    let expr = match (negated, parts.len()) {
        (false, 1) => ListIdentifier::Address(parts[0].to_string()),
        (true, 1) => ListIdentifier::NegatedAddress(parts[0].to_string()),
        (false, _) => ListIdentifier::AddressSet(parts.iter().map(|s| s.to_string()).collect()),
        (true, _) => {
            ListIdentifier::NegatedAddressSet(parts.iter().map(|s| s.to_string()).collect())
        }
    };
    Ok(expr)
}

/// 本链地址的纯语法校验（前缀 + bech32 解码）
pub fn is_chain_address(text: &str, hrp: &str) -> bool {
    if !ADDRESS_SHAPE.is_match(text) {
        return false;
    }
    matches!(decode_bech32(text), Ok((decoded_hrp, _)) if decoded_hrp == hrp)
}
