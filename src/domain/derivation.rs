//! 模块账户派生
//!
//! 从模块命名空间和一组有序派生键确定性地计算 32 字节账户地址。
//! 派生是严格顺序敏感的哈希链：改变模块名、键顺序或任意一个字节
//! 都会得到完全不相关的地址。

use sha2::{Digest, Sha256};

/// 模块账户派生命名空间
pub const MODULE_NAME: &str = "tokenization";

/// IBC 资产别名键标签（外部资产托管账户）
pub const IBC_ALIAS_TAG: u8 = 0x12;

/// 包装币别名键标签（本链面额的包装账户）
pub const WRAPPED_ALIAS_TAG: u8 = 0x0c;

/// 派生键
///
/// 固定布局：1 字节标签 + 负载字符串的 UTF-8 字节，无长度前缀、无分隔符。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationKey(Vec<u8>);

impl DerivationKey {
    /// 构造任意标签的派生键
    pub fn new(tag: u8, payload: &str) -> Self {
        let mut bytes = Vec::with_capacity(1 + payload.len());
        bytes.push(tag);
        bytes.extend_from_slice(payload.as_bytes());
        Self(bytes)
    }

    /// IBC 资产别名键（标签 0x12）
    pub fn ibc_alias(denom: &str) -> Self {
        Self::new(IBC_ALIAS_TAG, denom)
    }

    /// 包装币别名键（标签 0x0c）
    pub fn wrapped_alias(denom: &str) -> Self {
        Self::new(WRAPPED_ALIAS_TAG, denom)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// `H(tag, payload) = SHA-256(SHA-256(tag) || payload)`
fn tagged_hash(tag: &[u8], payload: &[u8]) -> [u8; 32] {
    let tag_digest = Sha256::digest(tag);

    let mut hasher = Sha256::new();
    hasher.update(tag_digest);
    hasher.update(payload);
    hasher.finalize().into()
}

/// 派生模块账户地址（32 字节摘要）
///
/// 种子：`H("module", module_name || 0x00 || keys[0])`，
/// 之后对每个后续键左折叠：`digest_i = H(digest_{i-1}, keys[i])`。
///
/// # Panics
/// 空键列表是调用方编程错误，直接断言失败。
pub fn derive_module_account(module_name: &str, keys: &[DerivationKey]) -> [u8; 32] {
    assert!(
        !keys.is_empty(),
        "derive_module_account requires at least one derivation key"
    );

    let mut seed = Vec::with_capacity(module_name.len() + 1 + keys[0].as_bytes().len());
    seed.extend_from_slice(module_name.as_bytes());
    seed.push(0x00);
    seed.extend_from_slice(keys[0].as_bytes());

    let mut digest = tagged_hash(b"module", &seed);
    for key in &keys[1..] {
        digest = tagged_hash(&digest, key.as_bytes());
    }

    digest
}

/// 派生 IBC 资产托管地址
pub fn derive_ibc_backing_account(denom: &str) -> [u8; 32] {
    derive_module_account(MODULE_NAME, &[DerivationKey::ibc_alias(denom)])
}

/// 派生包装币托管地址
pub fn derive_wrapped_backing_account(denom: &str) -> [u8; 32] {
    derive_module_account(MODULE_NAME, &[DerivationKey::wrapped_alias(denom)])
}
