//! 代币注册表
//!
//! 预置资产的静态表，首次查询时一次性构建并缓存（显式句柄而非模块级
//! 单例，初始化顺序可测试）。托管地址在构建时经模块账户派生计算。

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::config::ChainConfig;
use crate::domain::address::encode_bech32;
use crate::domain::derivation::{
    derive_module_account, DerivationKey, MODULE_NAME,
};

/// 外部资产标识符前缀
pub const EXTERNAL_ASSET_PREFIX: &str = "ibc/";

/// 外部资产缺省小数位
pub const EXTERNAL_ASSET_DECIMALS: u32 = 6;

/// 本链资产缺省小数位
pub const NATIVE_ASSET_DECIMALS: u32 = 9;

/// 预置条目
#[derive(Clone, Copy)]
struct TokenSeed {
    symbol: &'static str,
    denom: &'static str,
    decimals: u32,
    label: &'static str,
    /// true = IBC 别名键（0x12），false = 包装币别名键（0x0c）
    ibc_backed: bool,
}

const TOKEN_SEEDS: &[TokenSeed] = &[
    TokenSeed {
        symbol: "CORE",
        denom: "ucore",
        decimals: 9,
        label: "Core Staking Token",
        ibc_backed: false,
    },
    TokenSeed {
        symbol: "USDC",
        denom: "ibc/8E27BA2D5493AF5636760E354E46004562C46AB7EC0CC4C1CA14E9E20E2545B5",
        decimals: 6,
        label: "USD Coin",
        ibc_backed: true,
    },
    TokenSeed {
        symbol: "USDT",
        denom: "ibc/B3504E092456BA618CC28AC671A71FB08C6CA0FD0BE7C8A5B5A3E2DD933CC9E4",
        decimals: 6,
        label: "Tether USD",
        ibc_backed: true,
    },
];

/// 代币描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    /// 符号（大写）
    pub symbol: String,
    /// 规范标识符
    pub denom: String,
    /// 小数位指数
    pub decimals: u32,
    /// 托管地址（Bech32 文本）
    pub address: String,
    /// 展示名称
    pub label: String,
}

/// 代币注册表
///
/// 构建一次后只读；并发读取只需 `OnceCell` 的单次构建保护。
pub struct TokenRegistry {
    hrp: String,
    module_name: String,
    external_asset_prefix: String,
    table: OnceCell<HashMap<String, TokenDescriptor>>,
}

impl TokenRegistry {
    /// 创建注册表句柄（表在首次查询时构建），派生命名空间与
    /// 外部资产前缀取缺省值
    pub fn new(hrp: impl Into<String>) -> Self {
        Self {
            hrp: hrp.into(),
            module_name: MODULE_NAME.to_string(),
            external_asset_prefix: EXTERNAL_ASSET_PREFIX.to_string(),
            table: OnceCell::new(),
        }
    }

    /// 按链配置创建注册表句柄
    pub fn from_config(config: &ChainConfig) -> Self {
        Self {
            hrp: config.bech32_hrp.clone(),
            module_name: config.module_name.clone(),
            external_asset_prefix: config.external_asset_prefix.clone(),
            table: OnceCell::new(),
        }
    }

    /// 查询代币
    ///
    /// 匹配顺序：符号（忽略大小写）→ 规范标识符（忽略大小写）→
    /// 形如 `ibc/...` 的标识符现场派生合成描述符（不回填缓存）。
    pub fn lookup(&self, query: &str) -> Option<TokenDescriptor> {
        let table = self.table();
        let needle = query.to_lowercase();

        if let Some(descriptor) = table.get(&needle) {
            return Some(descriptor.clone());
        }

        if let Some(descriptor) = table.values().find(|d| d.denom.to_lowercase() == needle) {
            return Some(descriptor.clone());
        }

        if query.starts_with(&self.external_asset_prefix) {
            tracing::debug!(denom = query, "deriving synthetic descriptor for unseeded IBC asset");
            return Some(self.synthetic_descriptor(query));
        }

        None
    }

    /// 标识符的小数位指数
    ///
    /// 已注册条目返回其指数；`ibc/` 前缀的未注册资产取外部资产缺省值，
    /// 其余按本链面额处理。
    pub fn decimals_for(&self, denom: &str) -> u32 {
        let needle = denom.to_lowercase();
        if let Some(descriptor) = self
            .table()
            .values()
            .find(|d| d.denom.to_lowercase() == needle)
        {
            return descriptor.decimals;
        }

        if denom.starts_with(&self.external_asset_prefix) {
            EXTERNAL_ASSET_DECIMALS
        } else {
            NATIVE_ASSET_DECIMALS
        }
    }

    /// 取（或首次构建）预置表，键为小写符号
    fn table(&self) -> &HashMap<String, TokenDescriptor> {
        self.table.get_or_init(|| {
            let mut table = HashMap::with_capacity(TOKEN_SEEDS.len());
            for seed in TOKEN_SEEDS {
                let key = if seed.ibc_backed {
                    DerivationKey::ibc_alias(seed.denom)
                } else {
                    DerivationKey::wrapped_alias(seed.denom)
                };
                let digest = derive_module_account(&self.module_name, &[key]);
                // 32 字节摘要在合法 bech32 长度内，编码不会失败
                let address = encode_bech32(&self.hrp, &digest)
                    .unwrap_or_else(|e| panic!("seeded address encoding failed: {e}"));

                table.insert(
                    seed.symbol.to_lowercase(),
                    TokenDescriptor {
                        symbol: seed.symbol.to_string(),
                        denom: seed.denom.to_string(),
                        decimals: seed.decimals,
                        address,
                        label: seed.label.to_string(),
                    },
                );
            }
            tracing::debug!(entries = table.len(), "token registry table built");
            table
        })
    }

    fn synthetic_descriptor(&self, denom: &str) -> TokenDescriptor {
        let digest =
            derive_module_account(&self.module_name, &[DerivationKey::ibc_alias(denom)]);
        let address = encode_bech32(&self.hrp, &digest)
            .unwrap_or_else(|e| panic!("derived address encoding failed: {e}"));

        TokenDescriptor {
            symbol: denom.to_string(),
            denom: denom.to_string(),
            decimals: EXTERNAL_ASSET_DECIMALS,
            address,
            label: "Unknown IBC asset".to_string(),
        }
    }
}
