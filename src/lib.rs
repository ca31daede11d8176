//! TokenCore - 代币化模块账户派生与交易文档校验核心
//!
//! 纯同步库：哈希链地址派生、Bech32/hex 编解码、代币注册表、
//! 交易文档规则校验与地址格式转换。账本查询/广播与工具分发层
//! 是外部协作方，不在本库范围内。

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use error::CoreError;

// 统一模块导出
pub mod prelude {
    pub use crate::{
        config::CoreConfig,
        domain::{derive_module_account, AccountAddress, DerivationKey},
        error::CoreError,
        service::{
            AddressFormat, FormatConverter, RuleValidator, Severity, TokenDescriptor,
            TokenRegistry, ValidationIssue, ValidationReport,
        },
    };
}
