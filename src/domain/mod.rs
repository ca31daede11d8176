//! Domain 模块
//!
//! 核心派生算法与地址编解码

pub mod address;
pub mod derivation;

// 重新导出常用类型
pub use address::{AccountAddress, BECH32_HRP};
pub use derivation::{derive_module_account, DerivationKey, MODULE_NAME};
