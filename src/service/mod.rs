//! Service 模块
//!
//! 面向调用方的核心服务：注册表、规则校验、格式转换

pub mod address_converter;
pub mod list_identifier;
pub mod rule_validator;
pub mod token_registry;

// 重新导出常用类型
pub use address_converter::{AddressFormat, FormatConverter};
pub use list_identifier::{parse_list_identifier, ListIdentifier, MINT_KEYWORD};
pub use rule_validator::{RuleValidator, Severity, ValidationIssue, ValidationReport};
pub use token_registry::{TokenDescriptor, TokenRegistry};
