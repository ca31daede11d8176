//! 交易文档规则校验
//!
//! 对组装完成的 JSON 交易文档做一遍深度优先遍历，按固定不变式集合
//! 收集问题。校验器从不修改输入、从不抛出领域错误：除顶层 JSON 解析
//! 失败外，所有发现都作为 `ValidationIssue` 数据返回，整体结果的
//! `valid` 定义为"不存在 error 级问题"。
//!
//! 范围对象只做形状检查（start/end 同时存在且为字符串），不比较
//! start ≤ end 的数值顺序；收紧会拒绝历史上可接受的文档。

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::address::{decode_bech32, BECH32_HRP, MODULE_ADDRESS_LEN};
use crate::service::list_identifier::{parse_list_identifier, MINT_KEYWORD};
use crate::utils::JsonPath;

/// 创建集合消息类型
pub const MSG_CREATE_COLLECTION: &str = "/tokenization.MsgCreateCollection";

/// 转账消息类型
pub const MSG_TRANSFER_TOKENS: &str = "/tokenization.MsgTransferTokens";

/// 订阅标准标签
pub const SUBSCRIPTION_STANDARD: &str = "subscriptions";

/// 审批对象上的列表标识符字段
const LIST_ID_FIELDS: &[&str] = &["fromListId", "toListId", "initiatedByListId"];

/// 订单计算选择器的五个互斥布尔开关
const ORDER_CALCULATION_FLAGS: &[&str] = &[
    "useOverallNumTransfers",
    "usePerToAddressNumTransfers",
    "usePerFromAddressNumTransfers",
    "usePerInitiatedByAddressNumTransfers",
    "useMerkleChallengeLeafIndex",
];

/// 按代币范围限定的权限键（条目可声明 tokenIds）
const TOKEN_SCOPED_PERMISSION_KEYS: &[&str] = &[
    "canUpdateTokenMetadata",
    "canUpdateValidTokenIds",
    "canUpdateCollectionApprovals",
];

/// 其余两种权限形状（时间线更新 / 一次性动作）
const TIMED_PERMISSION_KEYS: &[&str] = &["canUpdateCollectionMetadata", "canUpdateStandards"];
const ACTION_PERMISSION_KEYS: &[&str] = &["canDeleteCollection", "canArchiveCollection"];

/// 冻结时间数组字段
const FROZEN_TIME_FIELDS: &[&str] = &["permanentlyPermittedTimes", "permanentlyForbiddenTimes"];

/// 问题严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// 单条校验问题
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// 整体校验结果
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let valid = !issues.iter().any(|i| i.severity == Severity::Error);
        Self { valid, issues }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }
}

/// 规则校验器
pub struct RuleValidator {
    hrp: String,
}

impl Default for RuleValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator {
    pub fn new() -> Self {
        Self::with_hrp(BECH32_HRP)
    }

    pub fn with_hrp(hrp: impl Into<String>) -> Self {
        Self { hrp: hrp.into() }
    }

    /// 校验文本形式的文档
    ///
    /// 解析失败短路为单条 error 问题，不做任何后续检查。
    pub fn validate_str(&self, text: &str) -> ValidationReport {
        match serde_json::from_str::<Value>(text) {
            Ok(doc) => self.validate(&doc),
            Err(e) => ValidationReport::from_issues(vec![ValidationIssue {
                severity: Severity::Error,
                message: format!("document is not valid JSON: {e}"),
                path: None,
            }]),
        }
    }

    /// 校验已解析的文档
    pub fn validate(&self, doc: &Value) -> ValidationReport {
        let mut issues = Vec::new();

        self.walk(doc, &JsonPath::root(), &mut issues);

        if let Some(Value::Array(messages)) = doc.get("messages") {
            for (i, message) in messages.iter().enumerate() {
                let path = JsonPath::root().key("messages").index(i);
                self.check_message(message, &path, &mut issues);
            }
        }

        let report = ValidationReport::from_issues(issues);
        tracing::debug!(
            valid = report.valid,
            issues = report.issues.len(),
            "document validated"
        );
        report
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 结构遍历
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    fn walk(&self, value: &Value, path: &JsonPath, issues: &mut Vec<ValidationIssue>) {
        match value {
            Value::Null | Value::Bool(_) | Value::String(_) => {}
            // 数量必须以字符串编码，裸数字字面量一律报错
            Value::Number(_) => issues.push(error(
                path,
                "numeric literal; all quantities must be string-encoded",
            )),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.walk(item, &path.index(i), issues);
                }
            }
            Value::Object(map) => {
                self.check_object(map, path, issues);
                for (key, child) in map {
                    self.walk(child, &path.key(key), issues);
                }
            }
        }
    }

    fn check_object(
        &self,
        map: &Map<String, Value>,
        path: &JsonPath,
        issues: &mut Vec<ValidationIssue>,
    ) {
        self.check_range_shape(map, path, issues);
        self.check_list_id_fields(map, path, issues);

        if is_approval_object(map) {
            self.check_approval(map, path, issues);
        }

        if let Some(Value::Array(entries)) = map.get("tokenMetadata") {
            self.check_token_metadata(entries, &path.key("tokenMetadata"), issues);
        }

        self.check_permissions(map, path, issues);
    }

    /// 带 start/end 的对象必须两个键齐全且都是字符串
    fn check_range_shape(
        &self,
        map: &Map<String, Value>,
        path: &JsonPath,
        issues: &mut Vec<ValidationIssue>,
    ) {
        if !map.contains_key("start") && !map.contains_key("end") {
            return;
        }

        for key in ["start", "end"] {
            match map.get(key) {
                None => issues.push(error(
                    path,
                    &format!("range object is missing '{key}'; both bounds are required"),
                )),
                Some(Value::String(_)) => {}
                // null 按缺省策略跳过，不单独标记
                Some(Value::Null) => {}
                Some(_) => issues.push(error(
                    &path.key(key),
                    &format!("range bound '{key}' must be a decimal string"),
                )),
            }
        }
    }

    /// 列表标识符字段必须符合封闭语法
    fn check_list_id_fields(
        &self,
        map: &Map<String, Value>,
        path: &JsonPath,
        issues: &mut Vec<ValidationIssue>,
    ) {
        for field in LIST_ID_FIELDS {
            match map.get(*field) {
                None | Some(Value::Null) => {}
                Some(Value::String(text)) => {
                    if let Err(e) = parse_list_identifier(text, &self.hrp) {
                        issues.push(error(&path.key(field), &e.to_string()));
                    }
                }
                Some(_) => issues.push(error(
                    &path.key(field),
                    &format!("'{field}' must be a string list identifier"),
                )),
            }
        }
    }

    /// 审批对象的跨字段规则
    fn check_approval(
        &self,
        map: &Map<String, Value>,
        path: &JsonPath,
        issues: &mut Vec<ValidationIssue>,
    ) {
        // 审批必须声明非空标识符
        match map.get("approvalId") {
            Some(Value::String(id)) if !id.is_empty() => {}
            _ => issues.push(error(
                path,
                "approval must declare a non-empty 'approvalId'",
            )),
        }

        let from_list_id = match map.get("fromListId") {
            Some(Value::String(text)) => text.as_str(),
            _ => return,
        };
        let criteria = map.get("approvalCriteria").and_then(Value::as_object);

        // 来源为铸造关键字时必须覆盖发送方审批
        if from_list_id == MINT_KEYWORD {
            let overridden = criteria
                .and_then(|c| c.get("overridesFromOutgoingApprovals"))
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if !overridden {
                issues.push(error(
                    &path.key("approvalCriteria").key("overridesFromOutgoingApprovals"),
                    "approval from 'Mint' must set 'overridesFromOutgoingApprovals' to true",
                ));
            }
            return;
        }

        // 托管地址来源 + 同时开启覆盖与背书铸造，属不建议组合
        if self.is_backing_address(from_list_id) {
            if let Some(criteria) = criteria {
                let overrides = criteria
                    .get("overridesFromOutgoingApprovals")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                let backed_minting = criteria
                    .get("backedMinting")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                if overrides && backed_minting {
                    issues.push(warning(
                        &path.key("approvalCriteria"),
                        "combining 'overridesFromOutgoingApprovals' with 'backedMinting' on a backing address is discouraged",
                    ));
                }
            }
        }
    }

    /// 代币元数据条目必须声明非空 tokenIds 范围数组
    fn check_token_metadata(
        &self,
        entries: &[Value],
        path: &JsonPath,
        issues: &mut Vec<ValidationIssue>,
    ) {
        for (i, entry) in entries.iter().enumerate() {
            let Some(entry) = entry.as_object() else {
                continue;
            };
            let has_ids = matches!(entry.get("tokenIds"), Some(Value::Array(ids)) if !ids.is_empty());
            if !has_ids {
                issues.push(error(
                    &path.index(i),
                    "token metadata entry must declare a non-empty 'tokenIds' array",
                ));
            }
        }
    }

    /// 权限条目的冻结时间规则
    fn check_permissions(
        &self,
        map: &Map<String, Value>,
        path: &JsonPath,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let all_permission_keys = TOKEN_SCOPED_PERMISSION_KEYS
            .iter()
            .chain(TIMED_PERMISSION_KEYS)
            .chain(ACTION_PERMISSION_KEYS);

        for key in all_permission_keys {
            let Some(Value::Array(entries)) = map.get(*key) else {
                continue;
            };
            let token_scoped = TOKEN_SCOPED_PERMISSION_KEYS.contains(key);

            for (i, entry) in entries.iter().enumerate() {
                let Some(entry) = entry.as_object() else {
                    continue;
                };
                let entry_path = path.key(key).index(i);

                let any_frozen = FROZEN_TIME_FIELDS.iter().any(|f| {
                    matches!(entry.get(*f), Some(Value::Array(times)) if !times.is_empty())
                });

                // 两个冻结时间数组都为空的条目是冗余的
                if !any_frozen {
                    issues.push(warning(
                        &entry_path,
                        "permission entry freezes no times; represent it as an empty collection instead",
                    ));
                    continue;
                }

                // 按代币范围限定的权限必须声明作用范围
                if token_scoped {
                    let has_ids = matches!(
                        entry.get("tokenIds"),
                        Some(Value::Array(ids)) if !ids.is_empty()
                    );
                    if !has_ids {
                        issues.push(error(
                            &entry_path,
                            "token-scoped permission with frozen times must declare 'tokenIds'",
                        ));
                    }
                }
            }
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 消息级检查
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    fn check_message(&self, message: &Value, path: &JsonPath, issues: &mut Vec<ValidationIssue>) {
        let Some(message) = message.as_object() else {
            issues.push(error(path, "message must be an object"));
            return;
        };

        let type_url = match message.get("typeUrl") {
            Some(Value::String(url)) if !url.is_empty() => url.as_str(),
            _ => {
                issues.push(error(
                    &path.key("typeUrl"),
                    "message is missing its 'typeUrl'",
                ));
                return;
            }
        };

        let value_path = path.key("value");
        let Some(value) = message.get("value").and_then(Value::as_object) else {
            issues.push(error(&value_path, "message is missing its 'value' object"));
            return;
        };

        match type_url {
            MSG_CREATE_COLLECTION => {
                self.check_creator(value, &value_path, issues);
                if has_subscription_standard(value) {
                    self.check_subscription_collection(value, &value_path, issues);
                }
            }
            MSG_TRANSFER_TOKENS => {
                self.check_creator(value, &value_path, issues);
                self.check_required_string(value, "collectionId", &value_path, issues);

                match value.get("transfers") {
                    Some(Value::Array(transfers)) if !transfers.is_empty() => {}
                    _ => issues.push(error(
                        &value_path.key("transfers"),
                        "transfer message requires a non-empty 'transfers' array",
                    )),
                }
            }
            // 其余消息类型不在本核心的校验范围内
            other => tracing::debug!(type_url = other, "skipping unsupported message type"),
        }
    }

    /// creator 必填，前缀约定不符降级为 warning
    fn check_creator(
        &self,
        value: &Map<String, Value>,
        path: &JsonPath,
        issues: &mut Vec<ValidationIssue>,
    ) {
        match value.get("creator") {
            Some(Value::String(creator)) if !creator.is_empty() => {
                let expected = format!("{}1", self.hrp);
                if !creator.starts_with(&expected) {
                    issues.push(warning(
                        &path.key("creator"),
                        &format!("creator does not carry the '{expected}' address prefix"),
                    ));
                }
            }
            _ => issues.push(error(
                &path.key("creator"),
                "message requires a non-empty 'creator' address",
            )),
        }
    }

    fn check_required_string(
        &self,
        value: &Map<String, Value>,
        field: &str,
        path: &JsonPath,
        issues: &mut Vec<ValidationIssue>,
    ) {
        match value.get(field) {
            Some(Value::String(s)) if !s.is_empty() => {}
            _ => issues.push(error(
                &path.key(field),
                &format!("message requires a non-empty '{field}'"),
            )),
        }
    }

    /// 订阅标准集合的子规则
    fn check_subscription_collection(
        &self,
        value: &Map<String, Value>,
        path: &JsonPath,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let Some(Value::Array(approvals)) = value.get("collectionApprovals") else {
            return;
        };

        for (i, approval) in approvals.iter().enumerate() {
            let Some(approval) = approval.as_object() else {
                continue;
            };
            let approval_path = path.key("collectionApprovals").index(i);
            self.check_subscription_approval(approval, &approval_path, issues);
        }
    }

    fn check_subscription_approval(
        &self,
        approval: &Map<String, Value>,
        path: &JsonPath,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let criteria = approval.get("approvalCriteria").and_then(Value::as_object);

        // 订单计算选择器的五个开关必须恰好一个为 true
        if let Some(pred) = criteria
            .and_then(|c| c.get("predeterminedBalances"))
            .and_then(Value::as_object)
        {
            let selector_path = path
                .key("approvalCriteria")
                .key("predeterminedBalances")
                .key("orderCalculationMethod");
            let selector = pred.get("orderCalculationMethod").and_then(Value::as_object);
            let enabled = ORDER_CALCULATION_FLAGS
                .iter()
                .filter(|flag| {
                    selector
                        .and_then(|s| s.get(**flag))
                        .and_then(Value::as_bool)
                        .unwrap_or(false)
                })
                .count();

            match enabled {
                0 => issues.push(warning(
                    &selector_path,
                    "no order calculation flag is enabled; exactly one is expected",
                )),
                1 => {}
                n => issues.push(error(
                    &selector_path,
                    &format!("{n} order calculation flags are enabled; they are mutually exclusive"),
                )),
            }

            // 循环余额声明
            if let Some(incremented) = pred.get("incrementedBalances").and_then(Value::as_object) {
                let inc_path = path
                    .key("approvalCriteria")
                    .key("predeterminedBalances")
                    .key("incrementedBalances");

                if let Some(interval) = incremented
                    .get("recurringOwnershipTimes")
                    .and_then(Value::as_object)
                    .and_then(|r| r.get("intervalLength"))
                {
                    let is_zero = matches!(
                        interval,
                        Value::String(s) if s.is_empty() || s == "0"
                    );
                    if is_zero {
                        issues.push(warning(
                            &inc_path.key("recurringOwnershipTimes").key("intervalLength"),
                            "recurring interval length must be non-zero",
                        ));
                    }
                }

                let allow_override = incremented
                    .get("allowOverrideTimestamp")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                if !allow_override {
                    issues.push(warning(
                        &inc_path.key("allowOverrideTimestamp"),
                        "subscription approvals should allow timestamp overrides",
                    ));
                }
            }
        }

        // 支付转账的覆盖开关都应保持关闭
        if let Some(Value::Array(coin_transfers)) =
            criteria.and_then(|c| c.get("coinTransfers"))
        {
            for (i, transfer) in coin_transfers.iter().enumerate() {
                let Some(transfer) = transfer.as_object() else {
                    continue;
                };
                for flag in ["overrideFromWithApproverAddress", "overrideToWithInitiator"] {
                    let set = transfer.get(flag).and_then(Value::as_bool).unwrap_or(false);
                    if set {
                        issues.push(warning(
                            &path.key("approvalCriteria").key("coinTransfers").index(i).key(flag),
                            &format!("'{flag}' should be false for subscription payments"),
                        ));
                    }
                }
            }
        }

        // 有效范围必须是单个 [1,1] 区间
        let single_unit_interval = matches!(
            approval.get("tokenIds"),
            Some(Value::Array(ids)) if ids.len() == 1
                && ids[0].get("start").and_then(Value::as_str) == Some("1")
                && ids[0].get("end").and_then(Value::as_str) == Some("1")
        );
        if !single_unit_interval {
            issues.push(warning(
                &path.key("tokenIds"),
                "subscription approval should declare the single [1,1] interval",
            ));
        }
    }

    /// fromListId 直接地址是否为托管（模块派生）地址：
    /// 本链前缀且负载为 32 字节摘要
    fn is_backing_address(&self, text: &str) -> bool {
        matches!(
            decode_bech32(text),
            Ok((hrp, bytes)) if hrp == self.hrp && bytes.len() == MODULE_ADDRESS_LEN
        )
    }
}

/// 审批对象：携带任一列表标识符字段的对象
fn is_approval_object(map: &Map<String, Value>) -> bool {
    LIST_ID_FIELDS.iter().any(|f| map.contains_key(*f))
}

fn has_subscription_standard(value: &Map<String, Value>) -> bool {
    matches!(
        value.get("standards"),
        Some(Value::Array(standards))
            if standards
                .iter()
                .any(|s| s.as_str() == Some(SUBSCRIPTION_STANDARD))
    )
}

fn error(path: &JsonPath, message: &str) -> ValidationIssue {
    ValidationIssue {
        severity: Severity::Error,
        message: message.to_string(),
        path: if path.is_root() {
            None
        } else {
            Some(path.to_string())
        },
    }
}

fn warning(path: &JsonPath, message: &str) -> ValidationIssue {
    ValidationIssue {
        severity: Severity::Warning,
        message: message.to_string(),
        path: if path.is_root() {
            None
        } else {
            Some(path.to_string())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> RuleValidator {
        RuleValidator::new()
    }

    #[test]
    fn test_parse_failure_short_circuits() {
        let report = validator().validate_str("{not json");
        assert!(!report.valid);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::Error);
        assert!(report.issues[0].path.is_none());
    }

    #[test]
    fn test_numeric_literal_is_flagged_with_path() {
        let report =
            validator().validate_str(r#"{"messages":[{"typeUrl":"T","value":{"amount":5}}]}"#);
        assert!(!report.valid);
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].path.as_deref(),
            Some("messages[0].value.amount")
        );
    }

    #[test]
    fn test_range_shape_rules() {
        let doc = json!({
            "a": {"start": "1"},
            "b": {"start": "1", "end": true},
            "c": {"start": "1", "end": "2"}
        });
        let report = validator().validate(&doc);
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.path.as_deref() == Some("a")));
        assert!(errors.iter().any(|e| e.path.as_deref() == Some("b.end")));
    }

    #[test]
    fn test_null_values_are_skipped() {
        let doc = json!({"x": null, "range": {"start": null, "end": null}});
        let report = validator().validate(&doc);
        assert!(report.valid);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_bad_list_identifier_is_one_error() {
        let doc = json!({
            "approvals": [{
                "approvalId": "a1",
                "fromListId": "notAReservedOrAddress",
                "toListId": "All",
                "initiatedByListId": "All"
            }]
        });
        let report = validator().validate(&doc);
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].path.as_deref(),
            Some("approvals[0].fromListId")
        );
    }

    #[test]
    fn test_mint_approval_requires_override_flag() {
        let doc = json!({
            "approvals": [{
                "approvalId": "mint",
                "fromListId": "Mint",
                "toListId": "All",
                "initiatedByListId": "All",
                "approvalCriteria": {}
            }]
        });
        let report = validator().validate(&doc);
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("overridesFromOutgoingApprovals"));
    }

    #[test]
    fn test_missing_approval_id() {
        let doc = json!({
            "approvals": [{"fromListId": "All", "toListId": "All", "initiatedByListId": "All"}]
        });
        let report = validator().validate(&doc);
        assert_eq!(report.errors().count(), 1);
        assert!(report.issues[0].message.contains("approvalId"));
    }

    #[test]
    fn test_backing_address_discouraged_combination() {
        // 32 字节负载 = 托管地址
        let backing =
            crate::domain::address::encode_bech32(BECH32_HRP, &[7u8; 32]).unwrap();
        let doc = json!({
            "approvals": [{
                "approvalId": "wrap",
                "fromListId": backing,
                "toListId": "All",
                "initiatedByListId": "All",
                "approvalCriteria": {
                    "overridesFromOutgoingApprovals": true,
                    "backedMinting": true
                }
            }]
        });
        let report = validator().validate(&doc);
        assert!(report.valid);
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_token_metadata_requires_ids() {
        let doc = json!({
            "tokenMetadata": [
                {"uri": "ipfs://x", "tokenIds": [{"start": "1", "end": "10"}]},
                {"uri": "ipfs://y", "tokenIds": []},
                {"uri": "ipfs://z"}
            ]
        });
        let report = validator().validate(&doc);
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.path.as_deref() == Some("tokenMetadata[1]")));
        assert!(errors.iter().any(|e| e.path.as_deref() == Some("tokenMetadata[2]")));
    }

    #[test]
    fn test_permission_frozen_time_rules() {
        let doc = json!({
            "collectionPermissions": {
                "canUpdateTokenMetadata": [
                    {"permanentlyPermittedTimes": [{"start": "1", "end": "2"}],
                     "permanentlyForbiddenTimes": []},
                    {"permanentlyPermittedTimes": [], "permanentlyForbiddenTimes": []}
                ],
                "canDeleteCollection": [
                    {"permanentlyPermittedTimes": [], "permanentlyForbiddenTimes": []}
                ]
            }
        });
        let report = validator().validate(&doc);
        // 有冻结时间但缺 tokenIds
        assert_eq!(report.errors().count(), 1);
        // 两个全空条目（token-scoped 与 action 各一）
        assert_eq!(report.warnings().count(), 2);
    }

    #[test]
    fn test_message_dispatch_required_fields() {
        let doc = json!({
            "messages": [{
                "typeUrl": MSG_TRANSFER_TOKENS,
                "value": {"creator": "tkn1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn2lvk5r"}
            }]
        });
        let report = validator().validate(&doc);
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.path.as_deref() == Some("messages[0].value.collectionId")));
        assert!(errors.iter().any(|e| e.path.as_deref() == Some("messages[0].value.transfers")));
    }

    #[test]
    fn test_creator_prefix_convention_is_warning() {
        let doc = json!({
            "messages": [{
                "typeUrl": MSG_CREATE_COLLECTION,
                "value": {"creator": "cosmos1abcdef"}
            }]
        });
        let report = validator().validate(&doc);
        assert!(report.valid);
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_missing_type_url_is_error() {
        let doc = json!({"messages": [{"value": {}}]});
        let report = validator().validate(&doc);
        assert_eq!(report.errors().count(), 1);
        assert_eq!(
            report.issues[0].path.as_deref(),
            Some("messages[0].typeUrl")
        );
    }

    #[test]
    fn test_unknown_message_type_is_skipped() {
        let doc = json!({
            "messages": [{"typeUrl": "/tokenization.MsgSomethingElse", "value": {}}]
        });
        let report = validator().validate(&doc);
        assert!(report.valid);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_subscription_order_flags() {
        let approval = |flags: serde_json::Value| {
            json!({
                "messages": [{
                    "typeUrl": MSG_CREATE_COLLECTION,
                    "value": {
                        "creator": "tkn1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn2lvk5r",
                        "standards": ["subscriptions"],
                        "collectionApprovals": [{
                            "approvalId": "sub",
                            "fromListId": "Mint",
                            "toListId": "All",
                            "initiatedByListId": "All",
                            "tokenIds": [{"start": "1", "end": "1"}],
                            "approvalCriteria": {
                                "overridesFromOutgoingApprovals": true,
                                "predeterminedBalances": {
                                    "orderCalculationMethod": flags,
                                    "incrementedBalances": {
                                        "allowOverrideTimestamp": true,
                                        "recurringOwnershipTimes": {"intervalLength": "2592000"}
                                    }
                                }
                            }
                        }]
                    }
                }]
            })
        };

        // 两个开关同时为 true → error
        let doc = approval(json!({
            "useOverallNumTransfers": true,
            "usePerToAddressNumTransfers": true
        }));
        let report = validator().validate(&doc);
        assert!(!report.valid);
        assert!(report
            .errors()
            .any(|e| e.message.contains("mutually exclusive")));

        // 零个开关 → warning 而非 error
        let doc = approval(json!({}));
        let report = validator().validate(&doc);
        assert!(report.valid);
        assert!(report
            .warnings()
            .any(|w| w.message.contains("no order calculation flag")));

        // 恰好一个 → 无选择器相关问题
        let doc = approval(json!({"useOverallNumTransfers": true}));
        let report = validator().validate(&doc);
        assert!(report.valid);
        assert!(!report.issues.iter().any(|i| i.message.contains("order calculation")));
    }

    #[test]
    fn test_subscription_payment_and_interval_warnings() {
        let doc = json!({
            "messages": [{
                "typeUrl": MSG_CREATE_COLLECTION,
                "value": {
                    "creator": "tkn1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn2lvk5r",
                    "standards": ["subscriptions"],
                    "collectionApprovals": [{
                        "approvalId": "sub",
                        "fromListId": "Mint",
                        "toListId": "All",
                        "initiatedByListId": "All",
                        "tokenIds": [{"start": "1", "end": "2"}],
                        "approvalCriteria": {
                            "overridesFromOutgoingApprovals": true,
                            "coinTransfers": [{
                                "overrideFromWithApproverAddress": true,
                                "overrideToWithInitiator": false
                            }],
                            "predeterminedBalances": {
                                "orderCalculationMethod": {"useOverallNumTransfers": true},
                                "incrementedBalances": {
                                    "allowOverrideTimestamp": false,
                                    "recurringOwnershipTimes": {"intervalLength": "0"}
                                }
                            }
                        }
                    }]
                }
            }]
        });
        let report = validator().validate(&doc);
        assert!(report.valid);
        let warnings: Vec<_> = report.warnings().map(|w| w.message.as_str()).collect();
        assert!(warnings.iter().any(|m| m.contains("overrideFromWithApproverAddress")));
        assert!(warnings.iter().any(|m| m.contains("non-zero")));
        assert!(warnings.iter().any(|m| m.contains("timestamp")));
        assert!(warnings.iter().any(|m| m.contains("[1,1]")));
    }

    #[test]
    fn test_minimal_valid_skeleton() {
        let doc = json!({
            "messages": [{
                "typeUrl": MSG_CREATE_COLLECTION,
                "value": {
                    "creator": "tkn1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn2lvk5r",
                    "collectionApprovals": [{
                        "approvalId": "mint-approval",
                        "fromListId": "Mint",
                        "toListId": "All",
                        "initiatedByListId": "All",
                        "approvalCriteria": {"overridesFromOutgoingApprovals": true}
                    }],
                    "tokenMetadata": [{
                        "uri": "ipfs://metadata",
                        "tokenIds": [{"start": "1", "end": "100"}]
                    }]
                }
            }]
        });
        let report = validator().validate(&doc);
        assert!(report.valid);
        assert_eq!(report.errors().count(), 0);
    }
}
