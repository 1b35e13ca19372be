use serde::{Deserialize, Serialize};

use super::log_record::LogRecord;
use crate::services::snippet_store::SnippetKey;

/// 诊断结果
///
/// 每次查询重新生成，不缓存。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosisResult {
    pub root_cause: String,
    pub suggested_fix: String,
    #[serde(default)]
    pub related_commit: Option<String>,
}

impl DiagnosisResult {
    pub fn new(
        root_cause: impl Into<String>,
        suggested_fix: impl Into<String>,
        related_commit: Option<&str>,
    ) -> Self {
        Self {
            root_cause: root_cause.into(),
            suggested_fix: suggested_fix.into(),
            related_commit: related_commit.map(str::to_string),
        }
    }
}

/// 解析结果：日志 + 代码片段（可缺失）+ 诊断
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResolutionResult {
    pub log: LogRecord,
    /// 从异常摘要中提取出的定位符（如果有）
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub locator: Option<SnippetKey>,
    pub snippet: Option<String>,
    pub diagnosis: DiagnosisResult,
}
