use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 选择列表默认时间格式
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// strftime 格式是否能被 chrono 完整解析
pub fn is_valid_time_format(time_format: &str) -> bool {
    !StrftimeItems::new(time_format).any(|item| matches!(item, Item::Error))
}

/// 异常日志记录
///
/// 创建后不可变，整个进程生命周期内集合固定。
#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    /// 服务标识（非空）
    #[validate(length(min = 1, message = "service must not be empty"))]
    pub service: String,
    /// 单行摘要，通常形如 "<Exception> at <File>:<line>"
    pub exception: String,
    /// 多行堆栈
    pub stack_trace: String,
}

impl LogRecord {
    pub fn new(
        timestamp: DateTime<Local>,
        service: impl Into<String>,
        exception: impl Into<String>,
        stack_trace: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            service: service.into(),
            exception: exception.into(),
            stack_trace: stack_trace.into(),
        }
    }

    /// 选择列表中的展示文本："<time> | <service> | <exception>"
    ///
    /// 无法解析的时间格式退回 `DEFAULT_TIME_FORMAT`。
    pub fn display_label(&self, time_format: &str) -> String {
        let time_format = if is_valid_time_format(time_format) {
            time_format
        } else {
            tracing::warn!(time_format, "invalid time format, using default");
            DEFAULT_TIME_FORMAT
        };
        format!(
            "{} | {} | {}",
            self.timestamp.format(time_format),
            self.service,
            self.exception
        )
    }
}

/// 选择列表条目
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LogOption {
    pub display_label: String,
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(service: &str) -> LogRecord {
        LogRecord::new(
            Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap(),
            service,
            "NullPointerException at PaymentProcessor.java:45",
            "java.lang.NullPointerException",
        )
    }

    #[test]
    fn test_display_label_format() {
        let log = record("payment-service");
        assert_eq!(
            log.display_label("%H:%M:%S"),
            "09:05:07 | payment-service | NullPointerException at PaymentProcessor.java:45"
        );
    }

    #[test]
    fn test_invalid_time_format_falls_back() {
        let log = record("payment-service");
        assert!(!is_valid_time_format("%Q"));
        assert!(is_valid_time_format("%Y-%m-%d %H:%M"));
        assert_eq!(
            log.display_label("%Q"),
            log.display_label(DEFAULT_TIME_FORMAT)
        );
    }

    #[test]
    fn test_empty_service_is_rejected() {
        assert!(record("payment-service").validate().is_ok());
        assert!(record("").validate().is_err());
    }

    #[test]
    fn test_json_roundtrip_keeps_fields() {
        let log = record("auth-service");
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"service\":\"auth-service\""));
        let parsed: LogRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log);
    }
}
