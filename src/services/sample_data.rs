//! 示例数据集
//!
//! 内置两条模拟异常日志及对应代码片段；也可以从 JSON 文件加载替代数据集。

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::LogRecord;

const PAYMENT_PROCESSOR_SNIPPET: &str = r#"
public void process(Payment payment) {
    if (payment.getAccount() == null) {
        throw new NullPointerException();
    }
    // process payment
}
"#;

const USER_REPOSITORY_SNIPPET: &str = r#"
public User findById(String id) {
    String query = "SELECT * FROM users WHERE id = ?";
    PreparedStatement stmt = connection.prepareStatement(query);
    stmt.setString(1, id);
    ResultSet rs = stmt.executeQuery();
    return mapToUser(rs);
}
"#;

/// 数据集：日志 + 代码片段
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dataset {
    pub logs: Vec<LogRecord>,
    #[serde(default)]
    pub snippets: BTreeMap<String, String>,
}

impl Dataset {
    /// 内置示例数据，时间戳相对 `now` 计算
    pub fn sample(now: DateTime<Local>) -> Self {
        Self {
            logs: sample_logs(now),
            snippets: sample_snippets(),
        }
    }

    /// 从 JSON 文件加载并验证数据集
    ///
    /// # Errors
    /// 文件不可读、JSON 格式错误或记录验证失败时返回错误
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::io_error(
                format!("Failed to read dataset {}: {}", path.display(), e),
                Some(path.to_path_buf()),
            )
        })?;

        let dataset: Self = serde_json::from_str(&content)?;
        dataset.validate()?;

        tracing::info!(
            logs = dataset.logs.len(),
            snippets = dataset.snippets.len(),
            "Loaded dataset from: {}",
            path.display()
        );
        Ok(dataset)
    }

    /// 每条日志的 service 必须非空
    pub fn validate(&self) -> Result<()> {
        for (idx, log) in self.logs.iter().enumerate() {
            log.validate()
                .map_err(|e| AppError::from(e).with_context(format!("logs[{}]", idx)))?;
        }
        Ok(())
    }
}

pub fn sample_logs(now: DateTime<Local>) -> Vec<LogRecord> {
    vec![
        LogRecord::new(
            now - Duration::minutes(5),
            "payment-service",
            "NullPointerException at PaymentProcessor.java:45",
            "java.lang.NullPointerException
    at com.fintech.payments.PaymentProcessor.process(PaymentProcessor.java:45)
    at com.fintech.api.PaymentAPI.handle(PaymentAPI.java:88)",
        ),
        LogRecord::new(
            now - Duration::minutes(12),
            "auth-service",
            "SQLTimeoutException at UserRepository.java:102",
            "java.sql.SQLTimeoutException: Query timed out
    at com.fintech.db.UserRepository.findById(UserRepository.java:102)
    at com.fintech.api.AuthAPI.login(AuthAPI.java:54)",
        ),
    ]
}

pub fn sample_snippets() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "PaymentProcessor.java:45".to_string(),
            PAYMENT_PROCESSOR_SNIPPET.to_string(),
        ),
        (
            "UserRepository.java:102".to_string(),
            USER_REPOSITORY_SNIPPET.to_string(),
        ),
    ])
}
