//! 配置相关数据结构
//!
//! 分层加载：内置默认值 → 配置文件（TOML/JSON）→ `RCA_` 前缀环境变量。

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

use crate::error::Result;
use crate::models::log_record::{is_valid_time_format, DEFAULT_TIME_FORMAT};

/// 环境变量前缀，例如 `RCA_LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "RCA";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 应用配置
#[derive(Serialize, Deserialize, Validate, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub logging: LoggingConfig,
    #[validate(nested)]
    pub display: DisplayConfig,
    pub data: DataConfig,
}

/// 日志配置
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// 未设置 RUST_LOG 时使用的级别
    #[validate(custom(function = "validate_log_level"))]
    pub level: String,
    /// 使用 JSON 格式输出日志
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// 展示配置
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// 选择列表中时间戳的格式（chrono strftime）
    #[validate(length(min = 1, message = "time_format must not be empty"))]
    #[validate(custom(function = "validate_time_format"))]
    pub time_format: String,
    /// 代码片段的语法高亮语言
    #[validate(length(min = 1, message = "snippet_language must not be empty"))]
    pub snippet_language: String,
    /// 完整堆栈面板默认是否展开
    pub show_stack_trace: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            snippet_language: "java".to_string(),
            show_stack_trace: false,
        }
    }
}

/// 数据源配置
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// JSON 数据集路径；为空时使用内置示例数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<PathBuf>,
}

fn validate_log_level(level: &str) -> std::result::Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

fn validate_time_format(time_format: &str) -> std::result::Result<(), ValidationError> {
    if is_valid_time_format(time_format) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_time_format"))
    }
}

impl AppConfig {
    /// 加载配置
    ///
    /// # Arguments
    /// * `path` - 可选的配置文件路径，格式由扩展名推断
    ///
    /// # Errors
    /// 文件不存在、格式错误或验证失败时返回错误
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    /// 同 `load`，但使用指定的环境变量前缀
    pub fn load_with_env_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        match path {
            Some(path) => tracing::info!("Loaded configuration from: {}", path.display()),
            None => tracing::debug!("Using default configuration"),
        }
        Ok(config)
    }

    /// 以 TOML 格式输出当前生效配置
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
