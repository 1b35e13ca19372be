use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/**
 * 应用错误类型 - 使用 miette 提供用户友好的错误诊断
 *
 * 只有非法的日志索引是核心流程的真正失败；
 * 代码片段缺失、未识别的堆栈都用 Option / 兜底诊断表示，不走错误通道。
 */
#[derive(Error, Debug, Diagnostic)]
pub enum AppError {
    #[error("Log index {index} is out of range (available logs: {count})")]
    #[diagnostic(
        code(app::index_out_of_range),
        help("Run `rca-dashboard list` to see the valid indices")
    )]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(app::config_error),
        help("Check the config file and RCA_* environment variables")
    )]
    Config(String),

    #[error("Validation error: {0}")]
    #[diagnostic(
        code(app::validation_error),
        help("Check that your input meets the required format and constraints")
    )]
    Validation(String),

    #[error("Pattern error: {0}")]
    #[diagnostic(code(app::pattern_error))]
    Pattern(String),

    #[error("IO error: {message}")]
    #[diagnostic(code(app::io_error))]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Serialization error: {0}")]
    #[diagnostic(code(app::serialization_error))]
    Serialization(String),
}

impl AppError {
    /**
     * 创建索引越界错误
     */
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        AppError::IndexOutOfRange { index, count }
    }

    /**
     * 创建验证错误
     */
    pub fn validation_error(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /**
     * 创建详细的IO错误
     */
    pub fn io_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        AppError::Io {
            message: message.into(),
            path,
        }
    }

    /**
     * 为错误添加上下文信息
     */
    pub fn with_context(self, context: impl Into<String>) -> Self {
        let context = context.into();
        match self {
            AppError::Config(message) => AppError::Config(format!("{}: {}", context, message)),
            AppError::Validation(message) => {
                AppError::Validation(format!("{}: {}", context, message))
            }
            AppError::Io { message, path } => AppError::Io {
                message: format!("{}: {}", context, message),
                path,
            },
            other => other,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Serialization(error.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(error: toml::ser::Error) -> Self {
        AppError::Serialization(error.to_string())
    }
}

impl From<aho_corasick::BuildError> for AppError {
    fn from(error: aho_corasick::BuildError) -> Self {
        AppError::Pattern(error.to_string())
    }
}

/**
 * 统一结果类型
 */
pub type Result<T> = std::result::Result<T, AppError>;
