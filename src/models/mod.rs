pub mod config;
pub mod diagnosis;
pub mod log_record;

// 重新导出核心类型
pub use config::{AppConfig, DataConfig, DisplayConfig, LoggingConfig};
pub use diagnosis::{DiagnosisResult, ResolutionResult};
pub use log_record::{LogOption, LogRecord};
