//! RCA Dashboard
//!
//! 异常日志根因分析演示：选中一条日志，提取 "文件:行号" 定位符，
//! 查找对应代码片段，并按规则表给出诊断。

pub mod error;
pub mod models;
pub mod monitoring;
pub mod presentation;
pub mod services;

pub use error::{AppError, Result};
pub use models::{AppConfig, DiagnosisResult, LogOption, LogRecord, ResolutionResult};
pub use services::{Dataset, ResolutionPipeline};

/// 按配置构造解析流程：有 fixture_path 时加载数据集，否则使用内置示例数据
pub fn build_pipeline(config: &AppConfig) -> Result<ResolutionPipeline> {
    let dataset = match &config.data.fixture_path {
        Some(path) => Dataset::from_json_file(path)?,
        None => Dataset::sample(chrono::Local::now()),
    };
    ResolutionPipeline::from_dataset(dataset)
}
