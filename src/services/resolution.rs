//! 解析流程
//!
//! 选中日志 → 提取定位符 → 查找代码片段 → 诊断堆栈，组合成一个结果。
//! 所有存储在构造时注入，之后只读；每次调用相互独立。

use crate::error::Result;
use crate::models::{LogOption, ResolutionResult};

use super::diagnosis_engine::DiagnosisEngine;
use super::log_store::LogStore;
use super::reference_extractor;
use super::sample_data::Dataset;
use super::snippet_store::SnippetStore;

#[derive(Debug, Clone)]
pub struct ResolutionPipeline {
    logs: LogStore,
    snippets: SnippetStore,
    engine: DiagnosisEngine,
}

impl ResolutionPipeline {
    pub fn new(logs: LogStore, snippets: SnippetStore, engine: DiagnosisEngine) -> Self {
        Self {
            logs,
            snippets,
            engine,
        }
    }

    /// 由数据集构造，使用内置诊断规则
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        Ok(Self::new(
            LogStore::new(dataset.logs),
            SnippetStore::new(dataset.snippets),
            DiagnosisEngine::builtin()?,
        ))
    }

    /// 选择列表，顺序与日志存储一致
    pub fn list_logs(&self, time_format: &str) -> Vec<LogOption> {
        self.logs
            .get_all()
            .iter()
            .enumerate()
            .map(|(index, log)| LogOption {
                display_label: log.display_label(time_format),
                index,
            })
            .collect()
    }

    /**
     * 解析指定索引的日志
     *
     * # 错误
     * 索引越界时原样返回 `IndexOutOfRange`，不产生部分结果
     */
    pub fn resolve(&self, index: usize) -> Result<ResolutionResult> {
        let log = self.logs.get(index).inspect_err(|e| {
            tracing::warn!(index, "log selection rejected: {}", e);
        })?;

        let locator = reference_extractor::extract(&log.exception);
        let snippet = locator
            .as_ref()
            .and_then(|key| self.snippets.lookup(key.as_str()))
            .map(str::to_string);
        let diagnosis = self.engine.diagnose(&log.stack_trace);

        tracing::debug!(
            index,
            service = %log.service,
            locator = ?locator.as_ref().map(|k| k.as_str()),
            snippet_found = snippet.is_some(),
            "resolved log"
        );

        Ok(ResolutionResult {
            log: log.clone(),
            locator,
            snippet,
            diagnosis,
        })
    }

    pub fn logs(&self) -> &LogStore {
        &self.logs
    }

    pub fn snippets(&self) -> &SnippetStore {
        &self.snippets
    }
}
