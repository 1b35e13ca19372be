use crate::error::{AppError, Result};
use crate::models::LogRecord;

/// 日志存储：初始化后只读，按位置寻址
#[derive(Debug, Clone, Default)]
pub struct LogStore {
    records: Vec<LogRecord>,
}

impl LogStore {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    /// 全部日志，顺序稳定
    pub fn get_all(&self) -> &[LogRecord] {
        &self.records
    }

    /**
     * 按索引获取日志
     *
     * # 错误
     * 索引不在 `[0, count)` 内时返回 `IndexOutOfRange`
     */
    pub fn get(&self, index: usize) -> Result<&LogRecord> {
        self.records
            .get(index)
            .ok_or_else(|| AppError::index_out_of_range(index, self.records.len()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
