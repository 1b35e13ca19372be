//! 定位符提取
//!
//! 从异常摘要中取出第一个 `" at "` 之后的全部文本作为代码片段查找键。
//! 注意：只按第一次出现切分。如果自然语言描述里先出现了 " at "，
//! 得到的键会包含多余文本并导致查找失败。

use super::snippet_store::SnippetKey;

/// 摘要与定位符之间的分隔符
pub const LOCATOR_SEPARATOR: &str = " at ";

/**
 * 提取定位符
 *
 * # 返回
 * * `Some(key)` - 第一个分隔符之后的文本，原样返回，不做裁剪或格式校验
 * * `None` - 摘要中没有分隔符
 */
pub fn extract(exception_summary: &str) -> Option<SnippetKey> {
    exception_summary
        .split_once(LOCATOR_SEPARATOR)
        .map(|(_, locator)| SnippetKey::from(locator))
}
