//! 终端渲染
//!
//! 按原仪表盘的版面顺序输出：日志详情、代码片段、根因分析、完整堆栈。

use crate::error::Result;
use crate::models::{DisplayConfig, LogOption, ResolutionResult};

pub const SNIPPET_NOT_FOUND: &str = "Code snippet not found.";

/// 渲染选择列表，每行 "[index] label"
pub fn render_log_list(options: &[LogOption]) -> String {
    let mut out = String::from("Exception Logs\n");
    for option in options {
        out.push_str(&format!("  [{}] {}\n", option.index, option.display_label));
    }
    out
}

/**
 * 渲染单条解析结果
 *
 * # 参数
 * * `expand_stack_trace` - 是否展开完整堆栈面板
 */
pub fn render_resolution(
    result: &ResolutionResult,
    display: &DisplayConfig,
    expand_stack_trace: bool,
) -> Result<String> {
    let mut out = String::new();

    out.push_str("== Log Details ==\n");
    out.push_str(&serde_json::to_string_pretty(&result.log)?);
    out.push_str("\n\n");

    out.push_str("== Code Snippet ==\n");
    match &result.snippet {
        Some(snippet) => push_code_block(&mut out, &display.snippet_language, snippet),
        None => {
            out.push_str(SNIPPET_NOT_FOUND);
            out.push('\n');
        }
    }
    out.push('\n');

    let diagnosis = &result.diagnosis;
    out.push_str("== Root Cause Analysis ==\n");
    out.push_str(&format!("Root Cause: {}\n", diagnosis.root_cause));
    out.push_str(&format!("Suggested Fix: {}\n", diagnosis.suggested_fix));
    if let Some(commit) = &diagnosis.related_commit {
        out.push_str(&format!("Related Commit: {}\n", commit));
    }
    out.push('\n');

    if expand_stack_trace {
        out.push_str("== Full Stack Trace ==\n");
        push_code_block(&mut out, &display.snippet_language, &result.log.stack_trace);
    } else {
        out.push_str("[+] Full Stack Trace (use --stack-trace to expand)\n");
    }

    Ok(out)
}

/// 代码块开头的空行不输出
fn push_code_block(out: &mut String, language: &str, code: &str) {
    let code = code.trim_start_matches('\n');
    out.push_str(&format!("```{}\n", language));
    out.push_str(code);
    if !code.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n");
}
