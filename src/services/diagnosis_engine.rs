use aho_corasick::AhoCorasick;

use crate::error::Result;
use crate::models::DiagnosisResult;

/// 诊断规则：堆栈中包含 `pattern` 即命中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisRule {
    pub pattern: String,
    pub diagnosis: DiagnosisResult,
}

impl DiagnosisRule {
    pub fn new(pattern: impl Into<String>, diagnosis: DiagnosisResult) -> Self {
        Self {
            pattern: pattern.into(),
            diagnosis,
        }
    }
}

/**
 * 诊断引擎 - 有序规则表，先命中者优先
 *
 * 使用 Aho-Corasick 一次扫描找出所有出现的模式，再取规则表中位置最靠前的那条。
 * 子串匹配、区分大小写，不支持正则。
 */
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    ac: Option<AhoCorasick>,
    rules: Vec<DiagnosisRule>,
    fallback: DiagnosisResult,
}

impl DiagnosisEngine {
    /**
     * 创建诊断引擎
     *
     * # 参数
     * * `rules` - 按优先级排列的规则
     * * `fallback` - 无规则命中时返回的诊断
     */
    pub fn new(rules: Vec<DiagnosisRule>, fallback: DiagnosisResult) -> Result<Self> {
        let ac = if rules.is_empty() {
            None
        } else {
            // 默认 MatchKind::Standard，支持重叠查找
            Some(AhoCorasick::new(rules.iter().map(|r| r.pattern.as_str()))?)
        };

        Ok(Self {
            ac,
            rules,
            fallback,
        })
    }

    /// 内置规则：空指针、SQL 超时
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_rules(), fallback_diagnosis())
    }

    /// 返回命中的规则下标（规则表中最靠前的）
    pub fn classify(&self, stack_trace: &str) -> Option<usize> {
        let ac = self.ac.as_ref()?;
        ac.find_overlapping_iter(stack_trace)
            .map(|mat| mat.pattern().as_usize())
            .min()
    }

    /// 对堆栈分类并返回诊断；纯函数，无跨调用状态
    pub fn diagnose(&self, stack_trace: &str) -> DiagnosisResult {
        match self.classify(stack_trace) {
            Some(idx) => {
                tracing::debug!(rule = %self.rules[idx].pattern, "diagnosis rule matched");
                self.rules[idx].diagnosis.clone()
            }
            None => {
                tracing::debug!("no diagnosis rule matched, using fallback");
                self.fallback.clone()
            }
        }
    }

    pub fn rules(&self) -> &[DiagnosisRule] {
        &self.rules
    }
}

pub fn builtin_rules() -> Vec<DiagnosisRule> {
    vec![
        DiagnosisRule::new(
            "NullPointerException",
            DiagnosisResult::new(
                "Account object is null before processing payment.",
                "Add a null check and validation before calling process().",
                Some("Fix NPE in PaymentProcessor (#123)"),
            ),
        ),
        DiagnosisRule::new(
            "SQLTimeoutException",
            DiagnosisResult::new(
                "Database query took too long due to missing index.",
                "Add an index on 'id' column in 'users' table.",
                Some("Optimize query for UserRepository (#98)"),
            ),
        ),
    ]
}

pub fn fallback_diagnosis() -> DiagnosisResult {
    DiagnosisResult::new("Unknown error.", "Investigate further.", None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn engine() -> DiagnosisEngine {
        DiagnosisEngine::builtin().expect("builtin rules must compile")
    }

    #[rstest]
    #[case("java.lang.NullPointerException\n    at Foo.bar(Foo.java:1)", Some(0))]
    #[case("java.sql.SQLTimeoutException: Query timed out", Some(1))]
    // 两者都出现时，规则表靠前者优先，与出现位置无关
    #[case("SQLTimeoutException caused by NullPointerException", Some(0))]
    #[case("wrapped: xNullPointerExceptiony", Some(0))]
    #[case("java.lang.nullpointerexception", None)]
    #[case("SQLTimeout", None)]
    #[case("", None)]
    fn test_classify(#[case] trace: &str, #[case] expected: Option<usize>) {
        assert_eq!(engine().classify(trace), expected);
    }

    #[test]
    fn test_null_pointer_diagnosis() {
        let result = engine().diagnose("java.lang.NullPointerException");
        assert_eq!(
            result.root_cause,
            "Account object is null before processing payment."
        );
        assert_eq!(
            result.suggested_fix,
            "Add a null check and validation before calling process()."
        );
        assert_eq!(
            result.related_commit.as_deref(),
            Some("Fix NPE in PaymentProcessor (#123)")
        );
    }

    #[test]
    fn test_timeout_diagnosis() {
        let result = engine().diagnose("java.sql.SQLTimeoutException: Query timed out");
        assert_eq!(
            result.root_cause,
            "Database query took too long due to missing index."
        );
        assert_eq!(
            result.related_commit.as_deref(),
            Some("Optimize query for UserRepository (#98)")
        );
    }

    #[test]
    fn test_fallback_has_no_commit() {
        let result = engine().diagnose("java.lang.IllegalStateException");
        assert_eq!(result, fallback_diagnosis());
        assert_eq!(result.root_cause, "Unknown error.");
        assert_eq!(result.suggested_fix, "Investigate further.");
        assert!(result.related_commit.is_none());
    }

    #[test]
    fn test_empty_rule_table_always_falls_back() {
        let engine = DiagnosisEngine::new(Vec::new(), fallback_diagnosis()).unwrap();
        assert!(engine.rules().is_empty());
        assert_eq!(
            engine.diagnose("NullPointerException"),
            fallback_diagnosis()
        );
    }

    #[test]
    fn test_overlapping_patterns_respect_rule_order() {
        let custom = DiagnosisEngine::new(
            vec![
                DiagnosisRule::new("Timeout", DiagnosisResult::new("short", "a", None)),
                DiagnosisRule::new("SQLTimeoutException", DiagnosisResult::new("long", "b", None)),
            ],
            fallback_diagnosis(),
        )
        .unwrap();
        assert_eq!(custom.diagnose("SQLTimeoutException").root_cause, "short");
    }

    proptest! {
        #[test]
        fn prop_npe_anywhere_wins(prefix in ".{0,30}", suffix in ".{0,30}") {
            let trace = format!("{}NullPointerException{}", prefix, suffix);
            prop_assert_eq!(engine().diagnose(&trace), builtin_rules()[0].diagnosis.clone());
        }

        #[test]
        fn prop_diagnose_is_pure(trace in ".{0,60}") {
            let engine = engine();
            prop_assert_eq!(engine.diagnose(&trace), engine.diagnose(&trace));
        }

        #[test]
        fn prop_matches_plain_contains(trace in "[A-Za-z ]{0,60}") {
            let expected = if trace.contains("NullPointerException") {
                builtin_rules()[0].diagnosis.clone()
            } else if trace.contains("SQLTimeoutException") {
                builtin_rules()[1].diagnosis.clone()
            } else {
                fallback_diagnosis()
            };
            prop_assert_eq!(engine().diagnose(&trace), expected);
        }
    }
}
