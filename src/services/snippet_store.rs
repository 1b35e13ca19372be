use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// 定位符 "<file>:<line>"，作为代码片段的查找键
///
/// 不校验文件名/行号格式，原样保存。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SnippetKey(String);

impl SnippetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SnippetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SnippetKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SnippetKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SnippetKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// 代码片段存储：定位符 → 源码文本，仅精确匹配
#[derive(Debug, Clone, Default)]
pub struct SnippetStore {
    snippets: HashMap<SnippetKey, String>,
}

impl SnippetStore {
    pub fn new<K, V, I>(snippets: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            snippets: snippets
                .into_iter()
                .map(|(k, v)| (SnippetKey::new(k), v.into()))
                .collect(),
        }
    }

    /// 精确查找；未命中返回 `None`（正常情况，不是错误）
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.snippets.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn store() -> SnippetStore {
        SnippetStore::new([
            ("PaymentProcessor.java:45", "void process() {}"),
            ("UserRepository.java:102", "User findById() {}"),
        ])
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(
            store().lookup("PaymentProcessor.java:45"),
            Some("void process() {}")
        );
    }

    #[rstest]
    #[case("paymentprocessor.java:45")]
    #[case("PaymentProcessor.java")]
    #[case("PaymentProcessor.java:4")]
    #[case("PaymentProcessor.java:45 ")]
    #[case(" PaymentProcessor.java:45")]
    #[case("")]
    fn test_non_matching_keys(#[case] key: &str) {
        assert_eq!(store().lookup(key), None);
    }

    #[test]
    fn test_key_display() {
        let key = SnippetKey::from("UserRepository.java:102");
        assert_eq!(key.to_string(), "UserRepository.java:102");
        assert_eq!(
            serde_json::to_string(&key).unwrap(),
            "\"UserRepository.java:102\""
        );
    }
}
