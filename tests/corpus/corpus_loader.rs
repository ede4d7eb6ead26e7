//! Corpus loader
//!
//! Each entry is either a comment string or an object holding the input and
//! the fields expected after parsing it.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A decomposition test case
    UrlTest(Box<UrlTest>),
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UrlTest {
    pub input: String,
    pub scheme: String,
    pub fragment: String,
    /// Number of distinct query keys in the store
    pub size: usize,
    pub path: String,
    pub path_and_query: String,
    pub user_info: String,
    pub hostname: String,
    pub port: i32,
}

#[derive(Debug, Clone, Default)]
pub struct CorpusResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CorpusFailure>,
}

#[derive(Debug, Clone)]
pub struct CorpusFailure {
    pub test_num: usize,
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl CorpusResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("./url_parse_cases.json");
    serde_json::from_str(data).expect("Failed to parse corpus data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let url_tests = cases
            .iter()
            .filter(|case| matches!(case, TestCase::UrlTest(_)))
            .count();
        assert_eq!(url_tests, 18);
    }

    #[test]
    fn test_summary() {
        let result = CorpusResult {
            passed: 3,
            failed: 1,
            failures: Vec::new(),
        };
        assert_eq!(result.summary(), "Passed: 3, Failed: 1");
    }
}
