//! Corpus runner
//!
//! Parses every case with one reused `UrlParser`, so leftovers from the
//! previous case would show up as failures too.
use super::corpus_loader::{CorpusFailure, CorpusResult, TestCase, UrlTest};
use lunar_url::UrlParser;

fn run_case(parser: &mut UrlParser, test_num: usize, case: &UrlTest) -> Vec<CorpusFailure> {
    parser.parse(&case.input);

    let fields = [
        ("scheme", case.scheme.clone(), parser.scheme().to_string()),
        ("fragment", case.fragment.clone(), parser.fragment().to_string()),
        (
            "size",
            case.size.to_string(),
            parser.query_store().count().to_string(),
        ),
        ("path", case.path.clone(), parser.absolute_path().to_string()),
        (
            "pathAndQuery",
            case.path_and_query.clone(),
            parser.path_and_query(),
        ),
        ("userInfo", case.user_info.clone(), parser.user_info().to_string()),
        ("hostname", case.hostname.clone(), parser.host().to_string()),
        ("port", case.port.to_string(), parser.port().to_string()),
    ];

    fields
        .into_iter()
        .filter(|(_, expected, actual)| expected != actual)
        .map(|(field, expected, actual)| CorpusFailure {
            test_num,
            input: case.input.clone(),
            field,
            expected,
            actual,
        })
        .collect()
}

/// Run corpus cases and return results
pub fn run_corpus(cases: Vec<TestCase>) -> CorpusResult {
    let mut result = CorpusResult::default();
    let mut parser = UrlParser::new();
    let mut test_num = 0;

    for case in cases {
        let TestCase::UrlTest(case) = case else {
            continue;
        };
        test_num += 1;

        let failures = run_case(&mut parser, test_num, &case);
        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.extend(failures);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus_loader::load_cases;

    #[test]
    fn test_run_corpus() {
        let result = run_corpus(load_cases());

        for failure in &result.failures {
            eprintln!(
                "Test #{} ({}): {} expected {:?}, got {:?}",
                failure.test_num, failure.input, failure.field, failure.expected, failure.actual
            );
        }

        assert!(result.failures.is_empty(), "{}", result.summary());
        assert_eq!(result.passed, 18);
    }

    #[test]
    fn test_run_corpus_reversed() {
        // Same cases in the opposite order, with the same reused parser
        let mut cases = load_cases();
        cases.reverse();
        let result = run_corpus(cases);
        assert_eq!(result.failed, 0, "{}", result.summary());
    }
}
