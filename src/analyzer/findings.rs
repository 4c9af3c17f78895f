//! Frustration and goal extraction from category rule tables.

use crate::analyzer::keywords::CategoryRule;

/// Evaluate category rules in table order against the combined text.
///
/// Any keyword match emits the category's single fixed sentence.  Sentences
/// are deduplicated with insertion-ordered set semantics, so two categories
/// that map to the same sentence contribute one entry and output order stays
/// deterministic.
pub(crate) fn match_categories(rules: &[CategoryRule], text: &str) -> Vec<String> {
    let mut findings: Vec<String> = Vec::new();
    for rule in rules {
        if rule.keywords.iter().any(|kw| text.contains(kw))
            && !findings.iter().any(|f| f == rule.sentence)
        {
            findings.push(rule.sentence.to_string());
        }
    }
    findings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::keywords::AnalyzerConfig;

    #[test]
    fn test_no_match_is_empty() {
        let config = AnalyzerConfig::default();
        assert!(match_categories(&config.frustrations, "all is well").is_empty());
    }

    #[test]
    fn test_one_sentence_per_category() {
        let config = AnalyzerConfig::default();
        // Three technology keywords still yield one technology sentence.
        let findings = match_categories(&config.frustrations, "bug crash error");
        assert_eq!(
            findings,
            vec!["Technology issues and software problems".to_string()]
        );
    }

    #[test]
    fn test_categories_emit_in_table_order() {
        let config = AnalyzerConfig::default();
        let findings = match_categories(&config.frustrations, "waiting on a buggy rude agent");
        assert_eq!(
            findings,
            vec![
                "Technology issues and software problems".to_string(),
                "Time-wasting processes and delays".to_string(),
                "Poor customer service experiences".to_string(),
            ]
        );
    }

    #[test]
    fn test_identical_sentences_are_deduplicated() {
        let rules = vec![
            CategoryRule {
                name: "first",
                keywords: vec!["foo"],
                sentence: "Shared output sentence",
            },
            CategoryRule {
                name: "second",
                keywords: vec!["bar"],
                sentence: "Shared output sentence",
            },
        ];
        let findings = match_categories(&rules, "foo and bar");
        assert_eq!(findings, vec!["Shared output sentence".to_string()]);
    }

    #[test]
    fn test_multiword_keywords_match_as_substrings() {
        let config = AnalyzerConfig::default();
        let findings = match_categories(&config.goals, "trying to save money this year");
        assert_eq!(
            findings,
            vec!["Achieve financial stability and smart money management".to_string()]
        );
    }
}
