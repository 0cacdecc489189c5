//! Line classification: partition one manifest line into valid and
//! invalid page-range tokens.

use crate::range::PageRange;

/// One magazine article: the token as written plus its parsed range.
///
/// An `Article` only exists for tokens that parsed, so downstream code
/// (the overlap scan in particular) never sees an unvalidated range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub token: String,
    pub range: PageRange,
}

impl Article {
    pub fn new(token: impl Into<String>, range: PageRange) -> Self {
        Self {
            token: token.into(),
            range,
        }
    }
}

/// One manifest line partitioned by token validity.
///
/// Order within each bucket follows input order; every non-empty token
/// lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub valid: Vec<Article>,
    pub invalid: Vec<String>,
}

impl ClassifiedLine {
    /// Split a line on commas, trim each token, and classify every
    /// non-empty token. An empty or all-whitespace line yields two empty
    /// buckets.
    pub fn classify(line: &str) -> Self {
        let mut valid = Vec::new();
        let mut invalid = Vec::new();

        for token in line.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            match token.parse::<PageRange>() {
                Ok(range) => valid.push(Article::new(token, range)),
                Err(_) => invalid.push(token.to_string()),
            }
        }

        Self { valid, invalid }
    }

    /// Comma-joined valid tokens, ready to append to the valid artifact.
    pub fn valid_line(&self) -> String {
        self.valid
            .iter()
            .map(|a| a.token.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Comma-joined invalid tokens, ready to append to the invalid artifact.
    pub fn invalid_line(&self) -> String {
        self.invalid.join(",")
    }

    /// True when the line held no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mixed_line() {
        let line = ClassifiedLine::classify("10-15, 12-18, abc-def");

        assert_eq!(line.valid.len(), 2);
        assert_eq!(line.valid[0].token, "10-15");
        assert_eq!(line.valid[0].range, PageRange::new(10, 15));
        assert_eq!(line.valid[1].token, "12-18");
        assert_eq!(line.invalid, vec!["abc-def".to_string()]);
    }

    #[test]
    fn test_classify_preserves_input_order() {
        let line = ClassifiedLine::classify("9-3, 1-2, oops, 4-8, 7");

        let valid: Vec<&str> = line.valid.iter().map(|a| a.token.as_str()).collect();
        assert_eq!(valid, vec!["1-2", "4-8"]);
        assert_eq!(line.invalid, vec!["9-3", "oops", "7"]);
    }

    #[test]
    fn test_classify_trims_whitespace() {
        let line = ClassifiedLine::classify("  10-15 ,\t12-18  ");

        assert_eq!(line.valid_line(), "10-15,12-18");
        assert!(line.invalid.is_empty());
    }

    #[test]
    fn test_classify_empty_line() {
        let line = ClassifiedLine::classify("");
        assert!(line.is_empty());
        assert_eq!(line.valid_line(), "");
        assert_eq!(line.invalid_line(), "");

        let line = ClassifiedLine::classify("   ");
        assert!(line.is_empty());
    }

    #[test]
    fn test_classify_skips_empty_tokens() {
        let line = ClassifiedLine::classify("10-15,,  ,12-18");

        assert_eq!(line.valid.len(), 2);
        assert!(line.invalid.is_empty());
    }

    #[test]
    fn test_joined_lines_have_no_separator_artifacts() {
        let line = ClassifiedLine::classify("10-15");
        assert_eq!(line.valid_line(), "10-15");

        let line = ClassifiedLine::classify("bad");
        assert_eq!(line.invalid_line(), "bad");
    }

    #[test]
    fn test_round_trip_partitions_original_tokens() {
        let input = "10-15, 12-18, abc-def, 5-5, 9-3";
        let line = ClassifiedLine::classify(input);

        let rejoined: Vec<String> = line
            .valid
            .iter()
            .map(|a| a.token.clone())
            .chain(line.invalid.iter().cloned())
            .collect();

        let mut original: Vec<String> =
            input.split(',').map(|t| t.trim().to_string()).collect();
        original.sort();
        let mut rejoined_sorted = rejoined.clone();
        rejoined_sorted.sort();
        assert_eq!(rejoined_sorted, original);
    }
}
