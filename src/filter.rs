//! Decides which lookup results are worth printing.

use crate::models::LookupResult;

/// Case-insensitive ISP/domain exclusion list plus the nonzero-score rule.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    keywords: Vec<String>,
}

impl ExclusionFilter {
    /// Builds the filter; keywords are lowercased and empty ones dropped.
    ///
    /// Surrounding whitespace is part of a keyword, so `" net"` matches
    /// `"Big Net"` but not `"TestNet"`.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        keywords.sort();
        keywords.dedup();
        ExclusionFilter { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when the score is a nonzero integer and no keyword appears in
    /// `"<isp> <domain>"`.
    pub fn should_print(&self, result: &LookupResult) -> bool {
        if !is_nonzero_score(&result.score) {
            return false;
        }
        let text = format!("{} {}", result.isp, result.domain).to_lowercase();
        !self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

/// A non-empty run of ASCII digits with at least one digit other than `0`.
///
/// Checked on the digits directly so arbitrarily long values never overflow.
fn is_nonzero_score(score: &str) -> bool {
    !score.is_empty()
        && score.bytes().all(|b| b.is_ascii_digit())
        && score.bytes().any(|b| b != b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: &str, isp: &str, domain: &str) -> LookupResult {
        LookupResult {
            score: score.to_string(),
            country: "US".to_string(),
            isp: isp.to_string(),
            domain: domain.to_string(),
        }
    }

    #[test]
    fn test_zero_score_never_printed() {
        let filter = ExclusionFilter::default();
        assert!(!filter.should_print(&result("0", "Acme", "acme.com")));
        assert!(!filter.should_print(&result("000", "Acme", "acme.com")));
    }

    #[test]
    fn test_non_numeric_score_never_printed() {
        let filter = ExclusionFilter::default();
        for score in ["Error", "N/A", "", "-5", "+5", "5.0", " 5", "1e3"] {
            assert!(
                !filter.should_print(&result(score, "Acme", "acme.com")),
                "score {:?} should not print",
                score
            );
        }
    }

    #[test]
    fn test_positive_score_printed() {
        let filter = ExclusionFilter::default();
        assert!(filter.should_print(&result("5", "Acme", "acme.com")));
        assert!(filter.should_print(&result("100", "Acme", "acme.com")));
        assert!(filter.should_print(&result("007", "Acme", "acme.com")));
    }

    #[test]
    fn test_huge_score_does_not_overflow() {
        let filter = ExclusionFilter::default();
        let huge = "9".repeat(64);
        assert!(filter.should_print(&result(&huge, "Acme", "acme.com")));
    }

    #[test]
    fn test_exclusion_matches_isp_case_insensitively() {
        let filter = ExclusionFilter::new(["test"]);
        assert!(!filter.should_print(&result("20", "TestNet", "example.net")));
        assert!(filter.should_print(&result("20", "Acme", "example.net")));
    }

    #[test]
    fn test_exclusion_matches_domain() {
        let filter = ExclusionFilter::new(["Cloudflare"]);
        assert!(!filter.should_print(&result("5", "Acme", "cloudflare.com")));
    }

    #[test]
    fn test_exclusion_matches_across_isp_and_domain() {
        // The ISP and domain are joined with a single space before matching
        let filter = ExclusionFilter::new(["corp example"]);
        assert!(!filter.should_print(&result("5", "Big Corp", "example.org")));
    }

    #[test]
    fn test_empty_keywords_are_dropped() {
        let filter = ExclusionFilter::new(["", "Amazon", "amazon"]);
        assert_eq!(filter.keywords(), ["amazon"]);
        assert!(filter.should_print(&result("5", "Acme", "acme.com")));
    }

    #[test]
    fn test_keyword_whitespace_is_significant() {
        let filter = ExclusionFilter::new([" net"]);
        assert_eq!(filter.keywords(), [" net"]);
        assert!(!filter.should_print(&result("5", "Big Net", "example.org")));
        assert!(filter.should_print(&result("5", "TestNet", "example.org")));

        let blank = ExclusionFilter::new(["  "]);
        assert!(blank.should_print(&result("5", "Acme", "acme.com")));
        assert!(!blank.should_print(&result("5", "Acme  Ltd", "acme.com")));
    }
}
