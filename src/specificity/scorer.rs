//! Pattern specificity scoring.

use super::config::ScorerConfig;
use crate::error::ConfigError;

/// Returns `true` for the wildcard markers `%`, `_` and `*`.
#[inline]
pub fn is_wildcard(c: char) -> bool {
    matches!(c, '%' | '_' | '*')
}

/// Number of leading characters before the first wildcard marker.
pub fn literal_prefix_len(pattern: &str) -> usize {
    pattern.chars().take_while(|&c| !is_wildcard(c)).count()
}

/// Scores a pattern with the default configuration.
///
/// Higher means the pattern rules out more of the postcode space:
///
/// - `""`, `"*"`, `"%"` and anything starting with a wildcard score `0`
/// - `"N%"` = 1, `"NP%"` = 2, `"NP10%"` = 4
/// - `"NP10 1AA"` = 108 (exact literal, 8 characters plus the bonus)
///
/// Literal prefixes are capped at `EXACT_MATCH_BONUS - 1` (99) characters,
/// so above that length the score is no longer the raw prefix length: a
/// 150-character exact literal scores 199, not 250, and a 150-character
/// prefix before a wildcard scores 99. This keeps every exact literal
/// above every wildcard pattern.
///
/// # Examples
///
/// ```
/// use postcode_priority::specificity::compute_specificity;
///
/// assert_eq!(compute_specificity("*"), 0);
/// assert_eq!(compute_specificity("NP%"), 2);
/// assert_eq!(compute_specificity("NP10 1AA"), 108);
/// ```
pub fn compute_specificity(pattern: &str) -> usize {
    SpecificityScorer::default().score(pattern)
}

/// Computes specificity scores for postcode patterns.
///
/// A pattern scores its literal prefix length (characters before the first
/// `%`, `_` or `*`). A pattern with no wildcard at all is an exact literal
/// and additionally receives the configured exact-match bonus, so it always
/// outranks any wildcard pattern.
///
/// The scorer is stateless apart from its configuration and can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecificityScorer {
    config: ScorerConfig,
}

impl SpecificityScorer {
    /// Creates a scorer without validating the configuration.
    ///
    /// An invalid configuration still scores every pattern; a zero bonus
    /// simply caps every literal prefix at zero.
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Creates a scorer after validating the configuration.
    pub fn try_new(config: ScorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the scorer configuration.
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Scores a single pattern.
    pub fn score(&self, pattern: &str) -> usize {
        let pattern = if self.config.trim {
            pattern.trim()
        } else {
            pattern
        };

        if pattern.is_empty() || pattern == "*" || pattern == "%" {
            return 0;
        }

        let raw_prefix = literal_prefix_len(pattern);
        if raw_prefix == 0 {
            return 0;
        }

        // The prefix stops at the first wildcard, so reaching the end of
        // the pattern means there is no wildcard anywhere.
        let exact = raw_prefix == pattern.chars().count();

        let cap = self.config.max_prefix_len();
        let prefix = if raw_prefix > cap {
            tracing::warn!(
                pattern,
                prefix_len = raw_prefix,
                cap,
                "literal prefix exceeds exact-match bonus, capping"
            );
            cap
        } else {
            raw_prefix
        };

        if exact {
            prefix.saturating_add(self.config.exact_match_bonus)
        } else {
            prefix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specificity::EXACT_MATCH_BONUS;
    use proptest::prelude::*;

    #[test]
    fn test_universal_patterns_score_zero() {
        assert_eq!(compute_specificity("*"), 0);
        assert_eq!(compute_specificity(""), 0);
        assert_eq!(compute_specificity("%"), 0);
        assert_eq!(compute_specificity("   "), 0);
        assert_eq!(compute_specificity(" * "), 0);
    }

    #[test]
    fn test_prefix_patterns() {
        assert_eq!(compute_specificity("N%"), 1);
        assert_eq!(compute_specificity("NP%"), 2);
        assert_eq!(compute_specificity("NP10%"), 4);
        assert_eq!(compute_specificity("NP10 _AA"), 5);
        assert_eq!(compute_specificity("NP1*"), 3);
    }

    #[test]
    fn test_exact_match_gets_bonus() {
        assert_eq!(compute_specificity("NP10 1AA"), 108);
        assert_eq!(compute_specificity("N"), 101);
    }

    #[test]
    fn test_leading_wildcard_scores_zero() {
        assert_eq!(compute_specificity("%NP"), 0);
        assert_eq!(compute_specificity("_P10"), 0);
        assert_eq!(compute_specificity("*NP10"), 0);
    }

    #[test]
    fn test_wildcard_after_prefix_removes_bonus() {
        // Wildcard anywhere, not just at the end, disqualifies the bonus.
        assert_eq!(compute_specificity("NP10 1A_"), 7);
        assert_eq!(compute_specificity("NP%AA"), 2);
    }

    #[test]
    fn test_trim_disabled() {
        let scorer = SpecificityScorer::new(ScorerConfig::default().with_trim(false));
        assert_eq!(scorer.score(" NP%"), 3);
        assert_eq!(scorer.score(" *"), 1);
        assert_eq!(scorer.score("NP "), 103);
    }

    #[test]
    fn test_trim_enabled() {
        let scorer = SpecificityScorer::default();
        assert_eq!(scorer.score(" NP%"), 2);
        assert_eq!(scorer.score("NP10 1AA\n"), 108);
    }

    #[test]
    fn test_prefix_capped_by_bonus() {
        let scorer = SpecificityScorer::new(ScorerConfig::default().with_exact_match_bonus(5));
        assert_eq!(scorer.score("ABCDEFG%"), 4);
        assert_eq!(scorer.score("ABC"), 8);
        assert_eq!(scorer.score("ABCDEFGHIJ"), 9);
        assert!(scorer.score("A") > scorer.score("ABCDEFGHIJKLMNOP%"));
    }

    #[test]
    fn test_long_prefix_capped_at_default_bonus() {
        let long = "A".repeat(150);
        assert_eq!(compute_specificity(&long), 199);
        assert_eq!(compute_specificity(&format!("{long}%")), 99);
        assert!(compute_specificity("A") > compute_specificity(&format!("{long}%")));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(compute_specificity("ÅB%"), 2);
    }

    #[test]
    fn test_try_new_rejects_zero_bonus() {
        let result = SpecificityScorer::try_new(ScorerConfig::default().with_exact_match_bonus(0));
        assert!(result.is_err());
    }

    fn literal() -> impl Strategy<Value = String> {
        "[A-Z0-9 ]{1,12}".prop_map(|s| s.trim().to_string())
    }

    proptest! {
        #[test]
        fn prop_longer_prefix_scores_at_least_as_high(
            base in literal(),
            ext in "[A-Z0-9]{0,6}",
        ) {
            let short = format!("{base}%");
            let long = format!("{base}{ext}%");
            prop_assert!(compute_specificity(&long) >= compute_specificity(&short));
        }

        #[test]
        fn prop_exact_literal_beats_any_wildcard(
            exact in "[A-Z0-9]{1,20}",
            prefix in "[A-Z0-9 ]{0,90}",
            suffix in "[A-Z0-9%_]{0,8}",
            marker in prop::sample::select(vec!['%', '_', '*']),
        ) {
            let wildcard = format!("{prefix}{marker}{suffix}");
            prop_assert!(compute_specificity(&exact) > compute_specificity(&wildcard));
        }

        #[test]
        fn prop_score_is_total(pattern in ".{0,40}") {
            let score = compute_specificity(&pattern);
            prop_assert!(score <= EXACT_MATCH_BONUS * 2);
        }
    }
}
