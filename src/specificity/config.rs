//! Scorer configuration.

use crate::error::ConfigError;

/// Bonus added to the literal length of a pattern with no wildcard.
///
/// Any literal prefix of `EXACT_MATCH_BONUS` characters or more is capped
/// at `EXACT_MATCH_BONUS - 1` when scoring.
pub const EXACT_MATCH_BONUS: usize = 100;

/// Configuration for [`SpecificityScorer`](super::SpecificityScorer).
///
/// # Examples
///
/// ```
/// use postcode_priority::specificity::ScorerConfig;
///
/// let config = ScorerConfig::default()
///     .with_exact_match_bonus(1_000)
///     .with_trim(false);
/// assert_eq!(config.exact_match_bonus, 1_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScorerConfig {
    /// Bonus for patterns containing no wildcard marker.
    pub exact_match_bonus: usize,

    /// Whether surrounding whitespace is stripped before scoring.
    pub trim: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            exact_match_bonus: EXACT_MATCH_BONUS,
            trim: true,
        }
    }
}

impl ScorerConfig {
    pub fn with_exact_match_bonus(mut self, bonus: usize) -> Self {
        self.exact_match_bonus = bonus;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Longest literal prefix that is counted before capping.
    pub fn max_prefix_len(&self) -> usize {
        self.exact_match_bonus.saturating_sub(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exact_match_bonus == 0 {
            return Err(ConfigError::ZeroExactMatchBonus);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScorerConfig::default();
        assert_eq!(config.exact_match_bonus, 100);
        assert!(config.trim);
        assert_eq!(config.max_prefix_len(), 99);
    }

    #[test]
    fn test_validate_ok() {
        assert!(ScorerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_bonus() {
        let config = ScorerConfig::default().with_exact_match_bonus(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroExactMatchBonus));
    }
}
