//! Ranker configuration and selection modes.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::specificity::ScorerConfig;

/// Policy for turning specificity scores into a result list.
///
/// The modes are mutually exclusive; each is a complete contract on its own.
///
/// # Examples
///
/// ```
/// use postcode_priority::selection::SelectionMode;
///
/// let mode: SelectionMode = "global-best".parse().unwrap();
/// assert_eq!(mode, SelectionMode::GlobalBest);
/// assert_eq!(mode.to_string(), "global-best");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SelectionMode {
    /// Keep the single most specific rate per shipping method.
    ///
    /// Methods are emitted in order of first appearance. Within a method
    /// the first rate with the highest score wins ties.
    BestPerMethod,

    /// Keep every rate whose score equals the global maximum, in input
    /// order. Rates of different methods can all survive a tie.
    GlobalBest,

    /// Keep everything, ordered by score descending, then by
    /// `condition_from_value` descending.
    ///
    /// The sort is stable: rates tied on both keys keep their input order.
    #[default]
    StableSort,
}

impl SelectionMode {
    /// All modes, in declaration order.
    pub const ALL: [SelectionMode; 3] = [
        SelectionMode::BestPerMethod,
        SelectionMode::GlobalBest,
        SelectionMode::StableSort,
    ];

    /// Kebab-case name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::BestPerMethod => "best-per-method",
            SelectionMode::GlobalBest => "global-best",
            SelectionMode::StableSort => "stable-sort",
        }
    }

    /// Whether this mode can drop rates.
    pub fn is_filter(&self) -> bool {
        !matches!(self, SelectionMode::StableSort)
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = ConfigError;

    /// Accepts kebab-case or snake_case names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        SelectionMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}

/// Configuration for [`SpecificityRanker`](super::SpecificityRanker).
///
/// # Examples
///
/// ```
/// use postcode_priority::selection::{RankerConfig, SelectionMode};
/// use postcode_priority::specificity::ScorerConfig;
///
/// let config = RankerConfig::default()
///     .with_mode(SelectionMode::BestPerMethod)
///     .with_scorer(ScorerConfig::default().with_trim(false));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankerConfig {
    /// Selection policy.
    pub mode: SelectionMode,

    /// Pattern scoring settings.
    pub scorer: ScorerConfig,

    /// Whether to score records in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature enabled.
    pub parallel: bool,
}

impl RankerConfig {
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_scorer(mut self, scorer: ScorerConfig) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scorer.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RankerConfig::default();
        assert_eq!(config.mode, SelectionMode::StableSort);
        assert_eq!(config.scorer, ScorerConfig::default());
        assert!(!config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(RankerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_propagates_scorer_error() {
        let config =
            RankerConfig::default().with_scorer(ScorerConfig::default().with_exact_match_bonus(0));
        assert_eq!(config.validate(), Err(ConfigError::ZeroExactMatchBonus));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            "best-per-method".parse::<SelectionMode>(),
            Ok(SelectionMode::BestPerMethod)
        );
        assert_eq!(
            "GLOBAL_BEST".parse::<SelectionMode>(),
            Ok(SelectionMode::GlobalBest)
        );
        assert_eq!(
            " stable-sort ".parse::<SelectionMode>(),
            Ok(SelectionMode::StableSort)
        );
        assert_eq!(
            "fastest".parse::<SelectionMode>(),
            Err(ConfigError::UnknownMode("fastest".into()))
        );
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in SelectionMode::ALL {
            assert_eq!(mode.to_string().parse::<SelectionMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_is_filter() {
        assert!(SelectionMode::BestPerMethod.is_filter());
        assert!(SelectionMode::GlobalBest.is_filter());
        assert!(!SelectionMode::StableSort.is_filter());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{"mode":"best-per-method","scorer":{"trim":false}}"#;
        let config: RankerConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.mode, SelectionMode::BestPerMethod);
        assert!(!config.scorer.trim);
        assert_eq!(config.scorer.exact_match_bonus, 100);
        assert!(!config.parallel);
    }
}
