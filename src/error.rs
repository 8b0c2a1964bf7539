//! Configuration errors.
//!
//! Ranking itself is total over its input and never fails; these errors
//! only surface when building or parsing a configuration.

use thiserror::Error;

/// Error returned when a ranker or scorer configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The exact-match bonus must be positive, otherwise exact literals
    /// could not outrank wildcard patterns.
    #[error("exact_match_bonus must be positive")]
    ZeroExactMatchBonus,

    /// A selection mode name did not match any known mode.
    #[error("unknown selection mode {0:?}, expected one of: best-per-method, global-best, stable-sort")]
    UnknownMode(String),
}
