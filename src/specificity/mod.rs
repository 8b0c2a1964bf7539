//! Postcode pattern specificity.
//!
//! Patterns use SQL `LIKE` wildcards (`%` for any run of characters, `_`
//! for exactly one) or the sentinel `*` for "any destination". The score
//! of a pattern is the length of its literal prefix, plus a fixed bonus
//! when the pattern contains no wildcard at all.
//!
//! Matching a postcode against a pattern is not done here; the scorer
//! only ranks patterns that have already matched.

mod config;
mod scorer;

pub use config::{ScorerConfig, EXACT_MATCH_BONUS};
pub use scorer::{compute_specificity, is_wildcard, literal_prefix_len, SpecificityScorer};
