//! Shipping-rate selection by postcode specificity.
//!
//! When several rate rules match the same destination, e.g. both `N%`
//! and `NP%` match postcode `NP10 1AA`, the more specific pattern should
//! win. The ranker scores each candidate's pattern and applies one of
//! three policies:
//!
//! - **Best per method**: one rate per shipping method, the most specific.
//! - **Global best**: every rate tied for the highest score.
//! - **Stable sort**: all rates, most specific first, then by
//!   `condition_from_value` descending.
//!
//! Ranking is a post-processing step on an already matched candidate
//! list. It never fails and never modifies a record.

mod config;
mod ranker;
mod types;

pub use config::{RankerConfig, SelectionMode};
pub use ranker::{select_rates, SpecificityRanker};
pub use types::{parse_condition_value, FieldValue, RateCandidate, RateRecord};
