//! Postcode-pattern specificity ranking for shipping rates.
//!
//! Rate tables commonly key rates on postcode patterns with SQL `LIKE`
//! wildcards, so a single address can match several overlapping rules.
//! This crate decides which of those rules is the most specific and
//! filters or orders the candidate rates accordingly:
//!
//! - **Specificity**: scores a pattern by its literal prefix, with a bonus
//!   for exact literals. See [`specificity`].
//! - **Selection**: applies one of three policies to a candidate list.
//!   See [`selection`].
//!
//! # Example
//!
//! ```
//! use postcode_priority::{select_rates, RateRecord, SelectionMode};
//!
//! let candidates = vec![
//!     RateRecord::new("standard", "*"),
//!     RateRecord::new("standard", "NP10 1AA"),
//!     RateRecord::new("standard", "NP%"),
//! ];
//!
//! let ranked = select_rates(candidates, SelectionMode::StableSort);
//! assert_eq!(ranked[0].dest_zip.as_deref(), Some("NP10 1AA"));
//! assert_eq!(ranked[2].dest_zip.as_deref(), Some("*"));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for records and configuration.
//! - `parallel`: score large candidate lists with rayon.
//! - `wasm`: JavaScript bindings via `wasm-bindgen`.

pub mod error;
pub mod selection;
pub mod specificity;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::ConfigError;
pub use selection::{
    select_rates, FieldValue, RankerConfig, RateCandidate, RateRecord, SelectionMode,
    SpecificityRanker,
};
pub use specificity::{compute_specificity, ScorerConfig, SpecificityScorer};
