//! Specificity-based rate selection.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::config::{RankerConfig, SelectionMode};
use super::types::RateCandidate;
use crate::error::ConfigError;
use crate::specificity::SpecificityScorer;

/// Filters and orders candidate rates by postcode pattern specificity.
///
/// Records are never modified; the output is always a subsequence of the
/// input, possibly reordered. Inputs of zero or one record come back
/// unchanged in every mode.
///
/// # Examples
///
/// ```
/// use postcode_priority::selection::{RateRecord, SelectionMode, SpecificityRanker};
///
/// let rates = vec![
///     RateRecord::new("flat", "N%"),
///     RateRecord::new("flat", "NP%"),
///     RateRecord::new("express", "*"),
/// ];
///
/// let ranker = SpecificityRanker::new(SelectionMode::BestPerMethod);
/// let kept = ranker.select_rates(rates);
///
/// assert_eq!(kept.len(), 2);
/// assert_eq!(kept[0].dest_zip.as_deref(), Some("NP%"));
/// assert_eq!(kept[1].dest_zip.as_deref(), Some("*"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecificityRanker {
    config: RankerConfig,
}

impl SpecificityRanker {
    /// Creates a ranker with the given mode and default scoring.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            config: RankerConfig::default().with_mode(mode),
        }
    }

    /// Creates a ranker after validating the configuration.
    pub fn try_new(config: RankerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the ranker configuration.
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Returns the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.config.mode
    }

    /// Specificity of a single rate's postcode pattern.
    pub fn specificity<R: RateCandidate>(&self, rate: &R) -> usize {
        self.scorer().score(rate.dest_zip())
    }

    fn scorer(&self) -> SpecificityScorer {
        SpecificityScorer::new(self.config.scorer)
    }

    #[cfg(feature = "parallel")]
    fn scores<R: RateCandidate>(&self, rates: &[R]) -> Vec<usize> {
        use rayon::prelude::*;

        let scorer = self.scorer();
        if self.config.parallel {
            rates.par_iter().map(|rate| scorer.score(rate.dest_zip())).collect()
        } else {
            rates.iter().map(|rate| scorer.score(rate.dest_zip())).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn scores<R: RateCandidate>(&self, rates: &[R]) -> Vec<usize> {
        let scorer = self.scorer();
        rates.iter().map(|rate| scorer.score(rate.dest_zip())).collect()
    }

    /// Selects rates and returns their indices in output order.
    pub fn select_indices<R: RateCandidate>(&self, rates: &[R]) -> Vec<usize> {
        if rates.len() <= 1 {
            return (0..rates.len()).collect();
        }

        let scores = self.scores(rates);

        let selected = match self.config.mode {
            SelectionMode::BestPerMethod => best_per_method(rates, &scores),
            SelectionMode::GlobalBest => global_best(&scores),
            SelectionMode::StableSort => stable_sort(rates, &scores),
        };

        tracing::debug!(
            mode = %self.config.mode,
            input = rates.len(),
            output = selected.len(),
            "selected rates by postcode specificity"
        );

        selected
    }

    /// Selects rates and returns references in output order.
    pub fn select<'a, R: RateCandidate>(&self, rates: &'a [R]) -> Vec<&'a R> {
        self.select_indices(rates)
            .into_iter()
            .map(|i| &rates[i])
            .collect()
    }

    /// Selects rates, consuming the input and moving the survivors out.
    pub fn select_rates<R: RateCandidate>(&self, rates: Vec<R>) -> Vec<R> {
        if rates.len() <= 1 {
            return rates;
        }

        let order = self.select_indices(&rates);
        let mut slots: Vec<Option<R>> = rates.into_iter().map(Some).collect();
        order.into_iter().filter_map(|i| slots[i].take()).collect()
    }

    /// Index of the first rate the current mode would emit.
    ///
    /// Returns `None` if the slice is empty.
    pub fn best<R: RateCandidate>(&self, rates: &[R]) -> Option<usize> {
        self.select_indices(rates).first().copied()
    }
}

/// Selects rates with the default configuration for `mode`.
pub fn select_rates<R: RateCandidate>(rates: Vec<R>, mode: SelectionMode) -> Vec<R> {
    SpecificityRanker::new(mode).select_rates(rates)
}

fn best_per_method<R: RateCandidate>(rates: &[R], scores: &[usize]) -> Vec<usize> {
    // Kept index per method, in order of first appearance.
    let mut kept: Vec<usize> = Vec::new();
    let mut slot_of: HashMap<&str, usize> = HashMap::new();

    for (i, rate) in rates.iter().enumerate() {
        let method = rate.shipping_method();
        match slot_of.get(method) {
            None => {
                slot_of.insert(method, kept.len());
                kept.push(i);
            }
            Some(&slot) => {
                let current = kept[slot];
                if scores[i] > scores[current] {
                    tracing::trace!(method, dropped = current, kept = i, "replaced less specific rate");
                    kept[slot] = i;
                } else {
                    tracing::trace!(method, dropped = i, kept = current, "dropped less specific rate");
                }
            }
        }
    }

    kept
}

fn global_best(scores: &[usize]) -> Vec<usize> {
    let Some(&max) = scores.iter().max() else {
        return Vec::new();
    };

    scores
        .iter()
        .enumerate()
        .filter_map(|(i, &score)| {
            if score == max {
                Some(i)
            } else {
                tracing::trace!(dropped = i, score, max, "dropped less specific rate");
                None
            }
        })
        .collect()
}

fn stable_sort<R: RateCandidate>(rates: &[R], scores: &[usize]) -> Vec<usize> {
    let conditions: Vec<f64> = rates
        .iter()
        .map(|rate| {
            let v = rate.condition_from_value();
            if v.is_nan() {
                0.0
            } else {
                v
            }
        })
        .collect();

    let mut indices: Vec<usize> = (0..rates.len()).collect();

    // `sort_by` is stable, so full ties keep input order.
    indices.sort_by(|&a, &b| {
        scores[b].cmp(&scores[a]).then_with(|| {
            conditions[b]
                .partial_cmp(&conditions[a])
                .unwrap_or(Ordering::Equal)
        })
    });

    indices
}
