//! JavaScript bindings.
//!
//! Records cross the boundary as plain objects, e.g.
//! `{ shipping_method: "flat", dest_zip: "NP%", condition_from_value: 10, price: 4.99 }`.
//! Extra columns may be strings, numbers, booleans or null and come back
//! unchanged.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::selection::{RateRecord, SelectionMode, SpecificityRanker};
use crate::specificity;

#[wasm_bindgen(typescript_custom_section)]
const TS_TYPES: &'static str = r#"
export type SelectionMode = "best-per-method" | "global-best" | "stable-sort";
export type RateRecord = {
  shipping_method?: string;
  dest_zip?: string;
  condition_from_value?: string | number;
  [column: string]: string | number | boolean | null | undefined;
};
"#;

/// Scores a postcode pattern.
#[wasm_bindgen(js_name = "computeSpecificity")]
pub fn compute_specificity(pattern: &str) -> usize {
    specificity::compute_specificity(pattern)
}

/// Filters and orders rate records by postcode specificity.
#[wasm_bindgen(js_name = "selectRates", unchecked_return_type = "RateRecord[]")]
pub fn select_rates(rates: JsValue, mode: &str) -> Result<JsValue, JsError> {
    let mode: SelectionMode = mode.parse()?;
    let rates: Vec<RateRecord> = serde_wasm_bindgen::from_value(rates)?;

    let selected = SpecificityRanker::new(mode).select_rates(rates);

    // Flattened columns would otherwise come back as a JS `Map`.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(selected.serialize(&serializer)?)
}
