//! Rate record types.

use std::collections::BTreeMap;

/// A candidate shipping rate that can be ranked by postcode specificity.
///
/// Implement this for your own rate row type to rank it directly. Each
/// accessor must apply the defaults for missing data: an empty method,
/// `"*"` for a missing pattern, and `0.0` for a missing or non-numeric
/// condition value.
///
/// # Examples
///
/// ```
/// use postcode_priority::selection::RateCandidate;
///
/// struct Row {
///     method: String,
///     zip: String,
///     weight_from: f64,
/// }
///
/// impl RateCandidate for Row {
///     fn shipping_method(&self) -> &str { &self.method }
///     fn dest_zip(&self) -> &str { &self.zip }
///     fn condition_from_value(&self) -> f64 { self.weight_from }
/// }
/// ```
pub trait RateCandidate: Send + Sync {
    /// Identifier used to group rates in best-per-method selection.
    fn shipping_method(&self) -> &str;

    /// Postcode pattern this rate was matched with.
    fn dest_zip(&self) -> &str;

    /// Numeric tie-breaker; higher sorts first among equally specific rates.
    fn condition_from_value(&self) -> f64;
}

impl<T: RateCandidate + ?Sized> RateCandidate for &T {
    fn shipping_method(&self) -> &str {
        (**self).shipping_method()
    }

    fn dest_zip(&self) -> &str {
        (**self).dest_zip()
    }

    fn condition_from_value(&self) -> f64 {
        (**self).condition_from_value()
    }
}

/// A loosely typed column value, as host rate tables deliver them.
///
/// Deserializes from a JSON/JS string, number, boolean or null and
/// serializes back to the same kind, so pass-through columns survive
/// ranking unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Returns the string contents of a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric reading of the value, if there is one.
    ///
    /// Text is read like a database cast: leading whitespace is skipped and
    /// the longest leading decimal number is used, so `"10kg"` reads as
    /// `10` and `"1,5"` as `1`. Text without a leading number, booleans
    /// and null have no numeric reading.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Text(s) => leading_number(s),
            FieldValue::Null | FieldValue::Bool(_) => None,
        }
    }
}

impl PartialEq<&str> for FieldValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

/// Parses the longest leading decimal number of `s`.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();

    let mut end = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let int_start = end;
    while end < b.len() && b[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < b.len() && b[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            end = j;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < b.len() && matches!(b[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < b.len() && matches!(b[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse().ok()
}

/// Reads a raw condition value, falling back to `0.0`.
///
/// Missing values, values with no numeric reading (see
/// [`FieldValue::to_f64`]) and NaN or infinite results all become `0.0`.
pub fn parse_condition_value(raw: Option<&FieldValue>) -> f64 {
    raw.and_then(FieldValue::to_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// A rate row as delivered by a rate-table lookup.
///
/// The condition value and extra columns keep whatever type they arrived
/// with, so the record passes through ranking exactly as it came in.
/// Columns other than the three ranked ones live in `extra` and are never
/// inspected.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateRecord {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub shipping_method: Option<String>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub dest_zip: Option<String>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub condition_from_value: Option<FieldValue>,

    /// Every other column, untouched.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: BTreeMap<String, FieldValue>,
}

impl RateRecord {
    /// Creates a record with a method and postcode pattern.
    pub fn new(shipping_method: impl Into<String>, dest_zip: impl Into<String>) -> Self {
        Self {
            shipping_method: Some(shipping_method.into()),
            dest_zip: Some(dest_zip.into()),
            ..Self::default()
        }
    }

    pub fn with_shipping_method(mut self, method: impl Into<String>) -> Self {
        self.shipping_method = Some(method.into());
        self
    }

    pub fn with_dest_zip(mut self, zip: impl Into<String>) -> Self {
        self.dest_zip = Some(zip.into());
        self
    }

    pub fn with_condition_from_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.condition_from_value = Some(value.into());
        self
    }

    /// Adds a pass-through column.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl RateCandidate for RateRecord {
    fn shipping_method(&self) -> &str {
        self.shipping_method.as_deref().unwrap_or("")
    }

    fn dest_zip(&self) -> &str {
        self.dest_zip.as_deref().unwrap_or("*")
    }

    fn condition_from_value(&self) -> f64 {
        parse_condition_value(self.condition_from_value.as_ref())
    }
}
