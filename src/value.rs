//! Category-dispatched value conversion and literal rendering.
//!
//! Conversion is a pure, stateless mapping and favors silent degradation
//! over failure: an unparsable number or color degrades to a `null`-rendering
//! sentinel rather than an error. Language values never pass through here;
//! they are serialized as-is by the data emitter.

use crate::categories::Category;

/// Largest float magnitude rendered as a plain integer literal.
/// Matches the safe-integer range of a JSON consumer's double.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// A resource value after category dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceValue {
    /// VALUE / DIMENSION — parsed float; NaN when the raw value is unparsable.
    Number(f64),
    /// COLOR — base-16 parsed integer; `None` when unparsable.
    Color(Option<u32>),
    /// Everything else — the raw value passed through unchanged.
    Text(String),
}

/// Convert a raw resource value into its category's typed representation.
pub fn convert(raw: &str, category: Category) -> ResourceValue {
    match category {
        Category::Value | Category::Dimension => {
            ResourceValue::Number(raw.trim().parse().unwrap_or(f64::NAN))
        }
        Category::Color => ResourceValue::Color(parse_hex(raw)),
        Category::Text | Category::Language => ResourceValue::Text(raw.to_string()),
    }
}

fn parse_hex(raw: &str) -> Option<u32> {
    let digits = raw.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    u32::from_str_radix(digits, 16).ok()
}

impl ResourceValue {
    /// Render the value as a JSON-compatible literal for the data table.
    ///
    /// Failed parses render `null`; integral floats render without a
    /// fractional part (`2`, not `2.0`); strings are escaped and quoted.
    pub fn to_literal(&self) -> String {
        match self {
            ResourceValue::Number(n) => number_literal(*n),
            ResourceValue::Color(Some(c)) => c.to_string(),
            ResourceValue::Color(None) => "null".to_string(),
            ResourceValue::Text(s) => json_string(s),
        }
    }
}

/// Render a float the way a JSON emitter would.
fn number_literal(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return format!("{}", n as i64);
    }
    format!("{}", n)
}

/// JSON-escape and double-quote a string.
pub(crate) fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
