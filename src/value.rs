//! Driver-side value model.
//!
//! Values arriving from the graph store are not yet JSON-safe: integer
//! properties come in as [`GraphInt`], the driver's arbitrary-precision
//! integer, and property keys still carry the store's PascalCase naming.
//! [`PlainValue`] is the explicit tagged union those values live in until the
//! normalizer (see [`crate::normalize`]) renders them to `serde_json::Value`.
//!
//! The union is closed: every value shape the record contract can deliver has
//! a variant here, so downstream matching is exhaustive and new shapes fail
//! to compile rather than falling through a default case.

use std::collections::HashMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Number, Value};

/// Arbitrary-precision integer as delivered by the graph driver.
///
/// The driver represents integers as a pair of 32-bit words; the numeric
/// value is `high * 2^32 + unsigned(low)`. The projection engine never does
/// arithmetic on these: a `GraphInt` is opaque and is only ever rendered to
/// its exact decimal string, which stays lossless even past the 2^53 safe
/// range of JSON consumers.
///
/// # Example
///
/// ```
/// use boltmap::GraphInt;
///
/// assert_eq!(GraphInt::new(0, 1).to_decimal_string(), "4294967296");
/// assert_eq!(GraphInt::from_i64(-42).to_decimal_string(), "-42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphInt {
    low: i32,
    high: i32,
}

impl GraphInt {
    /// Create a `GraphInt` from its low and high 32-bit words.
    pub fn new(low: i32, high: i32) -> Self {
        GraphInt { low, high }
    }

    /// Create a `GraphInt` holding the given native integer.
    pub fn from_i64(value: i64) -> Self {
        GraphInt {
            low: value as i32,
            high: (value >> 32) as i32,
        }
    }

    /// The numeric value. The low word is unsigned in the composition, so
    /// the full `i64` range round-trips through [`GraphInt::from_i64`].
    pub fn as_i64(&self) -> i64 {
        ((self.high as i64) << 32) | (self.low as u32 as i64)
    }

    /// Exact decimal rendering, the only JSON-safe form of this value.
    pub fn to_decimal_string(&self) -> String {
        self.as_i64().to_string()
    }

    /// The low 32-bit word.
    pub fn low(&self) -> i32 {
        self.low
    }

    /// The high 32-bit word.
    pub fn high(&self) -> i32 {
        self.high
    }
}

impl fmt::Display for GraphInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl Serialize for GraphInt {
    /// Serializes as the decimal string, the same policy the normalizer
    /// applies, so serde output never overflows a JSON consumer's integers.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

/// A value read from a query result before normalization.
///
/// `Int` holds driver integers; `Number` holds native JSON numbers that were
/// already safe when the record was materialized. Everything else mirrors the
/// JSON data model.
#[derive(Debug, Clone, PartialEq)]
pub enum PlainValue {
    Null,
    Bool(bool),
    /// Driver arbitrary-precision integer, rendered to a decimal string by
    /// the normalizer.
    Int(GraphInt),
    /// Native JSON number, passed through untouched.
    Number(Number),
    String(String),
    Array(Vec<PlainValue>),
    Object(HashMap<String, PlainValue>),
}

impl PlainValue {
    /// Whether this is a driver integer.
    pub fn is_int(&self) -> bool {
        matches!(self, PlainValue::Int(_))
    }

    /// Whether this is an object (a property bag or nested mapping).
    pub fn is_object(&self) -> bool {
        matches!(self, PlainValue::Object(_))
    }

    /// Whether this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, PlainValue::Array(_))
    }

    /// Whether this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, PlainValue::String(_))
    }

    /// Whether this value is nil or empty: `Null`, `""`, `[]`, or `{}`.
    ///
    /// # Example
    ///
    /// ```
    /// use boltmap::PlainValue;
    ///
    /// assert!(PlainValue::Null.is_nil_or_empty());
    /// assert!(PlainValue::Array(vec![]).is_nil_or_empty());
    /// assert!(!PlainValue::from(0i64).is_nil_or_empty());
    /// ```
    pub fn is_nil_or_empty(&self) -> bool {
        match self {
            PlainValue::Null => true,
            PlainValue::String(s) => s.is_empty(),
            PlainValue::Array(items) => items.is_empty(),
            PlainValue::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

impl From<GraphInt> for PlainValue {
    fn from(value: GraphInt) -> Self {
        PlainValue::Int(value)
    }
}

impl From<i64> for PlainValue {
    /// Integers entering through the record contract are driver integers.
    fn from(value: i64) -> Self {
        PlainValue::Int(GraphInt::from_i64(value))
    }
}

impl From<bool> for PlainValue {
    fn from(value: bool) -> Self {
        PlainValue::Bool(value)
    }
}

impl From<f64> for PlainValue {
    /// Non-finite floats have no JSON representation and map to `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(PlainValue::Null, PlainValue::Number)
    }
}

impl From<&str> for PlainValue {
    fn from(value: &str) -> Self {
        PlainValue::String(value.to_string())
    }
}

impl From<String> for PlainValue {
    fn from(value: String) -> Self {
        PlainValue::String(value)
    }
}

impl From<Value> for PlainValue {
    /// JSON-safe values embed without reinterpretation: numbers stay
    /// `Number`, never `Int`, so normalization of an already-normalized
    /// value is the identity.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PlainValue::Null,
            Value::Bool(b) => PlainValue::Bool(b),
            Value::Number(n) => PlainValue::Number(n),
            Value::String(s) => PlainValue::String(s),
            Value::Array(items) => {
                PlainValue::Array(items.into_iter().map(PlainValue::from).collect())
            }
            Value::Object(map) => PlainValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, PlainValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for PlainValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlainValue::Null => serializer.serialize_unit(),
            PlainValue::Bool(b) => serializer.serialize_bool(*b),
            PlainValue::Int(int) => int.serialize(serializer),
            PlainValue::Number(n) => n.serialize(serializer),
            PlainValue::String(s) => serializer.serialize_str(s),
            PlainValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            PlainValue::Object(map) => {
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    entries.serialize_entry(key, value)?;
                }
                entries.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_graph_int_word_composition() {
        // (low: 0, high: 1) is exactly 2^32
        assert_eq!(GraphInt::new(0, 1).as_i64(), 4_294_967_296);
        // negative low word is unsigned in the composition
        assert_eq!(GraphInt::new(-1, 0).as_i64(), 4_294_967_295);
        // negative high word carries the sign
        assert_eq!(GraphInt::new(-1, -1).as_i64(), -1);
    }

    #[test]
    fn test_graph_int_round_trips_i64() {
        for value in [0, 1, -1, i64::MAX, i64::MIN, 9_007_199_254_740_993] {
            assert_eq!(GraphInt::from_i64(value).as_i64(), value);
        }
    }

    #[test]
    fn test_decimal_string_exact_beyond_safe_range() {
        // 2^53 + 1 is not representable as an f64
        let int = GraphInt::from_i64(9_007_199_254_740_993);
        assert_eq!(int.to_decimal_string(), "9007199254740993");
    }

    #[test]
    fn test_graph_int_serializes_as_decimal_string() {
        let serialized = serde_json::to_value(GraphInt::from_i64(20)).unwrap();
        assert_eq!(serialized, json!("20"));
    }

    #[test]
    fn test_is_nil_or_empty() {
        assert!(PlainValue::Null.is_nil_or_empty());
        assert!(PlainValue::from("").is_nil_or_empty());
        assert!(PlainValue::Array(vec![]).is_nil_or_empty());
        assert!(PlainValue::Object(HashMap::new()).is_nil_or_empty());

        assert!(!PlainValue::from(0i64).is_nil_or_empty());
        assert!(!PlainValue::from(false).is_nil_or_empty());
        assert!(!PlainValue::Array(vec![PlainValue::Null]).is_nil_or_empty());
    }

    #[test]
    fn test_from_json_value_keeps_numbers_native() {
        let converted = PlainValue::from(json!({"count": 3}));
        let PlainValue::Object(map) = converted else {
            panic!("expected object");
        };
        assert_eq!(map["count"], PlainValue::Number(3.into()));
    }

    #[test]
    fn test_non_finite_float_maps_to_null() {
        assert_eq!(PlainValue::from(f64::NAN), PlainValue::Null);
        assert_eq!(PlainValue::from(f64::INFINITY), PlainValue::Null);
    }
}
