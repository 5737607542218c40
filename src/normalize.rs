//! Recursive JSON normalization.
//!
//! The last stage of the projection pipeline: take a plain value assembled
//! from a record and render it JSON-safe. Two things change on the way
//! through: every mapping key is camelCased, and every driver integer is
//! stringified. Everything else is preserved exactly.
//!
//! Driver integers can exceed the safe integer range of downstream JSON
//! consumers, so instead of destroying them they are rendered to their exact
//! decimal strings.

use serde_json::Value;

use crate::casing::camel_case;
use crate::value::PlainValue;

/// Normalize a value into a JSON-safe `serde_json::Value`.
///
/// Dispatches exhaustively on the value shape:
///
/// - a driver integer becomes its decimal-string rendering,
/// - a mapping is rebuilt with every key camelCased and every value
///   normalized recursively,
/// - an array is rebuilt with every element normalized recursively,
/// - all other scalars pass through unchanged.
///
/// Normalization is idempotent over JSON-safe input: feeding a normalized
/// value back through (via `PlainValue::from`) returns it unchanged. Always
/// terminates, since record values are tree-shaped.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use boltmap::{normalize, PlainValue};
/// use serde_json::json;
///
/// let value = PlainValue::Object(HashMap::from([
///     ("Name".to_string(), PlainValue::from("Some Name")),
///     ("Score".to_string(), PlainValue::from(20i64)),
/// ]));
///
/// let normalized = normalize(value);
/// assert_eq!(normalized["name"], json!("Some Name"));
/// assert_eq!(normalized["score"], json!("20"));
/// ```
pub fn normalize(value: PlainValue) -> Value {
    match value {
        PlainValue::Null => Value::Null,
        PlainValue::Bool(b) => Value::Bool(b),
        PlainValue::Int(int) => Value::String(int.to_decimal_string()),
        PlainValue::Number(n) => Value::Number(n),
        PlainValue::String(s) => Value::String(s),
        PlainValue::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        PlainValue::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (camel_case(&key), normalize(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::GraphInt;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(normalize(PlainValue::Null), Value::Null);
        assert_eq!(normalize(PlainValue::from(true)), json!(true));
        assert_eq!(normalize(PlainValue::from("text")), json!("text"));
        assert_eq!(normalize(PlainValue::Number(7.into())), json!(7));
    }

    #[test]
    fn test_integer_stringified_exactly() {
        let big = GraphInt::from_i64(9_007_199_254_740_993);
        assert_eq!(
            normalize(PlainValue::Int(big)),
            json!("9007199254740993")
        );
        assert_eq!(
            normalize(PlainValue::from(-3i64)),
            json!("-3")
        );
    }

    #[test]
    fn test_nested_keys_camel_cased() {
        let value = PlainValue::Object(HashMap::from([(
            "SubField".to_string(),
            PlainValue::Object(HashMap::from([(
                "SubName".to_string(),
                PlainValue::from("Sub Name"),
            )])),
        )]));

        assert_eq!(
            normalize(value),
            json!({"subField": {"subName": "Sub Name"}})
        );
    }

    #[test]
    fn test_array_elements_normalized_recursively() {
        let value = PlainValue::Array(vec![
            PlainValue::from(1i64),
            PlainValue::Object(HashMap::from([(
                "ApiID".to_string(),
                PlainValue::from(2i64),
            )])),
            PlainValue::Array(vec![PlainValue::from("x")]),
        ]);

        assert_eq!(
            normalize(value),
            json!(["1", {"apiId": "2"}, ["x"]])
        );
    }

    #[test]
    fn test_idempotent_over_json_safe_values() {
        let value = PlainValue::Object(HashMap::from([
            ("Name".to_string(), PlainValue::from("Ahmet")),
            ("Score".to_string(), PlainValue::from(20i64)),
            (
                "Tags".to_string(),
                PlainValue::Array(vec![PlainValue::from("a"), PlainValue::from("b")]),
            ),
        ]));

        let once = normalize(value);
        let twice = normalize(PlainValue::from(once.clone()));
        assert_eq!(once, twice);
    }
}
