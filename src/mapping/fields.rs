//! Path-based field transformation.
//!
//! [`FieldMap`] applies a caller-supplied transform at one or more dotted
//! field paths of an already-plain object, leaving every sibling field
//! untouched. It runs outside the main projection pipeline, as an ad-hoc
//! utility for domain-specific value coercions on normalized output.
//!
//! Path resolution walks one segment at a time. Whenever the value being
//! walked is an array, the remaining path suffix is applied independently to
//! every element, so `"cast.born"` reaches into each element of a `cast`
//! collection. A missing segment synthesizes an empty object rather than
//! failing.

use chrono::{LocalResult, SecondsFormat, TimeZone, Utc};
use serde_json::{Map, Value};

/// Ticks per millisecond in the store's native timestamp encoding (100 ns
/// units).
const TICKS_PER_MILLISECOND: i64 = 10_000;

/// Milliseconds between 0001-01-01 and 1970-01-01, the tick epoch offset.
const EPOCH_OFFSET_MILLIS: i64 = 62_135_596_800_000;

/// Applies a transform at dotted field paths of a plain object.
///
/// Built once via [`map_fields`] and reusable across values. Multiple paths
/// apply sequentially; each path sees the result of the previous one.
///
/// # Example
///
/// ```
/// use boltmap::map_fields;
/// use serde_json::json;
///
/// let doubled = map_fields(["nested.num"], |value| {
///     json!(value.and_then(|v| v.as_i64()).unwrap_or(0) * 2)
/// });
///
/// assert_eq!(
///     doubled.apply(json!({"nested": {"num": 21}, "other": true})),
///     json!({"nested": {"num": 42}, "other": true})
/// );
/// ```
pub struct FieldMap<F>
where
    F: Fn(Option<Value>) -> Value,
{
    paths: Vec<String>,
    transform: F,
}

/// Build a [`FieldMap`] over `paths` with `transform`.
///
/// The transform receives the existing value at each resolved path (`None`
/// when absent) and its result is written back in place.
pub fn map_fields<F>(
    paths: impl IntoIterator<Item = impl Into<String>>,
    transform: F,
) -> FieldMap<F>
where
    F: Fn(Option<Value>) -> Value,
{
    FieldMap {
        paths: paths.into_iter().map(Into::into).collect(),
        transform,
    }
}

impl<F> FieldMap<F>
where
    F: Fn(Option<Value>) -> Value,
{
    /// Apply the transform at every configured path of `value`.
    ///
    /// Sibling fields are preserved at every level; only the terminal values
    /// of the configured paths change.
    pub fn apply(&self, value: Value) -> Value {
        self.paths.iter().fold(value, |value, path| {
            let segments: Vec<&str> = path.split('.').collect();
            self.apply_path(value, &segments)
        })
    }

    fn apply_path(&self, value: Value, segments: &[&str]) -> Value {
        let Some((head, rest)) = segments.split_first() else {
            return value;
        };

        // An array at any depth fans the remaining suffix out over its
        // elements, each patched independently.
        if let Value::Array(items) = value {
            return Value::Array(
                items
                    .into_iter()
                    .map(|item| self.apply_path(item, segments))
                    .collect(),
            );
        }

        // A missing or non-object position synthesizes an empty object.
        let mut map = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        if rest.is_empty() {
            let existing = map.remove(*head);
            let replaced = (self.transform)(existing);
            map.insert((*head).to_string(), replaced);
        } else {
            let child = map.remove(*head).unwrap_or(Value::Object(Map::new()));
            let patched = self.apply_path(child, rest);
            map.insert((*head).to_string(), patched);
        }

        Value::Object(map)
    }
}

/// Build a [`FieldMap`] that decodes stored timestamps at `paths` into
/// RFC 3339 UTC date strings.
///
/// The store encodes timestamps as tick counts: 100 ns units since
/// 0001-01-01. Non-numeric or out-of-range values pass through unchanged; an
/// absent value decodes to `null`.
///
/// # Example
///
/// ```
/// use boltmap::map_date_fields;
/// use serde_json::json;
///
/// let decoded = map_date_fields(["createdAt"])
///     .apply(json!({"createdAt": 637_450_560_000_000_000i64}));
///
/// assert_eq!(decoded, json!({"createdAt": "2021-01-01T00:00:00Z"}));
/// ```
pub fn map_date_fields(
    paths: impl IntoIterator<Item = impl Into<String>>,
) -> FieldMap<impl Fn(Option<Value>) -> Value> {
    map_fields(paths, decode_tick_value)
}

fn decode_tick_value(value: Option<Value>) -> Value {
    let Some(value) = value else {
        return Value::Null;
    };
    let Some(ticks) = value.as_i64() else {
        return value;
    };

    let millis = ticks / TICKS_PER_MILLISECOND - EPOCH_OFFSET_MILLIS;
    match Utc.timestamp_millis_opt(millis) {
        LocalResult::Single(datetime) => {
            Value::String(datetime.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        _ => value,
    }
}
