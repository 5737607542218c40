//! Alias-based field extraction.
//!
//! The first stage of the projection pipeline: resolve a declared alias on a
//! record and reduce whatever it holds to a plain value. Graph entities are
//! reduced to their property bags; projection values pass through untouched.

use crate::errors::ProjectionError;
use crate::record::{FieldValue, Record};
use crate::value::PlainValue;

/// Extract the value behind `alias` from `record`.
///
/// - A `Node` yields only its property bag; labels and identity are
///   discarded.
/// - A `Relationship` is treated structurally like a node and yields its
///   property bag.
/// - A `Projection` (scalar, array, or aggregate collection) is returned
///   unchanged; no property extraction is attempted.
///
/// A missing alias is a hard error, never a silent default.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use boltmap::{extract, FieldValue, Node, PlainValue, Record};
///
/// let node = Node::new(
///     0,
///     vec!["Movie".to_string()],
///     HashMap::from([("Title".to_string(), PlainValue::from("The Matrix"))]),
///     "Movie:0".to_string(),
/// );
/// let record = Record::new([("m".to_string(), FieldValue::Node(node))]);
///
/// let value = extract("m", &record).unwrap();
/// assert!(value.is_object());
/// ```
pub fn extract(alias: &str, record: &Record) -> Result<PlainValue, ProjectionError> {
    let field = record
        .get(alias)
        .ok_or_else(|| ProjectionError::MissingAlias(alias.to_string()))?;

    Ok(match field {
        FieldValue::Node(node) => PlainValue::Object(node.properties.clone()),
        FieldValue::Relationship(rel) => PlainValue::Object(rel.properties.clone()),
        FieldValue::Projection(value) => value.clone(),
    })
}
