//! The record-to-object projection pipeline.
//!
//! Per record: extract the root alias, attach each declared relation
//! left-to-right, then normalize (camelCased keys, stringified driver
//! integers) into the emitted `serde_json::Value`.
//!
//! Records are processed independently with no cross-record state, so a
//! caller is free to split a result set and project its chunks in parallel.

pub mod fields;
pub mod relation;

pub use fields::{map_date_fields, map_fields, FieldMap};
pub use relation::{map_relation, RelationMap, ValueMapper};

use log::debug;
use serde_json::Value;

use crate::errors::ProjectionError;
use crate::extract::extract;
use crate::normalize::normalize;
use crate::record::Record;
use crate::value::PlainValue;

/// Project a result set into plain, JSON-safe objects.
///
/// For each record the root alias is extracted (a node's property bag, or a
/// projection value as-is), every [`RelationMap`] in `relations` is attached
/// in order, and the assembled root object is normalized. Pass an empty
/// `relations` slice when the query returns only the root alias.
///
/// A missing alias, root or relation, fails that record's projection, and
/// with it the whole batch result; nothing is silently skipped.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use boltmap::{map_relation, project_records, FieldValue, Node, PlainValue, Record};
/// use serde_json::json;
///
/// let person = Node::new(
///     0,
///     vec!["Person".to_string()],
///     HashMap::from([("Name".to_string(), PlainValue::from("Ahmet"))]),
///     "Person:0".to_string(),
/// );
/// let record = Record::new([("p".to_string(), FieldValue::Node(person))]);
///
/// let projected = project_records("p", &[record], &[]).unwrap();
/// assert_eq!(projected, vec![json!({"name": "Ahmet"})]);
/// ```
pub fn project_records(
    root_alias: &str,
    records: &[Record],
    relations: &[RelationMap],
) -> Result<Vec<Value>, ProjectionError> {
    project_records_with(root_alias, |root| root, records, relations)
}

/// Project a result set with a caller-supplied root mapper.
///
/// Like [`project_records`], but `root_mapper` transforms the extracted root
/// value before any relation attaches, for reshaping the root itself rather
/// than a related value.
pub fn project_records_with<F>(
    root_alias: &str,
    root_mapper: F,
    records: &[Record],
    relations: &[RelationMap],
) -> Result<Vec<Value>, ProjectionError>
where
    F: Fn(PlainValue) -> PlainValue,
{
    debug!(
        "projecting {} record(s) rooted at alias '{}' with {} relation(s)",
        records.len(),
        root_alias,
        relations.len()
    );

    records
        .iter()
        .map(|record| project_record(root_alias, &root_mapper, record, relations))
        .collect()
}

fn project_record<F>(
    root_alias: &str,
    root_mapper: &F,
    record: &Record,
    relations: &[RelationMap],
) -> Result<Value, ProjectionError>
where
    F: Fn(PlainValue) -> PlainValue,
{
    let mut root = root_mapper(extract(root_alias, record)?);
    for relation in relations {
        root = relation.attach(record, root)?;
    }
    Ok(normalize(root))
}
