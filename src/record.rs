//! Query result records and the graph objects they carry.
//!
//! A [`Record`] is one row of a query result: a set of field values keyed by
//! the aliases the query declared. Each field is a [`FieldValue`]: a node, a
//! relationship, or a bare projection value. The engine only ever reads
//! records; construction happens in the (external) driver layer that
//! materializes the result set.

use std::collections::HashMap;

use serde::Serialize;

use crate::value::PlainValue;

/// A graph node: labels plus a property bag.
///
/// The identity fields (`id`, `element_id`) and labels ride along from the
/// driver but are discarded when the node is extracted for projection; only
/// the property bag survives into the emitted object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Legacy integer ID assigned by the store.
    pub id: i64,
    /// Node labels (e.g., `["Person"]`).
    pub labels: Vec<String>,
    /// Property bag, keyed by the store's property names.
    pub properties: HashMap<String, PlainValue>,
    /// String-based element ID.
    pub element_id: String,
}

impl Node {
    /// Create a new `Node`.
    pub fn new(
        id: i64,
        labels: Vec<String>,
        properties: HashMap<String, PlainValue>,
        element_id: String,
    ) -> Self {
        Node {
            id,
            labels,
            properties,
            element_id,
        }
    }
}

/// A graph relationship: a type name plus a property bag.
///
/// Structurally node-like for projection purposes: extraction reduces a
/// relationship to its property bag the same way it reduces a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationship {
    /// Legacy integer ID assigned by the store.
    pub id: i64,
    /// Legacy start node ID.
    pub start_node_id: i64,
    /// Legacy end node ID.
    pub end_node_id: i64,
    /// Relationship type (e.g., `"DIRECTED"`).
    pub rel_type: String,
    /// Property bag, keyed by the store's property names.
    pub properties: HashMap<String, PlainValue>,
    /// String-based element ID.
    pub element_id: String,
}

impl Relationship {
    /// Create a new `Relationship`.
    pub fn new(
        id: i64,
        start_node_id: i64,
        end_node_id: i64,
        rel_type: String,
        properties: HashMap<String, PlainValue>,
        element_id: String,
    ) -> Self {
        Relationship {
            id,
            start_node_id,
            end_node_id,
            rel_type,
            properties,
            element_id,
        }
    }
}

/// One field of a record, discriminated by what the query clause returned.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A whole node entity.
    Node(Node),
    /// A whole relationship entity.
    Relationship(Relationship),
    /// Any non-graph-element value returned directly by a query clause:
    /// a scalar, an array, or an aggregate collection.
    Projection(PlainValue),
}

impl FieldValue {
    /// Whether this field holds a node.
    pub fn is_node(&self) -> bool {
        matches!(self, FieldValue::Node(_))
    }

    /// Whether this field holds a relationship.
    pub fn is_relationship(&self) -> bool {
        matches!(self, FieldValue::Relationship(_))
    }

    /// Whether this field holds a bare projection value.
    pub fn is_projection(&self) -> bool {
        matches!(self, FieldValue::Projection(_))
    }
}

/// One row of a query result, exposing field values by declared alias.
///
/// Records are read-only once built: the projection engine never mutates one
/// and never retains one past the end of its own mapping call.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Declared aliases, in query order.
    keys: Vec<String>,
    /// Field values keyed by alias.
    fields: HashMap<String, FieldValue>,
}

impl Record {
    /// Build a record from `(alias, value)` entries.
    ///
    /// A duplicate alias overwrites the earlier value; the alias keeps its
    /// first position in [`Record::keys`].
    pub fn new(entries: impl IntoIterator<Item = (String, FieldValue)>) -> Self {
        let mut keys = Vec::new();
        let mut fields = HashMap::new();
        for (alias, value) in entries {
            if fields.insert(alias.clone(), value).is_none() {
                keys.push(alias);
            }
        }
        Record { keys, fields }
    }

    /// Look up a field by alias.
    pub fn get(&self, alias: &str) -> Option<&FieldValue> {
        self.fields.get(alias)
    }

    /// Whether the record carries the given alias.
    pub fn contains_alias(&self, alias: &str) -> bool {
        self.fields.contains_key(alias)
    }

    /// Declared aliases, in query order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Bulk view of all fields, in declared alias order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.keys
            .iter()
            .filter_map(|alias| Some((alias.as_str(), self.fields.get(alias)?)))
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::GraphInt;
    use serde_json::json;

    fn person_node() -> Node {
        Node::new(
            6,
            vec!["Person".to_string()],
            HashMap::from([
                ("Name".to_string(), PlainValue::from("Lana Wachowski")),
                ("Born".to_string(), PlainValue::from(1965i64)),
            ]),
            "Person:6".to_string(),
        )
    }

    #[test]
    fn test_record_lookup_by_alias() {
        let record = Record::new([
            ("p".to_string(), FieldValue::Node(person_node())),
            (
                "total".to_string(),
                FieldValue::Projection(PlainValue::from(2i64)),
            ),
        ]);

        assert!(record.contains_alias("p"));
        assert!(record.get("p").is_some_and(FieldValue::is_node));
        assert!(record.get("total").is_some_and(FieldValue::is_projection));
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn test_entries_preserve_declared_order() {
        let record = Record::new([
            ("m".to_string(), FieldValue::Projection(PlainValue::Null)),
            ("p".to_string(), FieldValue::Node(person_node())),
        ]);

        let aliases: Vec<&str> = record.entries().map(|(alias, _)| alias).collect();
        assert_eq!(aliases, vec!["m", "p"]);
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_duplicate_alias_last_value_wins() {
        let record = Record::new([
            ("n".to_string(), FieldValue::Projection(PlainValue::from(1i64))),
            ("n".to_string(), FieldValue::Projection(PlainValue::from(2i64))),
        ]);

        assert_eq!(record.len(), 1);
        assert_eq!(
            record.get("n"),
            Some(&FieldValue::Projection(PlainValue::Int(GraphInt::from_i64(2))))
        );
    }

    #[test]
    fn test_node_serializes_with_decimal_string_integers() {
        let node = Node::new(
            0,
            vec!["Person".to_string()],
            HashMap::from([("Born".to_string(), PlainValue::from(1965i64))]),
            "Person:0".to_string(),
        );

        let serialized = serde_json::to_value(&node).unwrap();
        assert_eq!(serialized["properties"]["Born"], json!("1965"));
        assert_eq!(serialized["labels"], json!(["Person"]));
    }
}
