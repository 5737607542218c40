//! boltmap - Graph query result projection
//!
//! This crate converts raw graph-query result records (driver-native rows
//! carrying nodes, relationships, and scalar projections) into plain,
//! JSON-safe, camelCase-keyed objects through:
//! - Alias-based extraction of nodes and relationships from a record
//! - Arbitrary-precision-integer normalization (exact decimal strings)
//! - Recursive key-casing normalization
//! - A composable relation-mapper algebra for attaching related values
//! - A path-based field transformer for ad-hoc value coercions
//!
//! Establishing connections, running sessions, and the wire representation
//! of nodes and integers are external collaborators; the engine consumes an
//! already-materialized sequence of [`Record`]s and only ever reads them.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use boltmap::{map_relation, project_records, FieldValue, Node, PlainValue, Record};
//! use serde_json::json;
//!
//! let person = Node::new(
//!     6,
//!     vec!["Person".to_string()],
//!     HashMap::from([
//!         ("Name".to_string(), PlainValue::from("Ahmet")),
//!         ("Born".to_string(), PlainValue::from(1965i64)),
//!     ]),
//!     "Person:6".to_string(),
//! );
//! let movie = Node::new(
//!     0,
//!     vec!["Movie".to_string()],
//!     HashMap::from([("Title".to_string(), PlainValue::from("Top Gun"))]),
//!     "Movie:0".to_string(),
//! );
//! let record = Record::new([
//!     ("p".to_string(), FieldValue::Node(person)),
//!     ("m".to_string(), FieldValue::Node(movie)),
//! ]);
//!
//! let projected = project_records("p", &[record], &[map_relation("m", "movie")]).unwrap();
//! assert_eq!(
//!     projected,
//!     vec![json!({
//!         "name": "Ahmet",
//!         "born": "1965",
//!         "movie": {"title": "Top Gun"}
//!     })]
//! );
//! ```

pub mod casing;
pub mod errors;
pub mod extract;
pub mod mapping;
pub mod normalize;
pub mod pagination;
pub mod record;
pub mod value;

pub use casing::camel_case;
pub use errors::ProjectionError;
pub use extract::extract;
pub use mapping::{
    map_date_fields, map_fields, map_relation, project_records, project_records_with, FieldMap,
    RelationMap, ValueMapper,
};
pub use normalize::normalize;
pub use pagination::with_pagination;
pub use record::{FieldValue, Node, Record, Relationship};
pub use value::{GraphInt, PlainValue};
