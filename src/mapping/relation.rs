//! Relation attachment algebra.
//!
//! A [`RelationMap`] describes how one related alias attaches onto the root
//! object being assembled for a record: which alias to resolve, which key to
//! place it under, an optional value mapper, and an optional rename. A
//! descriptor is built once per query shape and reused across every record of
//! that query's result set; it carries no per-record state.
//!
//! Descriptors compose left-to-right: each sees the same original record but
//! the progressively updated root object, so order only matters when two
//! descriptors target the same key (last writer wins).

use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::errors::ProjectionError;
use crate::extract::extract;
use crate::record::Record;
use crate::value::PlainValue;

/// A value mapper applied to a resolved relation value before attachment.
///
/// `Send + Sync` so a descriptor set can be shared across threads when a
/// caller parallelizes over records.
pub type ValueMapper = dyn Fn(PlainValue) -> PlainValue + Send + Sync;

/// Describes one relation attachment onto the root object.
///
/// The short form (alias and target key only) attaches the resolved value
/// as-is (identity mapper, no rename):
///
/// ```
/// use boltmap::map_relation;
///
/// let movie = map_relation("m", "movie");
/// ```
///
/// The full form adds a value mapper and a rename:
///
/// ```
/// use boltmap::map_relation;
///
/// let movie = map_relation("m", "movie")
///     .with_mapper(|value| value)
///     .renamed_to("directedMovie");
/// ```
pub struct RelationMap {
    alias: String,
    target_key: String,
    mapper: Option<Box<ValueMapper>>,
    rename_to: Option<String>,
}

/// Build a [`RelationMap`] for `alias`, attached under `target_key`.
pub fn map_relation(alias: impl Into<String>, target_key: impl Into<String>) -> RelationMap {
    RelationMap::new(alias, target_key)
}

impl RelationMap {
    /// Create a descriptor with the identity mapper and no rename.
    pub fn new(alias: impl Into<String>, target_key: impl Into<String>) -> Self {
        RelationMap {
            alias: alias.into(),
            target_key: target_key.into(),
            mapper: None,
            rename_to: None,
        }
    }

    /// Set the value mapper applied to the resolved value.
    ///
    /// When the resolved value is an array (a collection projection), the
    /// mapper is applied element-wise.
    pub fn with_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(PlainValue) -> PlainValue + Send + Sync + 'static,
    {
        self.mapper = Some(Box::new(mapper));
        self
    }

    /// Rename the target key after attachment.
    ///
    /// Rename-after-assoc semantics: the mapped value is placed under the
    /// target key first, then moved to `key`, removing the target key even
    /// when it already existed on the root. An empty `key` disables the
    /// rename.
    pub fn renamed_to(mut self, key: impl Into<String>) -> Self {
        self.rename_to = Some(key.into());
        self
    }

    /// The alias this descriptor resolves on each record.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The key the mapped value lands under (before any rename).
    pub fn target_key(&self) -> &str {
        &self.target_key
    }

    /// Attach this relation onto `root`, resolving the alias from `record`.
    ///
    /// A missing alias propagates as [`ProjectionError::MissingAlias`] and
    /// aborts the whole record's mapping; no partial relation output.
    ///
    /// A non-object root is promoted to an object holding only the attached
    /// keys (object-spread behavior; attaching to a scalar root discards the
    /// scalar).
    pub fn attach(&self, record: &Record, root: PlainValue) -> Result<PlainValue, ProjectionError> {
        let resolved = extract(&self.alias, record)?;
        trace!(
            "attaching alias '{}' under key '{}'",
            self.alias,
            self.target_key
        );

        let mapped = match resolved {
            PlainValue::Array(items) => {
                PlainValue::Array(items.into_iter().map(|item| self.map_value(item)).collect())
            }
            value => self.map_value(value),
        };

        let mut fields = match root {
            PlainValue::Object(map) => map,
            _ => HashMap::new(),
        };
        fields.insert(self.target_key.clone(), mapped);

        if let Some(new_key) = self.rename_to.as_deref().filter(|key| !key.is_empty()) {
            if let Some(value) = fields.remove(&self.target_key) {
                fields.insert(new_key.to_string(), value);
            }
        }

        Ok(PlainValue::Object(fields))
    }

    fn map_value(&self, value: PlainValue) -> PlainValue {
        match &self.mapper {
            Some(mapper) => mapper(value),
            None => value,
        }
    }
}

impl fmt::Debug for RelationMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationMap")
            .field("alias", &self.alias)
            .field("target_key", &self.target_key)
            .field("has_mapper", &self.mapper.is_some())
            .field("rename_to", &self.rename_to)
            .finish()
    }
}
