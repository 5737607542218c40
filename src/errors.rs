use thiserror::Error;

/// Errors raised while projecting query result records.
///
/// The core is a set of pure transformations over already-materialized data,
/// so the only runtime failure mode is a declared alias that the record does
/// not carry. A missing alias fails the whole record's projection; it is
/// never silently defaulted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectionError {
    #[error("Alias '{0}' is not present in the record")]
    MissingAlias(String),
}
