//! Query-text pagination helper.

/// Append `SKIP`/`LIMIT` clauses for the given 1-based page to a query.
///
/// The original query text is kept verbatim; `SKIP (page - 1) * limit` and
/// `LIMIT limit` are appended after it.
///
/// Preconditions, documented but not validated: `page >= 1` and `limit >= 1`.
/// Zero or negative values produce a syntactically valid but semantically
/// nonsensical clause; guarding against that is the caller's responsibility.
///
/// # Example
///
/// ```
/// use boltmap::with_pagination;
///
/// assert_eq!(
///     with_pagination(2, 10, "MATCH (n) RETURN n"),
///     "MATCH (n) RETURN n SKIP 10 LIMIT 10"
/// );
/// ```
pub fn with_pagination(page: i64, limit: i64, query: &str) -> String {
    format!("{} SKIP {} LIMIT {}", query, (page - 1) * limit, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_skips_nothing() {
        assert_eq!(
            with_pagination(1, 25, "MATCH (m:Movie) RETURN m"),
            "MATCH (m:Movie) RETURN m SKIP 0 LIMIT 25"
        );
    }

    #[test]
    fn test_original_text_is_unchanged() {
        let query = "MATCH (p:Person)-[r:DIRECTED]->(m:Movie) RETURN m,p";
        let paged = with_pagination(2, 10, query);
        assert!(paged.starts_with(query));
        assert!(paged.ends_with("SKIP 10 LIMIT 10"));
    }

    #[test]
    fn test_out_of_contract_values_still_format() {
        // caller responsibility; no panic, no validation
        assert_eq!(with_pagination(0, 10, "Q"), "Q SKIP -10 LIMIT 10");
    }
}
