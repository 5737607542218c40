//! Property-key casing.
//!
//! Property names coming out of the graph store are PascalCase, often with an
//! `ID` suffix (`UserID`, `ApiID`). Naive first-letter lowercasing mishandles
//! that suffix, so [`camel_case`] special-cases trailing `ID` before the
//! generic conversion, while leaving all-caps acronyms like `COVID` alone.

/// Convert a property key to camelCase.
///
/// Two special rules run before the generic conversion:
///
/// 1. The exact key `"ID"` becomes `"id"`.
/// 2. A key ending in `"ID"` whose preceding character is not uppercase
///    (i.e. `ID` terminates a word rather than continuing an acronym) has the
///    suffix rewritten to `"Id"` first.
///
/// The generic conversion lowercases only the first character. Total on any
/// string; the empty string maps to itself.
///
/// # Examples
///
/// ```
/// use boltmap::camel_case;
///
/// assert_eq!(camel_case("Name"), "name");
/// assert_eq!(camel_case("ID"), "id");
/// assert_eq!(camel_case("ApiID"), "apiId");
/// assert_eq!(camel_case("COVID"), "cOVID"); // acronym, suffix rule does not fire
/// ```
pub fn camel_case(key: &str) -> String {
    if key == "ID" {
        return "id".to_string();
    }

    let recased = match key.strip_suffix("ID") {
        Some(stem) if stem.chars().last().is_some_and(|c| !c.is_uppercase()) => {
            format!("{stem}Id")
        }
        _ => key.to_string(),
    };

    lowercase_first(&recased)
}

/// Lowercase only the first character, leaving the rest unchanged.
fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
