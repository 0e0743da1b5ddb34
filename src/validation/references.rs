use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// A schema pointer as it appears anywhere in a description document, e.g.
/// `#/components/schemas/User`. Only the trailing identifier is captured.
static SCHEMA_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#/components/schemas/([A-Za-z0-9_]+)").expect("valid pattern"));

/// Scan raw document text for schema references.
///
/// Returns the captured names in first-occurrence order with duplicates
/// removed. The scan is deliberately context-free: a pointer inside a
/// description field or a comment counts the same as one inside a `$ref`.
pub fn extract_references(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for capture in SCHEMA_REF.captures_iter(raw) {
        let name = &capture[1];
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    names
}
