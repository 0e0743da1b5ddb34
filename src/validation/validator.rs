use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::ValidateError;
use crate::loader;

use super::references;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Entries under the top-level `paths` mapping.
    pub paths: usize,
    /// Entries under `components.schemas`.
    pub schemas: usize,
    /// Distinct schema references found in the raw text.
    pub refs: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OK: paths={} schemas={} refs={}",
            self.paths, self.schemas, self.refs
        )
    }
}

#[derive(Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Check that every schema referenced anywhere in the document is
    /// declared under `components.schemas`.
    ///
    /// Pure with respect to the file contents: rerunning on an unchanged
    /// file yields the same result.
    pub fn validate(&self, spec_path: &Path) -> Result<Summary, ValidateError> {
        let loaded = loader::load_document(spec_path)?;

        let paths = require_mapping(&loaded.document, "paths")?;
        let components = require_mapping(&loaded.document, "components")?;
        let schemas = match components.get("schemas") {
            Some(Value::Object(map)) => map,
            _ => {
                return Err(ValidateError::Structure {
                    key: "components.schemas".to_string(),
                });
            }
        };

        let referenced = references::extract_references(&loaded.raw);
        debug!(
            "found {} distinct schema references in {}",
            referenced.len(),
            spec_path.display()
        );

        // First-occurrence order carries through so the diagnostic is
        // deterministic regardless of key order in the document.
        let missing: Vec<String> = referenced
            .iter()
            .filter(|name| !schemas.contains_key(name.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Err(ValidateError::MissingSchemas { names: missing });
        }

        let summary = Summary {
            paths: paths.len(),
            schemas: schemas.len(),
            refs: referenced.len(),
        };
        info!("✓ All schema references resolved: {}", spec_path.display());
        Ok(summary)
    }
}

fn require_mapping<'a>(
    document: &'a Value,
    key: &str,
) -> Result<&'a Map<String, Value>, ValidateError> {
    match document.get(key) {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(ValidateError::Structure {
            key: key.to_string(),
        }),
    }
}
