use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ValidateError;

/// Top-level metadata fields surfaced in debug logs
#[derive(Debug, Default, Deserialize)]
struct DocumentMetadata {
    openapi: Option<String>,
    info: Option<InfoBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct InfoBlock {
    title: Option<String>,
}

/// A description document loaded from disk: the parsed tree plus the raw
/// source it was parsed from.
///
/// Both representations stay around for the length of a run. Declared
/// schemas come from the tree; reference detection runs over the raw text,
/// because references can appear in places a structural walk would not
/// visit verbatim (comments, descriptions, folded scalars).
pub struct LoadedDocument {
    pub document: Value,
    pub raw: String,
}

/// Read and parse a description document.
///
/// YAML is a superset of JSON, so `.json` documents come through the same
/// path without a format flag.
pub fn load_document(path: &Path) -> Result<LoadedDocument, ValidateError> {
    let raw = fs::read_to_string(path).map_err(|source| ValidateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value =
        serde_yaml::from_str(&raw).map_err(|source| ValidateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if let Ok(metadata) = serde_json::from_value::<DocumentMetadata>(document.clone()) {
        debug!(
            "loaded {} (openapi: {}, title: {})",
            path.display(),
            metadata.openapi.as_deref().unwrap_or("unspecified"),
            metadata
                .info
                .and_then(|info| info.title)
                .as_deref()
                .unwrap_or("untitled"),
        );
    }

    Ok(LoadedDocument { document, raw })
}
