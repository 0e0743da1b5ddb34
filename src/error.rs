use std::path::PathBuf;

use thiserror::Error;

/// Everything that can end a validation run early.
///
/// `MissingSchemas` is the one expected failure: the document is well-formed
/// but references schemas it never declares. The other variants propagate to
/// the caller unchanged.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("missing required key: {key}")]
    Structure { key: String },

    #[error("Missing schemas: {}", .names.join(", "))]
    MissingSchemas { names: Vec<String> },
}
