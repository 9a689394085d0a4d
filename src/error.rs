//! Error taxonomy for the report pipeline.
//!
//! Every error except `MissingInput` names the result document it belongs to,
//! so a caller processing a batch can report the failure and move on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The document is not valid JSON, or does not deserialize into the
    /// expected feature/element/step layout.
    #[error("failed to parse {document}: {source}")]
    Parse {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but violates the minimal shape.
    #[error("invalid result document {document}: {reason}")]
    Shape { document: String, reason: String },

    #[error("failed to write {} for {document}: {source}", .path.display())]
    Io {
        document: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no results found")]
    MissingInput,
}

/// Coarse classification of a `ReportError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Io,
    MissingInput,
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::Parse { .. } | ReportError::Shape { .. } => ErrorKind::Parse,
            ReportError::Io { .. } => ErrorKind::Io,
            ReportError::MissingInput => ErrorKind::MissingInput,
        }
    }

    /// Identity of the offending result document, if there is one
    pub fn document(&self) -> Option<&str> {
        match self {
            ReportError::Parse { document, .. }
            | ReportError::Shape { document, .. }
            | ReportError::Io { document, .. } => Some(document),
            ReportError::MissingInput => None,
        }
    }
}
