use std::{fmt, io, path::PathBuf};

use mstbench_core::{GraphError, GraphErrorCode};
use thiserror::Error;

/// Errors raised while reading graph documents or writing reports.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum JsonProviderError {
    /// A file could not be opened or created.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing to an output stream failed.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    /// The document was not valid JSON or did not match the expected shape.
    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),
    /// A graph in the document failed validation.
    #[error("graph {graph_id} is invalid: {source}")]
    InvalidGraph {
        /// Identifier of the offending graph.
        graph_id: u32,
        /// Validation failure reported by the core.
        #[source]
        source: GraphError,
    },
}

/// Stable codes describing [`JsonProviderError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum JsonProviderErrorCode {
    /// A file could not be opened or created.
    Io,
    /// Writing to an output stream failed.
    Write,
    /// The document was not valid JSON.
    Json,
    /// A graph in the document failed validation.
    InvalidGraph,
}

impl JsonProviderErrorCode {
    /// Return the stable machine-readable representation of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "JSON_PROVIDER_IO",
            Self::Write => "JSON_PROVIDER_WRITE",
            Self::Json => "JSON_PROVIDER_MALFORMED",
            Self::InvalidGraph => "JSON_PROVIDER_INVALID_GRAPH",
        }
    }
}

impl fmt::Display for JsonProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonProviderError {
    /// Retrieve the stable [`JsonProviderErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> JsonProviderErrorCode {
        match self {
            Self::Io { .. } => JsonProviderErrorCode::Io,
            Self::Write(_) => JsonProviderErrorCode::Write,
            Self::Json(_) => JsonProviderErrorCode::Json,
            Self::InvalidGraph { .. } => JsonProviderErrorCode::InvalidGraph,
        }
    }

    /// Retrieve the core [`GraphErrorCode`] when a graph failed validation.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::InvalidGraph { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}
