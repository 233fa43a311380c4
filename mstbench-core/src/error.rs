//! Error types for the mstbench core library.
//!
//! Defines the error enums exposed by the public API together with stable,
//! machine-readable codes for logging surfaces.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing or mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The same vertex label appeared more than once.
    #[error("vertex `{vertex}` is listed more than once")]
    DuplicateVertex {
        /// The repeated vertex label.
        vertex: String,
    },
    /// An edge referenced a vertex that is not part of the graph.
    #[error("invalid edge endpoint: edge {edge_index} references unknown vertex `{vertex}`")]
    InvalidEdgeEndpoint {
        /// Position of the offending edge in the edge sequence.
        edge_index: usize,
        /// The unknown vertex label.
        vertex: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The same vertex label appeared more than once.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// An edge referenced a vertex that is not part of the graph.
        InvalidEdgeEndpoint => InvalidEdgeEndpoint { .. } => "GRAPH_INVALID_EDGE_ENDPOINT",
    }
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// `find` or `union` was called on a vertex never passed to `make_set`.
    #[error("unregistered vertex `{vertex}`")]
    UnregisteredVertex {
        /// Label of the vertex that was not registered.
        vertex: String,
    },
    /// `make_set` was called twice for the same vertex.
    #[error("vertex `{vertex}` is already registered")]
    AlreadyRegistered {
        /// Label of the vertex that was registered twice.
        vertex: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`UnionFindError`] variants.
    enum UnionFindErrorCode for UnionFindError {
        /// `find` or `union` was called on an unregistered vertex.
        UnregisteredVertex => UnregisteredVertex { .. } => "UNION_FIND_UNREGISTERED_VERTEX",
        /// `make_set` was called twice for the same vertex.
        AlreadyRegistered => AlreadyRegistered { .. } => "UNION_FIND_ALREADY_REGISTERED",
    }
}

/// Errors returned by the MST engines.
///
/// A disconnected or empty graph is not an error; both are reported through
/// [`crate::MstResult`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The disjoint-set structure rejected an operation.
    #[error("union-find failure: {source}")]
    UnionFind {
        /// Underlying disjoint-set error.
        #[from]
        source: UnionFindError,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error(
        "{algorithm} invariant violated: {invariant} (accepted {accepted} of {expected} edges)"
    )]
    InvariantViolation {
        /// Name of the engine that detected the violation.
        algorithm: &'static str,
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Number of edges accepted when the violation was detected.
        accepted: usize,
        /// Number of edges a spanning tree requires.
        expected: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The disjoint-set structure rejected an operation.
        UnionFind => UnionFind { .. } => "MST_UNION_FIND",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

impl MstError {
    /// Retrieve the inner [`UnionFindErrorCode`] when the error originated in
    /// the disjoint-set structure.
    #[must_use]
    pub const fn union_find_code(&self) -> Option<UnionFindErrorCode> {
        match self {
            Self::UnionFind { source } => Some(source.code()),
            Self::InvariantViolation { .. } => None,
        }
    }
}
