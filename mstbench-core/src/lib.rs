//! mstbench core library.
//!
//! Minimum spanning trees over undirected weighted graphs, computed with
//! Prim's and Kruskal's algorithms so the two can be compared on cost,
//! operation count and wall time.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod compare;
mod error;
#[cfg(feature = "generator")]
#[cfg_attr(docsrs, doc(cfg(feature = "generator")))]
mod generator;
mod graph;
mod mst;

#[cfg(test)]
mod test_utils;

pub use crate::{
    compare::{Comparison, compare, compare_all},
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode, UnionFindError, UnionFindErrorCode},
    graph::{Adjacency, Adjacent, Edge, EdgeKey, Graph},
    mst::{Algorithm, DISCONNECTED_COST, DisjointSet, Kruskal, MstAlgorithm, MstResult, Prim},
};

#[cfg(feature = "generator")]
pub use crate::generator::{GraphGenerator, STANDARD_SUITE, SuiteTier};
