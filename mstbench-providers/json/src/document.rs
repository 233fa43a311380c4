//! Serde model of the graph input document.

use mstbench_core::{Edge, Graph};
use serde::{Deserialize, Serialize};

use crate::errors::JsonProviderError;

/// Top-level input document: `{"graphs": [...]}`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct GraphDocument {
    /// Graphs in document order.
    pub graphs: Vec<GraphRecord>,
}

/// One graph as it appears on disk.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct GraphRecord {
    /// Graph identifier.
    pub id: u32,
    /// Vertex labels; the first one is the traversal start.
    pub nodes: Vec<String>,
    /// Undirected weighted edges.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// One edge as it appears on disk.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    /// First endpoint label.
    pub from: String,
    /// Second endpoint label.
    pub to: String,
    /// Non-negative weight.
    pub weight: u32,
}

impl GraphRecord {
    /// Validates the record and converts it into a [`Graph`].
    ///
    /// # Errors
    /// Returns [`JsonProviderError::InvalidGraph`] carrying the record's id
    /// when the core rejects the vertices or edges.
    pub fn into_graph(self) -> Result<Graph, JsonProviderError> {
        let Self { id, nodes, edges } = self;
        let edges = edges.into_iter().map(Into::into).collect();
        Graph::new(id, nodes, edges)
            .map_err(|source| JsonProviderError::InvalidGraph { graph_id: id, source })
    }
}

impl From<&Graph> for GraphRecord {
    fn from(graph: &Graph) -> Self {
        Self {
            id: graph.id(),
            nodes: graph.vertices().to_vec(),
            edges: graph.edges().iter().map(EdgeRecord::from).collect(),
        }
    }
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        Self {
            from: edge.from().to_owned(),
            to: edge.to().to_owned(),
            weight: edge.weight(),
        }
    }
}

impl From<EdgeRecord> for Edge {
    fn from(record: EdgeRecord) -> Self {
        Self::new(record.from, record.to, record.weight)
    }
}
