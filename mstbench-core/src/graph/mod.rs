//! Undirected weighted graphs with a derived adjacency view.
//!
//! A [`Graph`] owns an ordered vertex sequence and an edge sequence. The
//! adjacency view is recomputed whenever either sequence is replaced, so it
//! can never drift out of sync with the edges it was derived from. Vertex
//! order matters: the first vertex is the traversal start point for both the
//! connectivity check and Prim's algorithm.

mod edge;

use std::{
    collections::{HashMap, VecDeque, hash_map::Entry},
    fmt,
};

use crate::error::GraphError;

pub use self::edge::{Edge, EdgeKey};

/// An adjacency entry: the far endpoint (as a vertex index) and the weight of
/// the connecting edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Adjacent {
    vertex: usize,
    weight: u32,
}

impl Adjacent {
    /// Returns the index of the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex(&self) -> usize { self.vertex }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> u32 { self.weight }
}

/// Read-only adjacency view derived from a graph's vertices and edges.
///
/// Every edge `(a, b, w)` contributes `a -> (b, w)` and `b -> (a, w)`, in edge
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
    index: HashMap<String, usize>,
    lists: Vec<Vec<Adjacent>>,
}

impl Adjacency {
    fn build(vertices: &[String], edges: &[Edge]) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(vertices.len());
        for (position, vertex) in vertices.iter().enumerate() {
            match index.entry(vertex.clone()) {
                Entry::Occupied(_) => {
                    return Err(GraphError::DuplicateVertex {
                        vertex: vertex.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        let mut lists = vec![Vec::new(); vertices.len()];
        for (edge_index, edge) in edges.iter().enumerate() {
            let from = resolve(&index, edge_index, edge.from())?;
            let to = resolve(&index, edge_index, edge.to())?;
            let weight = edge.weight();
            if let Some(list) = lists.get_mut(from) {
                list.push(Adjacent { vertex: to, weight });
            }
            if let Some(list) = lists.get_mut(to) {
                list.push(Adjacent {
                    vertex: from,
                    weight,
                });
            }
        }

        Ok(Self { index, lists })
    }

    /// Returns the position of `vertex` in the graph's vertex sequence.
    #[must_use]
    pub fn index_of(&self, vertex: &str) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Returns the adjacency list of the vertex at `index`.
    ///
    /// Out-of-range indices yield an empty slice.
    #[must_use]
    pub fn neighbors_of(&self, index: usize) -> &[Adjacent] {
        self.lists.get(index).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of vertices covered by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` when the view covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

fn resolve(
    index: &HashMap<String, usize>,
    edge_index: usize,
    vertex: &str,
) -> Result<usize, GraphError> {
    index
        .get(vertex)
        .copied()
        .ok_or_else(|| GraphError::InvalidEdgeEndpoint {
            edge_index,
            vertex: vertex.to_owned(),
        })
}

/// An undirected weighted graph identified by an integer id.
///
/// # Examples
/// ```
/// use mstbench_core::{Edge, Graph};
///
/// let graph = Graph::new(
///     1,
///     vec!["A".into(), "B".into(), "C".into()],
///     vec![Edge::new("A", "B", 1), Edge::new("B", "C", 2)],
/// )?;
/// assert!(graph.is_connected());
/// assert_eq!(graph.neighbors("B").map(Iterator::count), Some(2));
/// # Ok::<(), mstbench_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    id: u32,
    vertices: Vec<String>,
    edges: Vec<Edge>,
    adjacency: Adjacency,
}

impl Graph {
    /// Builds a graph and derives its adjacency view.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when a label repeats and
    /// [`GraphError::InvalidEdgeEndpoint`] when an edge references a vertex
    /// outside `vertices`.
    pub fn new(id: u32, vertices: Vec<String>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let adjacency = Adjacency::build(&vertices, &edges)?;
        Ok(Self {
            id,
            vertices,
            edges,
            adjacency,
        })
    }

    /// Builds a graph with no vertices and no edges.
    #[must_use]
    pub fn empty(id: u32) -> Self {
        Self {
            id,
            vertices: Vec::new(),
            edges: Vec::new(),
            adjacency: Adjacency::default(),
        }
    }

    /// Returns the graph identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> u32 { self.id }

    /// Returns the vertex labels in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[String] { &self.vertices }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the derived adjacency view.
    #[must_use]
    #[rustfmt::skip]
    pub fn adjacency(&self) -> &Adjacency { &self.adjacency }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the label of the vertex at `index`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&str> {
        self.vertices.get(index).map(String::as_str)
    }

    /// Iterates over `(neighbour, weight)` pairs of `vertex`, or returns
    /// `None` when the vertex is unknown.
    pub fn neighbors(&self, vertex: &str) -> Option<impl Iterator<Item = (&str, u32)> + '_> {
        let index = self.adjacency.index_of(vertex)?;
        Some(
            self.adjacency
                .neighbors_of(index)
                .iter()
                .filter_map(|adjacent| {
                    self.vertex(adjacent.vertex)
                        .map(|label| (label, adjacent.weight))
                }),
        )
    }

    /// Replaces the vertex sequence and rebuilds the adjacency view.
    ///
    /// # Errors
    /// Fails like [`Graph::new`] when the new vertices do not cover every edge
    /// endpoint; the graph is left unchanged in that case.
    pub fn set_vertices(&mut self, vertices: Vec<String>) -> Result<(), GraphError> {
        self.adjacency = Adjacency::build(&vertices, &self.edges)?;
        self.vertices = vertices;
        Ok(())
    }

    /// Replaces the edge sequence and rebuilds the adjacency view.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdgeEndpoint`] when an edge references an
    /// unknown vertex; the graph is left unchanged in that case.
    pub fn set_edges(&mut self, edges: Vec<Edge>) -> Result<(), GraphError> {
        self.adjacency = Adjacency::build(&self.vertices, &edges)?;
        self.edges = edges;
        Ok(())
    }

    /// Returns `true` when every vertex is reachable from the first one.
    ///
    /// Runs a breadth-first search over the adjacency view. A graph with no
    /// vertices is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.vertices.is_empty() {
            return true;
        }

        let mut visited = vec![false; self.vertices.len()];
        let mut queue = VecDeque::from([0_usize]);
        visited[0] = true;
        let mut reached = 1_usize;

        while let Some(current) = queue.pop_front() {
            for adjacent in self.adjacency.neighbors_of(current) {
                if let Some(seen) = visited.get_mut(adjacent.vertex)
                    && !*seen
                {
                    *seen = true;
                    reached += 1;
                    queue.push_back(adjacent.vertex);
                }
            }
        }

        reached == self.vertices.len()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph {} ({} vertices, {} edges)",
            self.id,
            self.vertex_count(),
            self.edge_count()
        )
    }
}
