//! Prim's algorithm with a lazy-deletion binary heap.
//!
//! The frontier holds candidate edges keyed by `(weight, push sequence)`.
//! The sequence grows monotonically, so equal-weight candidates pop in the
//! order they were pushed. Stale candidates whose far endpoint is already in
//! the tree are discarded when popped rather than removed eagerly.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::instrument;

use crate::{
    error::MstError,
    graph::{Edge, Graph},
};

use super::{MstAlgorithm, MstResult, RunClock, finish, spanning_edge_count};

const NAME: &str = "prim";

/// Prim's MST engine.
///
/// # Examples
/// ```
/// use mstbench_core::{Edge, Graph, MstAlgorithm, Prim};
///
/// let graph = Graph::new(
///     2,
///     vec!["A".into(), "B".into(), "C".into(), "D".into()],
///     vec![
///         Edge::new("A", "B", 1),
///         Edge::new("A", "C", 4),
///         Edge::new("B", "C", 2),
///         Edge::new("C", "D", 3),
///         Edge::new("B", "D", 5),
///     ],
/// )?;
/// let result = Prim.find_mst(&graph)?;
/// assert_eq!(result.total_cost(), 6);
/// assert_eq!(result.edges().len(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Prim;

/// A frontier entry. Field order defines the heap order: weight first, then
/// push sequence, which is unique per run.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct Candidate {
    weight: u32,
    sequence: u64,
    from: usize,
    to: usize,
}

#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<Candidate>>,
    next_sequence: u64,
}

impl Frontier {
    fn push(&mut self, from: usize, to: usize, weight: u32) {
        self.heap.push(Reverse(Candidate {
            weight,
            sequence: self.next_sequence,
            from,
            to,
        }));
        self.next_sequence += 1;
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }
}

struct Tree<'g> {
    graph: &'g Graph,
    visited: Vec<bool>,
    frontier: Frontier,
    operations: u64,
}

impl<'g> Tree<'g> {
    fn new(graph: &'g Graph, operations: u64) -> Self {
        Self {
            graph,
            visited: vec![false; graph.vertex_count()],
            frontier: Frontier::default(),
            operations,
        }
    }

    fn mark(&mut self, vertex: usize) {
        if let Some(slot) = self.visited.get_mut(vertex) {
            *slot = true;
        }
    }

    /// Out-of-range indices count as visited so they are never expanded.
    fn is_visited(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(true)
    }

    /// Marks `vertex` as part of the tree and pushes every incident edge
    /// whose far endpoint is still outside it.
    fn absorb(&mut self, vertex: usize) {
        self.mark(vertex);
        self.operations += 1;
        for adjacent in self.graph.adjacency().neighbors_of(vertex) {
            self.operations += 1;
            if !self.is_visited(adjacent.vertex()) {
                self.frontier
                    .push(vertex, adjacent.vertex(), adjacent.weight());
                self.operations += 1;
            }
        }
    }

    fn edge(&self, candidate: Candidate) -> Result<Edge, MstError> {
        let label = |index| {
            self.graph
                .vertex(index)
                .ok_or(MstError::InvariantViolation {
                    algorithm: NAME,
                    invariant: "frontier endpoints must name graph vertices",
                    accepted: 0,
                    expected: spanning_edge_count(self.graph.vertex_count()),
                })
        };
        Ok(Edge::new(
            label(candidate.from)?,
            label(candidate.to)?,
            candidate.weight,
        ))
    }
}

impl MstAlgorithm for Prim {
    fn name(&self) -> &'static str {
        NAME
    }

    #[instrument(
        name = "mst.prim",
        skip_all,
        fields(
            graph_id = graph.id(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
        ),
    )]
    fn find_mst(&self, graph: &Graph) -> Result<MstResult, MstError> {
        let clock = RunClock::start();

        if graph.vertex_count() == 0 {
            return Ok(finish(MstResult::spanning(
                NAME,
                Vec::new(),
                0,
                0,
                clock.stop(),
            )));
        }

        let connectivity_check = 1;
        if !graph.is_connected() {
            return Ok(finish(MstResult::disconnected(
                NAME,
                connectivity_check,
                clock.stop(),
            )));
        }

        let expected = spanning_edge_count(graph.vertex_count());
        let mut tree = Tree::new(graph, connectivity_check);
        let mut edges = Vec::with_capacity(expected);
        let mut cost = 0_u64;

        // The start vertex is counted once for marking it, plus one per push;
        // its neighbours cannot be visited yet.
        tree.mark(0);
        tree.operations += 1;
        for adjacent in graph.adjacency().neighbors_of(0) {
            tree.frontier.push(0, adjacent.vertex(), adjacent.weight());
            tree.operations += 1;
        }

        while edges.len() < expected {
            let Some(candidate) = tree.frontier.pop() else {
                break;
            };
            tree.operations += 2;
            if tree.is_visited(candidate.to) {
                continue;
            }

            edges.push(tree.edge(candidate)?);
            cost += u64::from(candidate.weight);
            tree.absorb(candidate.to);
        }

        if edges.len() < expected {
            return Err(MstError::InvariantViolation {
                algorithm: NAME,
                invariant: "frontier exhausted before spanning a connected graph",
                accepted: edges.len(),
                expected,
            });
        }

        Ok(finish(MstResult::spanning(
            NAME,
            edges,
            cost,
            tree.operations,
            clock.stop(),
        )))
    }
}
