//! Kruskal's algorithm over a stably sorted edge list.

use tracing::instrument;

use crate::{
    error::MstError,
    graph::{Edge, Graph},
};

use super::{DisjointSet, MstAlgorithm, MstResult, RunClock, finish, spanning_edge_count};

const NAME: &str = "kruskal";

/// Kruskal's MST engine.
///
/// Edges of equal weight keep their input order, so the selected tree and the
/// operation count are reproducible for a given graph.
///
/// # Examples
/// ```
/// use mstbench_core::{Edge, Graph, Kruskal, MstAlgorithm};
///
/// let graph = Graph::new(
///     3,
///     vec!["A".into(), "B".into(), "C".into(), "D".into()],
///     vec![Edge::new("A", "B", 1), Edge::new("C", "D", 2)],
/// )?;
/// let result = Kruskal.find_mst(&graph)?;
/// assert_eq!(result.total_cost(), -1);
/// assert!(result.edges().is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Kruskal;

impl MstAlgorithm for Kruskal {
    fn name(&self) -> &'static str {
        NAME
    }

    #[instrument(
        name = "mst.kruskal",
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

        let mut operations = 1_u64;
        if !graph.is_connected() {
            return Ok(finish(MstResult::disconnected(
                NAME,
                operations,
                clock.stop(),
            )));
        }

        let mut components = DisjointSet::with_capacity(graph.vertex_count());
        for vertex in graph.vertices() {
            components.make_set(vertex.as_str())?;
        }

        let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
        sorted.sort_by_key(|edge| edge.weight());
        operations += sort_cost(sorted.len());

        let expected = spanning_edge_count(graph.vertex_count());
        let mut edges = Vec::with_capacity(expected);
        let mut cost = 0_u64;

        for edge in sorted {
            if edges.len() == expected {
                break;
            }
            operations += 1;
            if components.union(&edge.from(), &edge.to())? {
                edges.push(edge.clone());
                cost += u64::from(edge.weight());
                operations += 1;
            }
        }

        if edges.len() < expected {
            return Err(MstError::InvariantViolation {
                algorithm: NAME,
                invariant: "sorted edges exhausted before spanning a connected graph",
                accepted: edges.len(),
                expected,
            });
        }

        operations += components.operations();
        Ok(finish(MstResult::spanning(
            NAME,
            edges,
            cost,
            operations,
            clock.stop(),
        )))
    }
}

/// Operation charge for sorting `edge_count` edges: `floor(E ln E)`.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "the sort charge is an n log n estimate over realistic edge counts"
)]
pub(super) fn sort_cost(edge_count: usize) -> u64 {
    if edge_count < 2 {
        return 0;
    }
    let count = edge_count as f64;
    (count * count.ln()).floor() as u64
}
