//! Side-by-side runs of both engines on the same graph.

use tracing::{Span, field, instrument, warn};

use crate::{
    error::MstError,
    graph::Graph,
    mst::{Kruskal, MstAlgorithm, MstResult, Prim},
};

/// Prim and Kruskal results for one graph together with its input size.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    graph_id: u32,
    vertices: usize,
    edges: usize,
    prim: MstResult,
    kruskal: MstResult,
}

impl Comparison {
    /// Returns the identifier of the compared graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph_id(&self) -> u32 { self.graph_id }

    /// Returns the vertex count of the compared graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> usize { self.vertices }

    /// Returns the edge count of the compared graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> usize { self.edges }

    /// Returns Prim's result.
    #[must_use]
    #[rustfmt::skip]
    pub fn prim(&self) -> &MstResult { &self.prim }

    /// Returns Kruskal's result.
    #[must_use]
    #[rustfmt::skip]
    pub fn kruskal(&self) -> &MstResult { &self.kruskal }

    /// Returns `true` when both engines reported the same total cost.
    ///
    /// Two disconnected results match, since both carry the sentinel.
    #[must_use]
    pub fn costs_match(&self) -> bool {
        self.prim.total_cost() == self.kruskal.total_cost()
    }
}

/// Runs Prim and then Kruskal on `graph`.
///
/// A cost disagreement is logged at `warn` level and still returned, so the
/// caller can report it.
///
/// # Errors
/// Propagates the first [`MstError`] raised by either engine.
///
/// # Examples
/// ```
/// use mstbench_core::{Edge, Graph, compare};
///
/// let graph = Graph::new(
///     7,
///     vec!["A".into(), "B".into(), "C".into()],
///     vec![Edge::new("A", "B", 2), Edge::new("B", "C", 1), Edge::new("A", "C", 5)],
/// )?;
/// let comparison = compare(&graph)?;
/// assert!(comparison.costs_match());
/// assert_eq!(comparison.prim().total_cost(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.compare",
    skip_all,
    fields(
        graph_id = graph.id(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        costs_match = field::Empty,
    ),
)]
pub fn compare(graph: &Graph) -> Result<Comparison, MstError> {
    let comparison = Comparison {
        graph_id: graph.id(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        prim: Prim.find_mst(graph)?,
        kruskal: Kruskal.find_mst(graph)?,
    };

    let costs_match = comparison.costs_match();
    Span::current().record("costs_match", costs_match);
    if !costs_match {
        warn!(
            graph_id = comparison.graph_id,
            prim_cost = comparison.prim.total_cost(),
            kruskal_cost = comparison.kruskal.total_cost(),
            "engines disagree on total cost"
        );
    }
    Ok(comparison)
}

/// Compares every graph in `graphs`, preserving input order.
///
/// Graphs are processed on the Rayon pool when the `parallel` feature is
/// enabled; each run still owns its working state.
#[must_use]
pub fn compare_all(graphs: &[Graph]) -> Vec<Result<Comparison, MstError>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        graphs.par_iter().map(compare).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        graphs.iter().map(compare).collect()
    }
}
