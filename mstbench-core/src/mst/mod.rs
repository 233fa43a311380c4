//! Minimum spanning tree (MST) engines.
//!
//! Two sequential engines share one contract, [`MstAlgorithm::find_mst`]:
//! Prim's algorithm grows a single tree from the first vertex through a lazy
//! min-heap frontier, and Kruskal's algorithm scans a stably sorted edge list
//! and filters cycles with a [`DisjointSet`]. Each run owns its private
//! working state, so independent runs may execute concurrently.
//!
//! An empty graph yields a zero-cost empty tree and a disconnected graph
//! yields the [`DISCONNECTED_COST`] sentinel; neither is an error.

mod kruskal;
mod prim;
mod result;
mod union_find;

use std::time::{Duration, Instant};

use crate::{error::MstError, graph::Graph};

pub use self::{
    kruskal::Kruskal,
    prim::Prim,
    result::{DISCONNECTED_COST, MstResult},
    union_find::DisjointSet,
};

/// Common contract of the MST engines.
pub trait MstAlgorithm {
    /// Stable engine name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Computes a minimum spanning tree of `graph`.
    ///
    /// # Errors
    /// Returns [`MstError`] only when an internal invariant breaks; empty and
    /// disconnected graphs are reported through the returned [`MstResult`].
    fn find_mst(&self, graph: &Graph) -> Result<MstResult, MstError>;
}

/// Selects one of the available engines at runtime.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Prim's algorithm.
    Prim,
    /// Kruskal's algorithm.
    Kruskal,
}

impl Algorithm {
    /// Every engine, in reporting order.
    pub const ALL: [Self; 2] = [Self::Prim, Self::Kruskal];
}

impl MstAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Self::Prim => Prim.name(),
            Self::Kruskal => Kruskal.name(),
        }
    }

    fn find_mst(&self, graph: &Graph) -> Result<MstResult, MstError> {
        match self {
            Self::Prim => Prim.find_mst(graph),
            Self::Kruskal => Kruskal.find_mst(graph),
        }
    }
}

/// Brackets the algorithmic work of one engine run.
struct RunClock {
    started: Instant,
}

impl RunClock {
    fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    fn stop(self) -> Duration {
        self.started.elapsed()
    }
}

/// Required edge count of a spanning tree over `vertex_count` vertices.
fn spanning_edge_count(vertex_count: usize) -> usize {
    vertex_count.saturating_sub(1)
}

fn finish(result: MstResult) -> MstResult {
    tracing::debug!(
        algorithm = result.algorithm(),
        total_cost = result.total_cost(),
        edges = result.edges().len(),
        operations = result.operations(),
        elapsed_ms = result.elapsed_ms(),
        "mst run finished"
    );
    record_run(&result);
    result
}

#[cfg(feature = "metrics")]
fn record_run(result: &MstResult) {
    metrics::counter!("mst_runs_total", "algorithm" => result.algorithm()).increment(1);
    metrics::histogram!("mst_run_duration_seconds", "algorithm" => result.algorithm())
        .record(result.elapsed().as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_run(_result: &MstResult) {}

#[cfg(test)]
mod property;
