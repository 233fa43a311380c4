//! The value produced by one MST engine run.

use std::{fmt, time::Duration};

use crate::graph::Edge;

/// Total cost reported for a graph that is not connected.
pub const DISCONNECTED_COST: i64 = -1;

/// Outcome of a single [`crate::MstAlgorithm::find_mst`] invocation.
///
/// Edges are kept in the order the engine accepted them. The operation
/// counter is an algorithm-specific complexity proxy: it is deterministic for
/// a given input but is not comparable in absolute terms between engines.
#[derive(Clone, Debug, PartialEq)]
pub struct MstResult {
    algorithm: &'static str,
    edges: Vec<Edge>,
    cost: Option<u64>,
    operations: u64,
    elapsed: Duration,
}

impl MstResult {
    pub(crate) fn spanning(
        algorithm: &'static str,
        edges: Vec<Edge>,
        cost: u64,
        operations: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            edges,
            cost: Some(cost),
            operations,
            elapsed,
        }
    }

    pub(crate) fn disconnected(algorithm: &'static str, operations: u64, elapsed: Duration) -> Self {
        Self {
            algorithm,
            edges: Vec::new(),
            cost: None,
            operations,
            elapsed,
        }
    }

    /// Returns the name of the engine that produced the result.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> &'static str { self.algorithm }

    /// Returns the selected edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the tree cost, or `None` when the graph was not connected.
    #[must_use]
    #[rustfmt::skip]
    pub fn cost(&self) -> Option<u64> { self.cost }

    /// Returns the total cost, using [`DISCONNECTED_COST`] as the sentinel
    /// for a disconnected graph.
    #[must_use]
    pub fn total_cost(&self) -> i64 {
        self.cost.map_or(DISCONNECTED_COST, |cost| {
            i64::try_from(cost).unwrap_or(i64::MAX)
        })
    }

    /// Returns `true` when the result is a spanning tree.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.cost.is_some()
    }

    /// Returns the operation counter.
    #[must_use]
    #[rustfmt::skip]
    pub fn operations(&self) -> u64 { self.operations }

    /// Returns the wall time spent on the algorithmic work.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the elapsed time in fractional milliseconds.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "reports carry fractional milliseconds")]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

impl fmt::Display for MstResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} edges, cost {}, {} operations, {:.2} ms",
            self.algorithm,
            self.edges.len(),
            self.total_cost(),
            self.operations,
            self.elapsed_ms()
        )
    }
}
