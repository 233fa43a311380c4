//! Shared test utilities for `mstbench-core`.

use mstbench_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{Edge, Graph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `MSTBENCH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from string labels and `(from, to, weight)` triples.
///
/// # Panics
/// Panics when the fixture is malformed; fixtures are static test data.
#[must_use]
pub(crate) fn graph_from(id: u32, vertices: &[&str], edges: &[(&str, &str, u32)]) -> Graph {
    let vertices = vertices.iter().map(|label| (*label).to_owned()).collect();
    let edges = edges
        .iter()
        .map(|(from, to, weight)| Edge::new(*from, *to, *weight))
        .collect();
    match Graph::new(id, vertices, edges) {
        Ok(graph) => graph,
        Err(err) => panic!("invalid fixture graph {id}: {err}"),
    }
}

/// Five vertices, seven edges; the minimum spanning tree costs 16.
#[must_use]
pub(crate) fn five_vertex_graph() -> Graph {
    graph_from(
        1,
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 4),
            ("A", "C", 3),
            ("B", "C", 2),
            ("B", "D", 5),
            ("C", "D", 7),
            ("C", "E", 8),
            ("D", "E", 6),
        ],
    )
}

/// Four vertices, five edges; the minimum spanning tree costs 6.
#[must_use]
pub(crate) fn four_vertex_graph() -> Graph {
    graph_from(
        2,
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "C", 2),
            ("C", "D", 3),
            ("B", "D", 5),
        ],
    )
}

/// Two disjoint pairs: `A-B` and `C-D`.
#[must_use]
pub(crate) fn disconnected_graph() -> Graph {
    graph_from(3, &["A", "B", "C", "D"], &[("A", "B", 1), ("C", "D", 2)])
}
