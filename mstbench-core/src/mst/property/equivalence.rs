//! Equivalence of both engines with the reference oracles.
//!
//! On a connected graph Prim, Kruskal and the sequential oracle agree on the
//! total cost and on the edge count. On a disconnected graph both engines
//! report the sentinel cost and no edges.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    graph::Graph,
    mst::{Algorithm, DISCONNECTED_COST, MstAlgorithm},
};

use super::{
    helpers::fail,
    oracle::{exhaustive_minimum, sequential_kruskal},
    types::GraphFixture,
};

/// Runs the oracle equivalence property for `fixture`.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let oracle = sequential_kruskal(&fixture.graph);
    let mut costs = Vec::with_capacity(Algorithm::ALL.len());

    for algorithm in Algorithm::ALL {
        let result = algorithm
            .find_mst(&fixture.graph)
            .map_err(|err| fail(fixture, format!("{} failed: {err}", algorithm.name())))?;

        if !oracle.is_tree() {
            if result.total_cost() != DISCONNECTED_COST || !result.edges().is_empty() {
                return Err(fail(
                    fixture,
                    format!(
                        "{} returned {result} for a graph with {} components",
                        algorithm.name(),
                        oracle.component_count,
                    ),
                ));
            }
            costs.push(result.total_cost());
            continue;
        }

        if result.cost() != Some(oracle.total_weight) {
            return Err(fail(
                fixture,
                format!(
                    "{} cost {:?}, oracle {}",
                    algorithm.name(),
                    result.cost(),
                    oracle.total_weight,
                ),
            ));
        }
        if result.edges().len() != oracle.edge_count {
            return Err(fail(
                fixture,
                format!(
                    "{} kept {} edges, oracle {}",
                    algorithm.name(),
                    result.edges().len(),
                    oracle.edge_count,
                ),
            ));
        }
        costs.push(result.total_cost());
    }

    if costs.windows(2).any(|pair| pair[0] != pair[1]) {
        return Err(fail(fixture, format!("engines disagree: {costs:?}")));
    }
    Ok(())
}

/// Checks both engines against brute-force enumeration on a tiny graph.
pub(super) fn run_exhaustive_property(graph: &Graph) -> TestCaseResult {
    let expected = exhaustive_minimum(graph);
    for algorithm in Algorithm::ALL {
        let result = algorithm
            .find_mst(graph)
            .map_err(|err| TestCaseError::fail(format!("{} failed: {err}", algorithm.name())))?;
        if result.cost() != expected {
            return Err(TestCaseError::fail(format!(
                "{} cost {:?}, exhaustive minimum {expected:?} on {graph}: {:?}",
                algorithm.name(),
                result.cost(),
                graph.edges(),
            )));
        }
    }
    Ok(())
}
