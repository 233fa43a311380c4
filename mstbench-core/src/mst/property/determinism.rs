//! Run-to-run determinism of both engines.
//!
//! Repeats each engine on the same graph and requires the same edges in the
//! same order with the same endpoint orientation, the same cost and the same
//! operation count. Batch comparison must agree with single comparisons.

use proptest::test_runner::TestCaseResult;

use crate::{
    compare::{compare, compare_all},
    graph::Edge,
    mst::{Algorithm, MstAlgorithm},
};

use super::{
    helpers::fail,
    types::{DeterminismConfig, GraphFixture},
};

/// Runs the determinism property for `fixture`.
pub(super) fn run_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    for algorithm in Algorithm::ALL {
        let run = || {
            algorithm
                .find_mst(&fixture.graph)
                .map_err(|err| fail(fixture, format!("{} failed: {err}", algorithm.name())))
        };
        let baseline = run()?;
        let baseline_edges = oriented(baseline.edges());

        for repetition in 1..config.repetitions {
            let again = run()?;
            if again.operations() != baseline.operations() {
                return Err(fail(
                    fixture,
                    format!(
                        "{} run {repetition}: {} operations, baseline {}",
                        algorithm.name(),
                        again.operations(),
                        baseline.operations(),
                    ),
                ));
            }
            if again.total_cost() != baseline.total_cost()
                || oriented(again.edges()) != baseline_edges
            {
                return Err(fail(
                    fixture,
                    format!("{} run {repetition}: selected edges diverged", algorithm.name()),
                ));
            }
        }
    }

    let single = compare(&fixture.graph).map_err(|err| fail(fixture, err))?;
    let batched = compare_all(std::slice::from_ref(&fixture.graph))
        .pop()
        .ok_or_else(|| fail(fixture, "batch comparison returned nothing"))?
        .map_err(|err| fail(fixture, err))?;
    if batched.prim().edges() != single.prim().edges()
        || batched.kruskal().edges() != single.kruskal().edges()
        || batched.kruskal().operations() != single.kruskal().operations()
    {
        return Err(fail(fixture, "batch comparison diverged from a single comparison"));
    }
    Ok(())
}

/// Edge triples with their declared orientation, which `Edge` equality
/// ignores.
fn oriented(edges: &[Edge]) -> Vec<(&str, &str, u32)> {
    edges
        .iter()
        .map(|edge| (edge.from(), edge.to(), edge.weight()))
        .collect()
}
