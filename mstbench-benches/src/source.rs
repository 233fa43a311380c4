//! Seeded benchmark graphs.
//!
//! Sparse inputs come from the core generator; complete graphs are built
//! here because the generator only adds a handful of extra edges.

use std::ops::RangeInclusive;

use mstbench_core::{Edge, Graph, GraphError, GraphGenerator};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{
    error::BenchSetupError,
    params::{Density, MstBenchParams},
};

const WEIGHTS: RangeInclusive<u32> = 1..=100;

/// Builds the connected graph described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError`] when the graph fails validation or is not
/// connected.
pub fn build_graph(id: u32, params: MstBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    let graph = match params.density {
        Density::Sparse => GraphGenerator::new(seed).generate_connected(id, params.vertices)?,
        Density::Complete => {
            complete_graph(id, params.vertices, &mut SmallRng::seed_from_u64(seed))?
        }
    };
    if graph.is_connected() {
        Ok(graph)
    } else {
        Err(BenchSetupError::Disconnected { graph_id: id })
    }
}

fn complete_graph(id: u32, vertices: usize, rng: &mut SmallRng) -> Result<Graph, GraphError> {
    let labels: Vec<String> = (0..vertices).map(|index| format!("V{index}")).collect();
    let mut edges = Vec::new();
    for (offset, from) in labels.iter().enumerate() {
        for to in labels.iter().skip(offset + 1) {
            edges.push(Edge::new(from.as_str(), to.as_str(), rng.gen_range(WEIGHTS)));
        }
    }
    Graph::new(id, labels, edges)
}
