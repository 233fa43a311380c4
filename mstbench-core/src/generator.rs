//! Seeded generation of random connected graphs for benchmarking.
//!
//! Each graph is a random spanning tree over `V0..V{n-1}` plus up to `n / 4`
//! extra edges, all weighted uniformly in `1..=100`. A fixed seed always
//! reproduces the same sequence of graphs.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    error::GraphError,
    graph::{Edge, Graph},
};

const MIN_WEIGHT: u32 = 1;
const MAX_WEIGHT: u32 = 100;
const EXTRA_EDGE_ATTEMPTS_PER_EDGE: usize = 10;

/// A batch of equally sized graphs within a suite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SuiteTier {
    /// Number of graphs in the tier.
    pub count: usize,
    /// Vertex count of every graph in the tier.
    pub vertices: usize,
}

/// The benchmark suite: small, medium, large and three extra-large graphs.
pub const STANDARD_SUITE: [SuiteTier; 6] = [
    SuiteTier { count: 5, vertices: 30 },
    SuiteTier { count: 10, vertices: 300 },
    SuiteTier { count: 10, vertices: 1_000 },
    SuiteTier { count: 1, vertices: 1_400 },
    SuiteTier { count: 1, vertices: 1_600 },
    SuiteTier { count: 1, vertices: 1_800 },
];

/// Deterministic random graph source.
///
/// # Examples
/// ```
/// use mstbench_core::GraphGenerator;
///
/// let graph = GraphGenerator::new(42).generate_connected(1, 30)?;
/// assert_eq!(graph.vertex_count(), 30);
/// assert!(graph.is_connected());
/// # Ok::<(), mstbench_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphGenerator {
    rng: SmallRng,
}

impl GraphGenerator {
    /// Creates a generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generates a connected graph with `vertices` vertices.
    ///
    /// # Errors
    /// Returns [`GraphError`] only if the generated labels fail validation,
    /// which indicates a bug in the generator.
    #[instrument(name = "generator.connected", skip(self))]
    pub fn generate_connected(&mut self, id: u32, vertices: usize) -> Result<Graph, GraphError> {
        if vertices == 0 {
            return Ok(Graph::empty(id));
        }

        let labels: Vec<String> = (0..vertices).map(label).collect();
        let extra = vertices.div_euclid(4);
        let mut pairs = HashSet::with_capacity(vertices + extra);
        let mut edges = Vec::with_capacity(vertices - 1 + extra);

        let mut members = Vec::with_capacity(vertices);
        let mut in_tree: Vec<bool> = (0..vertices).map(|index| index == 0).collect();
        members.push(0);
        while members.len() < vertices {
            let picked = self.rng.gen_range(0..members.len());
            let to = self.rng.gen_range(0..vertices);
            let (Some(&from), Some(slot)) = (members.get(picked), in_tree.get_mut(to)) else {
                continue;
            };
            if *slot {
                continue;
            }
            *slot = true;
            members.push(to);
            pairs.insert(pair(from, to));
            edges.push(self.edge(from, to));
        }

        let target = vertices - 1 + extra;
        let mut attempts = 0;
        while edges.len() < target && attempts < extra * EXTRA_EDGE_ATTEMPTS_PER_EDGE {
            attempts += 1;
            let from = self.rng.gen_range(0..vertices);
            let to = self.rng.gen_range(0..vertices);
            if from != to && pairs.insert(pair(from, to)) {
                edges.push(self.edge(from, to));
            }
        }

        debug!(edges = edges.len(), attempts, "generated connected graph");
        Graph::new(id, labels, edges)
    }

    /// Generates every tier of `tiers` in order, numbering graphs from 1.
    ///
    /// # Errors
    /// Propagates [`GraphError`] from [`GraphGenerator::generate_connected`].
    pub fn generate_suite(&mut self, tiers: &[SuiteTier]) -> Result<Vec<Graph>, GraphError> {
        let sizes = tiers
            .iter()
            .flat_map(|tier| std::iter::repeat_n(tier.vertices, tier.count));
        let mut graphs = Vec::new();
        for (id, vertices) in (1_u32..).zip(sizes) {
            graphs.push(self.generate_connected(id, vertices)?);
        }
        Ok(graphs)
    }

    /// Generates [`STANDARD_SUITE`].
    ///
    /// # Errors
    /// Propagates [`GraphError`] from [`GraphGenerator::generate_connected`].
    pub fn standard_suite(&mut self) -> Result<Vec<Graph>, GraphError> {
        self.generate_suite(&STANDARD_SUITE)
    }

    fn edge(&mut self, from: usize, to: usize) -> Edge {
        let weight = self.rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
        Edge::new(label(from), label(to), weight)
    }
}

fn label(index: usize) -> String {
    format!("V{index}")
}

fn pair(left: usize, right: usize) -> (usize, usize) {
    (left.min(right), left.max(right))
}
