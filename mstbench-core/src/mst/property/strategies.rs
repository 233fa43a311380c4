//! Graph strategies for the MST property suite.
//!
//! Every fixture is built from a seeded [`SmallRng`] so a failing case can be
//! replayed from its distribution and seed alone. Vertices are labelled
//! `n0..n{k}` and edges are appended in generation order, which is the order
//! both engines use for tie-breaking.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::graph::{Edge, Graph};

use super::types::{GraphFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay small so the pair loop does not dominate run time.
const DENSE_MAX_VERTICES: usize = 24;
const MAX_WEIGHT: u32 = 1_000;

/// Graphs small enough for the exhaustive oracle.
pub(super) const EXHAUSTIVE_MAX_EDGES: usize = 12;

/// Samples a distribution and a seed, then builds the fixture.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        generate_fixture(distribution, &mut SmallRng::seed_from_u64(seed))
    })
}

/// Builds graphs with at most six vertices and
/// [`EXHAUSTIVE_MAX_EDGES`] edges, drawing weights from a narrow range so
/// several trees often share the minimum cost.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = Graph> {
    (1_usize..=6, any::<u64>()).prop_map(|(vertices, seed)| {
        let rng = &mut SmallRng::seed_from_u64(seed);
        let mut builder = EdgeBuilder::new(vertices);
        let edge_count = rng.gen_range(0..=EXHAUSTIVE_MAX_EDGES);
        for _ in 0..edge_count {
            let from = rng.gen_range(0..vertices);
            let to = rng.gen_range(0..vertices);
            builder.push(from, to, rng.gen_range(1..=5));
        }
        builder.finish(0)
    })
}

/// Builds a fixture for an explicit distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> GraphFixture {
    let graph = match distribution {
        WeightDistribution::Unique => unique_weights(rng),
        WeightDistribution::ManyIdentical => identical_weights(rng),
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => dense(rng),
        WeightDistribution::Disconnected => disconnected(rng),
    };
    GraphFixture {
        graph,
        distribution,
    }
}

/// Joins each vertex pair with probability drawn from `probability`.
fn random_pairs(
    rng: &mut SmallRng,
    max_vertices: usize,
    probability: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> EdgeBuilder {
    let vertices = rng.gen_range(MIN_VERTICES..=max_vertices);
    let chance = rng.gen_range(probability.0..=probability.1);
    let mut builder = EdgeBuilder::new(vertices);
    for from in 0..vertices {
        for to in (from + 1)..vertices {
            if rng.gen_bool(chance) {
                let value = weight(rng);
                builder.push(from, to, value);
            }
        }
    }
    builder
}

fn unique_weights(rng: &mut SmallRng) -> Graph {
    let mut builder = random_pairs(rng, MAX_VERTICES, (0.2, 0.6), |_| 0);
    // Reassign weights from a shuffled range so no two edges tie.
    let mut weights: Vec<u32> = (1..).take(builder.edges.len()).collect();
    shuffle(&mut weights, rng);
    for (edge, weight) in builder.edges.iter_mut().zip(weights) {
        edge.2 = weight;
    }
    builder.finish(rng.gen_range(1..=u32::MAX))
}

fn identical_weights(rng: &mut SmallRng) -> Graph {
    let pool: Vec<u32> = (0..rng.gen_range(1..=3))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    random_pairs(rng, MAX_VERTICES, (0.3, 0.7), |r| pool[r.gen_range(0..pool.len())])
        .finish(rng.gen_range(1..=u32::MAX))
}

fn sparse(rng: &mut SmallRng) -> Graph {
    let vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = EdgeBuilder::new(vertices);

    let mut order: Vec<usize> = (0..vertices).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        builder.push(pair[0], pair[1], rng.gen_range(1..=MAX_WEIGHT));
    }

    for _ in 0..rng.gen_range(vertices / 2..=vertices) {
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);
        builder.push(from, to, rng.gen_range(1..=MAX_WEIGHT));
    }
    builder.finish(rng.gen_range(1..=u32::MAX))
}

fn dense(rng: &mut SmallRng) -> Graph {
    random_pairs(rng, DENSE_MAX_VERTICES, (0.7, 0.95), |r| {
        r.gen_range(1..=MAX_WEIGHT)
    })
    .finish(rng.gen_range(1..=u32::MAX))
}

fn disconnected(rng: &mut SmallRng) -> Graph {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut builder = EdgeBuilder::new(sizes.iter().sum());
    let mut offset = 0;
    for size in sizes {
        // A path keeps each component internally connected.
        for index in offset + 1..offset + size {
            builder.push(index - 1, index, rng.gen_range(1..=MAX_WEIGHT));
        }
        for from in offset..offset + size {
            for to in (from + 2)..offset + size {
                if rng.gen_bool(0.3) {
                    builder.push(from, to, rng.gen_range(1..=MAX_WEIGHT));
                }
            }
        }
        offset += size;
    }
    builder.finish(rng.gen_range(1..=u32::MAX))
}

/// Accumulates `(from, to, weight)` index triples before labelling them.
struct EdgeBuilder {
    vertices: usize,
    edges: Vec<(usize, usize, u32)>,
}

impl EdgeBuilder {
    fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
        }
    }

    fn push(&mut self, from: usize, to: usize, weight: u32) {
        self.edges.push((from, to, weight));
    }

    fn finish(self, id: u32) -> Graph {
        let labels: Vec<String> = (0..self.vertices).map(label).collect();
        let edges = self
            .edges
            .into_iter()
            .map(|(from, to, weight)| Edge::new(label(from), label(to), weight))
            .collect();
        Graph::new(id, labels, edges).expect("generated labels are unique and cover every edge")
    }
}

fn label(index: usize) -> String {
    format!("n{index}")
}

/// Fisher-Yates shuffle driven by `rng`.
fn shuffle<T>(items: &mut [T], rng: &mut SmallRng) {
    for upper in (1..items.len()).rev() {
        items.swap(upper, rng.gen_range(0..=upper));
    }
}
