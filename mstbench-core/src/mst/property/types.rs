//! Fixture, configuration and weight distribution types for the property
//! suite.

use mstbench_test_support::ci::property_test_profile::determinism_repetitions;
use test_strategy::Arbitrary;

use crate::graph::Graph;

/// Shape of the generated graph and its edge weights.
///
/// Sampling is biased towards `ManyIdentical`, where tie-breaking decides
/// which of several equally cheap trees is returned.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight, so the minimum tree is unique.
    #[weight(2)]
    Unique,
    /// Weights come from a pool of one to three values.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning tree plus a few extra edges, including parallel
    /// edges and self-loops.
    #[weight(2)]
    Sparse,
    /// Most vertex pairs are joined.
    #[weight(2)]
    Dense,
    /// Two to five components with no edges between them.
    #[weight(2)]
    Disconnected,
}

/// A generated graph together with the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub graph: Graph,
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// One-line context appended to property failures.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.graph.vertex_count(),
            self.graph.edge_count(),
        )
    }
}

/// Repetition settings for the determinism property.
pub(super) struct DeterminismConfig {
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Reads `MSTBENCH_MST_PBT_DETERMINISM_REPS`, defaulting to 5 runs.
    pub(super) fn load() -> Self {
        Self {
            repetitions: determinism_repetitions(5),
        }
    }
}
