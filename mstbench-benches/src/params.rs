//! Benchmark parameter types.

use std::fmt;

/// Edge density of a benchmark graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Density {
    /// Random spanning tree plus about `n / 4` extra edges.
    Sparse,
    /// Every vertex pair joined by one edge.
    Complete,
}

impl Density {
    /// Returns the label used in benchmark group names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Complete => "complete",
        }
    }
}

/// Parameters for one MST benchmark input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// How densely the vertices are joined.
    pub density: Density,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.density.as_str(), self.vertices)
    }
}
