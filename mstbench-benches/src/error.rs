//! Benchmark setup error type.
//!
//! Lets setup functions propagate graph and engine failures with `?`
//! instead of using `.expect()`.

use mstbench_core::{GraphError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generated graph failed validation.
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// An engine failed on a generated graph.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A generated graph was not connected.
    #[error("generated graph {graph_id} is disconnected")]
    Disconnected {
        /// Identifier of the offending graph.
        graph_id: u32,
    },
}
