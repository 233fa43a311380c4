//! Benchmark reports: a nested JSON document and a flat CSV table.

use std::{
    io::{BufWriter, Write},
    path::Path,
};

use mstbench_core::{Comparison, MstResult};
use serde::{Deserialize, Serialize};
use tracing::{Span, field, instrument};

use crate::{document::EdgeRecord, errors::JsonProviderError, provider::create};

/// Header row of the CSV report.
pub const CSV_HEADER: &str = "Graph_ID,Vertices,Edges,Prim_Cost,Prim_Operations,Prim_Time_ms,\
                              Kruskal_Cost,Kruskal_Operations,Kruskal_Time_ms,Cost_Match";

/// One engine's outcome as written to the JSON report.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MstReport {
    /// Selected edges in acceptance order.
    pub mst_edges: Vec<EdgeRecord>,
    /// Tree cost, or `-1` for a disconnected graph.
    pub total_cost: i64,
    /// Engine-specific operation counter.
    pub operations_count: u64,
    /// Wall time of the algorithmic work in milliseconds.
    pub execution_time_ms: f64,
}

impl From<&MstResult> for MstReport {
    fn from(result: &MstResult) -> Self {
        Self {
            mst_edges: result.edges().iter().map(EdgeRecord::from).collect(),
            total_cost: result.total_cost(),
            operations_count: result.operations(),
            execution_time_ms: result.elapsed_ms(),
        }
    }
}

/// Size of the compared graph.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct InputStats {
    /// Vertex count.
    pub vertices: usize,
    /// Edge count.
    pub edges: usize,
}

/// Prim and Kruskal outcomes for one graph.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GraphReport {
    /// Graph identifier.
    pub graph_id: u32,
    /// Size of the input graph.
    pub input_stats: InputStats,
    /// Prim's outcome.
    pub prim: MstReport,
    /// Kruskal's outcome.
    pub kruskal: MstReport,
}

impl GraphReport {
    /// Returns `true` when both engines reported the same total cost.
    #[must_use]
    pub fn costs_match(&self) -> bool {
        self.prim.total_cost == self.kruskal.total_cost
    }
}

impl From<&Comparison> for GraphReport {
    fn from(comparison: &Comparison) -> Self {
        Self {
            graph_id: comparison.graph_id(),
            input_stats: InputStats {
                vertices: comparison.vertices(),
                edges: comparison.edges(),
            },
            prim: MstReport::from(comparison.prim()),
            kruskal: MstReport::from(comparison.kruskal()),
        }
    }
}

/// Top-level report document: `{"results": [...]}`.
///
/// # Examples
/// ```
/// use mstbench_core::{Edge, Graph, compare};
/// use mstbench_providers_json::BenchmarkReport;
///
/// let graph = Graph::new(1, vec!["A".into(), "B".into()], vec![Edge::new("A", "B", 2)])?;
/// let report = BenchmarkReport::from_comparisons([&compare(&graph)?]);
/// let mut csv = Vec::new();
/// report.write_csv(&mut csv)?;
/// let csv = String::from_utf8(csv)?;
/// assert!(csv.lines().nth(1).is_some_and(|row| row.starts_with("1,2,1,2,")));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct BenchmarkReport {
    /// Per-graph results in processing order.
    pub results: Vec<GraphReport>,
}

impl BenchmarkReport {
    /// Builds a report from comparisons in the order given.
    pub fn from_comparisons<'a>(comparisons: impl IntoIterator<Item = &'a Comparison>) -> Self {
        Self {
            results: comparisons.into_iter().map(GraphReport::from).collect(),
        }
    }

    /// Writes the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`JsonProviderError`] when serialisation or the write fails.
    pub fn write_json(&self, mut writer: impl Write) -> Result<(), JsonProviderError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Writes the report as CSV with [`CSV_HEADER`] and one row per graph.
    ///
    /// Times have two decimals and the last column is `YES` or `NO`.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Write`] when the write fails.
    pub fn write_csv(&self, mut writer: impl Write) -> Result<(), JsonProviderError> {
        writeln!(writer, "{CSV_HEADER}")?;
        for row in &self.results {
            writeln!(
                writer,
                "{},{},{},{},{},{:.2},{},{},{:.2},{}",
                row.graph_id,
                row.input_stats.vertices,
                row.input_stats.edges,
                row.prim.total_cost,
                row.prim.operations_count,
                row.prim.execution_time_ms,
                row.kruskal.total_cost,
                row.kruskal.operations_count,
                row.kruskal.execution_time_ms,
                if row.costs_match() { "YES" } else { "NO" },
            )?;
        }
        Ok(())
    }

    /// Writes the JSON report to `path`.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Io`] when the file cannot be created and
    /// otherwise fails like [`BenchmarkReport::write_json`].
    #[instrument(name = "report.save_json", err, skip_all, fields(path = field::Empty, results = self.results.len()))]
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), JsonProviderError> {
        let path = path.as_ref();
        Span::current().record("path", field::display(path.display()));
        let mut writer = BufWriter::new(create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the CSV report to `path`.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Io`] when the file cannot be created and
    /// otherwise fails like [`BenchmarkReport::write_csv`].
    #[instrument(name = "report.save_csv", err, skip_all, fields(path = field::Empty, results = self.results.len()))]
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<(), JsonProviderError> {
        let path = path.as_ref();
        Span::current().record("path", field::display(path.display()));
        let mut writer = BufWriter::new(create(path)?);
        self.write_csv(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
