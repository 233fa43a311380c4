//! Command implementations and argument parsing for the `mstbench` CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mstbench_core::{
    Comparison, Graph, GraphError, GraphGenerator, MstError, SuiteTier, compare_all,
};
use mstbench_providers_json::{BenchmarkReport, JsonGraphProvider, JsonProviderError};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

const DEFAULT_OUTPUT: &str = "output.json";
const DEFAULT_SEED: u64 = 42;
const RULE_WIDTH: usize = 90;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mstbench",
    about = "Compare Prim's and Kruskal's minimum spanning tree algorithms."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run both engines over every graph in a JSON document.
    Run(RunCommand),
    /// Write a seeded random graph suite as a JSON document.
    Generate(GenerateCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// JSON document with a top-level `graphs` array.
    pub input: PathBuf,

    /// Destination of the JSON report.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Destination of the CSV report (defaults to the output path with a
    /// `.csv` extension).
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl RunCommand {
    /// Returns the CSV destination, derived from the output path when unset.
    #[must_use]
    pub fn csv_path(&self) -> PathBuf {
        self.csv
            .clone()
            .unwrap_or_else(|| self.output.with_extension("csv"))
    }
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Destination of the generated JSON document.
    #[arg(long, short)]
    pub output: PathBuf,

    /// Seed for the random number generator.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Comma-separated vertex counts, one graph each. Without it the
    /// standard benchmark suite is written.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub sizes: Option<Vec<usize>>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input document or writing an output file failed.
    #[error(transparent)]
    Provider(#[from] JsonProviderError),
    /// An MST engine reported an internal failure.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// The generator produced a graph that failed validation.
    #[error("failed to generate graph suite: {0}")]
    Generate(#[from] GraphError),
}

impl CliError {
    /// Returns the stable code of the underlying library error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Provider(err) => err.code().as_str(),
            Self::Mst(err) => err.code().as_str(),
            Self::Generate(err) => err.code().as_str(),
        }
    }

    /// Returns the code of the error nested inside the library error, if any.
    #[must_use]
    pub fn detail_code(&self) -> Option<&'static str> {
        match self {
            Self::Provider(err) => err.graph_code().map(|code| code.as_str()),
            Self::Mst(err) => err.union_find_code().map(|code| code.as_str()),
            Self::Generate(_) => None,
        }
    }
}

/// Outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Comparisons for the connected graphs, in document order.
    pub comparisons: Vec<Comparison>,
    /// Identifiers of the disconnected graphs that were skipped.
    pub skipped: Vec<u32>,
    /// Where the JSON report was written.
    pub json_path: PathBuf,
    /// Where the CSV report was written.
    pub csv_path: PathBuf,
}

/// Outcome of a `generate` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of graphs written.
    pub graphs: usize,
    /// Vertex count of each written graph.
    pub sizes: Vec<usize>,
    /// Where the document was written.
    pub output: PathBuf,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A benchmark run.
    Run(RunSummary),
    /// A generated graph suite.
    Generate(GenerateSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, comparing or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use mstbench_cli::cli::{Cli, Command, ExecutionSummary, RunCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("graphs.json");
/// std::fs::write(
///     &input,
///     r#"{"graphs": [{"id": 7, "nodes": ["A", "B", "C"],
///         "edges": [{"from": "A", "to": "B", "weight": 2},
///                   {"from": "B", "to": "C", "weight": 1}]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input,
///         output: dir.path().join("results.json"),
///         csv: None,
///     }),
/// };
/// let ExecutionSummary::Run(summary) = run_cli(cli)? else {
///     unreachable!("run yields a run summary");
/// };
/// assert_eq!(summary.comparisons[0].prim().total_cost(), 3);
/// assert!(summary.csv_path.ends_with("results.csv"));
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(&run).map(ExecutionSummary::Run)
        }
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            generate_command(&generate).map(ExecutionSummary::Generate)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(input = field::Empty, graphs = field::Empty, skipped = field::Empty),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<RunSummary, CliError> {
    let span = Span::current();
    span.record("input", field::display(command.input.display()));

    let provider = JsonGraphProvider::try_from_path(&command.input)?;
    span.record("graphs", provider.len());

    let (connected, disconnected): (Vec<Graph>, Vec<Graph>) = provider
        .into_graphs()
        .into_iter()
        .partition(Graph::is_connected);
    for graph in &disconnected {
        warn!(
            graph_id = graph.id(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "skipping disconnected graph"
        );
    }
    span.record("skipped", disconnected.len());

    let comparisons = compare_all(&connected)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let json_path = command.output.clone();
    let csv_path = command.csv_path();
    let report = BenchmarkReport::from_comparisons(&comparisons);
    report.save_json(&json_path)?;
    report.save_csv(&csv_path)?;

    info!(
        compared = comparisons.len(),
        mismatches = comparisons.iter().filter(|c| !c.costs_match()).count(),
        "benchmark completed"
    );
    Ok(RunSummary {
        comparisons,
        skipped: disconnected.iter().map(Graph::id).collect(),
        json_path,
        csv_path,
    })
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(output = field::Empty, seed = command.seed),
)]
pub(super) fn generate_command(command: &GenerateCommand) -> Result<GenerateSummary, CliError> {
    Span::current().record("output", field::display(command.output.display()));

    let mut generator = GraphGenerator::new(command.seed);
    let graphs = match &command.sizes {
        Some(sizes) => generator.generate_suite(&single_graph_tiers(sizes))?,
        None => generator.standard_suite()?,
    };
    let sizes: Vec<usize> = graphs.iter().map(Graph::vertex_count).collect();

    let provider = JsonGraphProvider::from_graphs(graphs);
    provider.save(&command.output)?;
    info!(graphs = provider.len(), "graph suite written");
    Ok(GenerateSummary {
        graphs: provider.len(),
        sizes,
        output: command.output.clone(),
    })
}

fn single_graph_tiers(sizes: &[usize]) -> Vec<SuiteTier> {
    sizes
        .iter()
        .map(|&vertices| SuiteTier { count: 1, vertices })
        .collect()
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// A run prints one table row per compared graph; a generation prints the
/// number of graphs and their destination.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use mstbench_cli::cli::{ExecutionSummary, GenerateSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Generate(GenerateSummary {
///     graphs: 2,
///     sizes: vec![10, 20],
///     output: PathBuf::from("suite.json"),
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "generated 2 graph(s) in suite.json\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Run(run) => render_run(run, &mut writer),
        ExecutionSummary::Generate(generate) => writeln!(
            writer,
            "generated {} graph(s) in {}",
            generate.graphs,
            generate.output.display()
        ),
    }
}

fn render_run(run: &RunSummary, writer: &mut impl Write) -> io::Result<()> {
    let header = format!(
        "{:<10} {:<10} {:<15} {:<15} {:<20} {:<20}",
        "Graph ID", "Vertices", "Prim Cost", "Kruskal Cost", "Prim Time (ms)", "Kruskal Time (ms)"
    );
    writeln!(writer, "{}", header.trim_end())?;
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
    for comparison in &run.comparisons {
        let row = format!(
            "{:<10} {:<10} {:<15} {:<15} {:<20.2} {:<20.2}",
            comparison.graph_id(),
            comparison.vertices(),
            comparison.prim().total_cost(),
            comparison.kruskal().total_cost(),
            comparison.prim().elapsed_ms(),
            comparison.kruskal().elapsed_ms(),
        );
        writeln!(writer, "{}", row.trim_end())?;
    }
    if !run.skipped.is_empty() {
        let ids: Vec<String> = run.skipped.iter().map(u32::to_string).collect();
        writeln!(writer, "skipped disconnected: {}", ids.join(", "))?;
    }
    writeln!(writer, "JSON report: {}", run.json_path.display())?;
    writeln!(writer, "CSV report: {}", run.csv_path.display())
}
