//! Command-line interface for the MST benchmark.
//!
//! `run` compares Prim and Kruskal on every connected graph of a JSON
//! document and writes JSON and CSV reports. `generate` writes a seeded
//! random graph suite in the same input format.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, GenerateSummary, RunCommand,
    RunSummary, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
