//! Small helpers shared across CLI tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, RunCommand, run_cli};

/// Textbook graph, a four-vertex graph, then a disconnected one.
pub(super) const INPUT_DOCUMENT: &str = r#"{"graphs": [
  {"id": 1, "nodes": ["A", "B", "C", "D", "E"], "edges": [
    {"from": "A", "to": "B", "weight": 4}, {"from": "A", "to": "C", "weight": 3},
    {"from": "B", "to": "C", "weight": 2}, {"from": "B", "to": "D", "weight": 5},
    {"from": "C", "to": "D", "weight": 7}, {"from": "C", "to": "E", "weight": 8},
    {"from": "D", "to": "E", "weight": 6}]},
  {"id": 2, "nodes": ["A", "B", "C", "D"], "edges": [
    {"from": "A", "to": "B", "weight": 1}, {"from": "A", "to": "C", "weight": 4},
    {"from": "B", "to": "C", "weight": 2}, {"from": "C", "to": "D", "weight": 3},
    {"from": "B", "to": "D", "weight": 5}]},
  {"id": 3, "nodes": ["A", "B", "C", "D"], "edges": [
    {"from": "A", "to": "B", "weight": 1}, {"from": "C", "to": "D", "weight": 2}]}
]}"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Err(err) = fs::write(&path, contents) {
        panic!("failed to write `{}`: {err}", path.display());
    }
    path
}

pub(super) fn run_cli_for(dir: &TempDir, input: PathBuf) -> Cli {
    Cli {
        command: Command::Run(RunCommand {
            input,
            output: dir.path().join("results.json"),
            csv: None,
        }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
