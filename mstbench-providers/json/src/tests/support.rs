use std::{fs, path::PathBuf};

use mstbench_core::{Comparison, Graph, compare};
use tempfile::TempDir;

use super::JsonGraphProvider;

/// Two connected graphs followed by a disconnected one.
pub(crate) const SAMPLE_DOCUMENT: &str = r#"{
  "graphs": [
    {
      "id": 1,
      "nodes": ["A", "B", "C", "D", "E"],
      "edges": [
        {"from": "A", "to": "B", "weight": 4},
        {"from": "A", "to": "C", "weight": 3},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "B", "to": "D", "weight": 5},
        {"from": "C", "to": "D", "weight": 7},
        {"from": "C", "to": "E", "weight": 8},
        {"from": "D", "to": "E", "weight": 6}
      ]
    },
    {
      "id": 2,
      "nodes": ["A", "B", "C", "D"],
      "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "A", "to": "C", "weight": 4},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "C", "to": "D", "weight": 3},
        {"from": "B", "to": "D", "weight": 5}
      ]
    },
    {
      "id": 3,
      "nodes": ["A", "B", "C", "D"],
      "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "C", "to": "D", "weight": 2}
      ]
    }
  ]
}"#;

pub(crate) fn sample_graphs() -> Vec<Graph> {
    JsonGraphProvider::try_from_reader(SAMPLE_DOCUMENT.as_bytes())
        .expect("sample document is valid")
        .into_graphs()
}

pub(crate) fn sample_comparisons() -> Vec<Comparison> {
    sample_graphs()
        .iter()
        .map(|graph| compare(graph).expect("comparison succeeds"))
        .collect()
}

/// Writes `contents` to `name` inside a fresh temporary directory.
pub(crate) fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    (dir, path)
}
