//! JSON graph documents and benchmark reports for mstbench.
//!
//! Graph input is a `{"graphs": [...]}` document; each graph is validated
//! through [`mstbench_core::Graph::new`] as it is loaded. Comparison results
//! are written as a JSON report and as a flat CSV table.

mod document;
mod errors;
mod provider;
mod report;

pub use document::{EdgeRecord, GraphDocument, GraphRecord};
pub use errors::{JsonProviderError, JsonProviderErrorCode};
pub use provider::JsonGraphProvider;
pub use report::{BenchmarkReport, CSV_HEADER, GraphReport, InputStats, MstReport};

#[cfg(test)]
mod tests;
