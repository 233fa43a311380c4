//! Benchmark support crate for mstbench.
//!
//! Builds the graphs and parameter labels used by the Criterion benchmarks
//! that time Prim's and Kruskal's engines side by side.

pub mod error;
pub mod params;
pub mod source;
