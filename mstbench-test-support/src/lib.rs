//! Shared test utilities used across the mstbench crates.

pub mod ci;
pub mod env;
pub mod tracing;
