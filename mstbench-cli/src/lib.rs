//! Support library for the `mstbench` binary.
//!
//! Exposes the command pipeline and logging setup so tests and doctests can
//! drive a benchmark run without spawning a subprocess.

pub mod cli;
pub mod logging;
