//! Property-based tests for the Prim and Kruskal engines.
//!
//! Both engines are checked against a sequential Kruskal oracle (and an
//! exhaustive oracle on small graphs), against structural invariants of
//! their output, and for run-to-run determinism across graph topologies with
//! varied weight distributions.

mod determinism;
mod equivalence;
mod oracle;
mod strategies;
mod types;
