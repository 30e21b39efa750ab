//! Shared fixtures for unit tests.

mod graph;

pub use graph::TestGraph;
