// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graph-search
//!
//! Generic graph search and structure algorithms written against small
//! capability traits instead of a concrete graph type.
//!
//! Callers keep their own storage (adjacency lists, matrices, implicit grids,
//! views over other data structures) and implement only the capabilities an
//! algorithm asks for: node existence, enumeration, successors, predecessors,
//! neighbors, edge cost, heuristic cost. Missing capabilities are supplied by
//! borrowing adapters such as [`graph::UnitCost`] or [`graph::NullHeuristic`].
//!
//! ## Features
//!
//! - **Shortest paths** - A*, breadth-first search, Dijkstra (single-source
//!   and parallel all-pairs), Bellman-Ford with negative cycle detection
//! - **Reachability** - iterative depth-first search
//! - **Structure** - Tarjan strongly connected components and condensation,
//!   dominator and post-dominator sets
//! - **Undirected analysis** - degeneracy ordering, k-cores, Bron–Kerbosch
//!   maximal clique enumeration with pivoting
//!
//! ## Quick Start
//!
//! ```rust
//! use graph_search::prelude::*;
//!
//! // Nodes 0..10 on a line, each connected to the next
//! struct Line;
//!
//! impl GraphBase for Line {
//!     fn contains_node(&self, node: NodeId) -> bool {
//!         node.index() < 10
//!     }
//! }
//!
//! impl Successors for Line {
//!     fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
//!         (node.index() + 1 < 10)
//!             .then(|| NodeId::new(node.index() + 1))
//!             .into_iter()
//!     }
//! }
//!
//! let outcome = breadth_first_search(&Line, NodeId::new(2), NodeId::new(7));
//! assert_eq!(outcome.cost, 5.0);
//! assert_eq!(outcome.path.map(|p| p.len()), Some(6));
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - node identity, capability traits and adapters
//! - [`algorithms`] - the algorithms, one free function each
//! - [`NodeSet`] and [`IndexedPriorityQueue`] - the collections the
//!   algorithms are built on, exported for reuse
//! - [`SearchConfig`] - opt-in negative cost checks and pivot selection
//! - [`Error`] and [`Result`] - error handling
//! - [`prelude`] - convenient glob import
//!
//! ## Error Handling
//!
//! An unreachable goal is not an error: single-pair searches report it
//! through [`SearchOutcome::path`](algorithms::SearchOutcome) being `None`.
//! Fallible operations return [`Result<T>`](Result):
//!
//! ```rust,ignore
//! use graph_search::{algorithms::bellman_ford, Error};
//!
//! match bellman_ford(&graph, source) {
//!     Ok(paths) => println!("{} nodes reachable", paths.len()),
//!     Err(Error::NegativeCycle { edge, .. }) => println!("negative cycle through {edge}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! Algorithms emit [`tracing`](https://docs.rs/tracing) events: a `debug`
//! summary per run, `trace` detail for iterative passes, `warn` for detected
//! negative costs or cycles. Install any subscriber to see them.
//!
//! ## Cargo Features
//!
//! - `tomita-pivot` - make [`PivotStrategy::MaxNeighbors`] the default pivot
//!   for Bron–Kerbosch

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

mod config;
mod error;
mod utils;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,ignore
/// use graph_search::prelude::*;
///
/// let paths = dijkstra(&graph, NodeId::new(0));
/// ```
pub mod prelude;

/// Graph identity model, capability traits and adapters.
pub mod graph;

/// Graph algorithms over the capability traits in [`graph`].
pub mod algorithms;

pub use config::{PivotStrategy, SearchConfig};
pub use error::Error;
pub use graph::{
    Edge, EdgeCost, FiniteGraph, GraphBase, HeuristicCost, Neighbors, NodeId, Predecessors,
    Successors,
};
pub use utils::{IndexedPriorityQueue, NodeSet, NodeSetIter, QueueEntry};

/// `graph-search` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
