//! # graph-search Prelude
//!
//! The types, traits and algorithms most callers need, for a single glob
//! import.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The error type for all fallible operations
pub use crate::Error;

/// The result type used throughout the crate
pub use crate::Result;

/// Node identity and ordered edges
pub use crate::graph::{Edge, NodeId};

/// Algorithm configuration
pub use crate::{PivotStrategy, SearchConfig};

// ================================================================================================
// Capability Traits and Adapters
// ================================================================================================

/// Capabilities a graph can provide
pub use crate::graph::{
    EdgeCost, FiniteGraph, GraphBase, HeuristicCost, Neighbors, Predecessors, Successors,
};

/// Adapters supplying or replacing capabilities
pub use crate::graph::{NullHeuristic, Reversed, Undirected, UnitCost, WithHeuristic};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Shortest path searches
pub use crate::algorithms::{
    a_star, all_pairs_dijkstra, bellman_ford, breadth_first_search, depth_first_search, dijkstra,
    SearchOutcome, ShortestPaths,
};

/// Structural analysis
pub use crate::algorithms::{
    bron_kerbosch, degeneracy_ordering, dominators, post_dominators,
    strongly_connected_components, DegeneracyOrdering, DominatorSets,
};

/// Collections
pub use crate::{IndexedPriorityQueue, NodeSet};
