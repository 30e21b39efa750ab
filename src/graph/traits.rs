//! Capability traits the algorithms are written against.
//!
//! Graph storage is the caller's business. Each algorithm states the smallest
//! set of capabilities it needs, and any type implementing them can be passed
//! in: an adjacency list, a dense matrix, a view over a database, or one of the
//! [adapters](crate::graph#key-components) wrapped around another graph.
//!
//! # Hierarchy
//!
//! - [`GraphBase`] - node existence
//! - [`FiniteGraph`] - finite node enumeration
//! - [`Successors`] / [`Predecessors`] - directed adjacency
//! - [`Neighbors`] - undirected adjacency and degree
//! - [`EdgeCost`] - real-valued edge cost
//! - [`HeuristicCost`] - cost-to-goal estimate for A*
//!
//! All adjacency queries return iterators. No order is required; algorithms
//! that need determinism impose their own.

use crate::graph::{Edge, NodeId};

/// Core graph property: whether a node belongs to the graph.
pub trait GraphBase {
    /// Returns `true` if `node` is part of this graph.
    fn contains_node(&self, node: NodeId) -> bool;
}

/// Graphs whose node set can be enumerated.
///
/// Required by every algorithm that must look at all nodes rather than only
/// those reachable from a start node.
pub trait FiniteGraph: GraphBase {
    /// Returns an iterator over every node in the graph.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize {
        self.node_ids().count()
    }
}

/// Forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use graph_search::{GraphBase, NodeId, Successors};
///
/// // A ring of five nodes: i -> i + 1 (mod 5)
/// struct Ring;
///
/// impl GraphBase for Ring {
///     fn contains_node(&self, node: NodeId) -> bool {
///         node.index() < 5
///     }
/// }
///
/// impl Successors for Ring {
///     fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
///         std::iter::once(NodeId::new((node.index() + 1) % 5))
///     }
/// }
///
/// assert!(Ring.is_successor(NodeId::new(4), NodeId::new(0)));
/// assert!(!Ring.is_successor(NodeId::new(0), NodeId::new(4)));
/// ```
pub trait Successors: GraphBase {
    /// Returns the targets of all edges leaving `node`.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if the edge `node -> successor` exists.
    fn is_successor(&self, node: NodeId, successor: NodeId) -> bool {
        self.successors(node).any(|s| s == successor)
    }
}

/// Backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns the sources of all edges entering `node`.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if the edge `predecessor -> node` exists.
    fn is_predecessor(&self, node: NodeId, predecessor: NodeId) -> bool {
        self.predecessors(node).any(|p| p == predecessor)
    }
}

/// Undirected adjacency.
///
/// For an undirected graph every connection is visible from both endpoints.
/// [`degree`](Neighbors::degree) must agree with the number of items
/// [`neighbors`](Neighbors::neighbors) yields; degeneracy ordering panics on
/// graphs where it does not.
pub trait Neighbors: GraphBase {
    /// Returns every node adjacent to `node`.
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if `node` and `other` are adjacent.
    fn is_neighbor(&self, node: NodeId, other: NodeId) -> bool {
        self.neighbors(node).any(|n| n == other)
    }

    /// Returns the number of neighbors of `node`.
    fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).count()
    }
}

/// Per-edge cost.
///
/// Dijkstra and A* require non-negative costs and do not check for them
/// unless asked to through [`SearchConfig`](crate::SearchConfig). A negative
/// cost fed to either produces unspecified results, not merely suboptimal
/// ones. Bellman-Ford accepts any finite cost.
pub trait EdgeCost: GraphBase {
    /// Returns the cost of traversing `edge`.
    fn cost(&self, edge: Edge) -> f64;
}

/// Cost-to-goal estimate used by A*.
///
/// The estimate must be admissible (never exceed the true remaining cost) for
/// A* to return optimal paths, and must be non-negative. Graphs without a
/// natural heuristic can be wrapped in
/// [`NullHeuristic`](crate::graph::NullHeuristic) or
/// [`WithHeuristic`](crate::graph::WithHeuristic).
pub trait HeuristicCost: GraphBase {
    /// Returns the estimated cost of the cheapest path from `node` to `goal`.
    fn heuristic_cost(&self, node: NodeId, goal: NodeId) -> f64;
}
