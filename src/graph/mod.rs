//! Graph identity model and capability interfaces.
//!
//! This module defines what the algorithms need from a graph, and nothing
//! about how the graph is stored. Callers implement the capability traits for
//! their own storage; the algorithms in [`algorithms`](crate::algorithms) are
//! generic over them.
//!
//! # Key Components
//!
//! - [`NodeId`] - opaque node identity
//! - [`Edge`] - ordered `(head, tail)` pair
//! - [`GraphBase`], [`FiniteGraph`], [`Successors`], [`Predecessors`],
//!   [`Neighbors`], [`EdgeCost`], [`HeuristicCost`] - capability traits
//! - [`UnitCost`], [`NullHeuristic`], [`WithHeuristic`], [`Undirected`],
//!   [`Reversed`] - adapters supplying default behavior
//!
//! # Thread Safety
//!
//! Algorithms only ever take `&G`. Any number of them may run concurrently
//! over one graph as long as the graph is not mutated meanwhile.

mod adapters;
mod edge;
mod node;
mod traits;

pub(crate) use adapters::CheckedCosts;
pub use adapters::{NullHeuristic, Reversed, Undirected, UnitCost, WithHeuristic};
pub use edge::Edge;
pub use node::NodeId;
pub use traits::{
    EdgeCost, FiniteGraph, GraphBase, HeuristicCost, Neighbors, Predecessors, Successors,
};
