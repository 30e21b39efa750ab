//! Directed edge value type.

use std::fmt;

use crate::graph::NodeId;

/// An ordered `(head, tail)` pair of node identities.
///
/// The edge leaves `head` and enters `tail`. Undirected graphs expose each
/// connection in both directions through their capability traits; `Edge`
/// itself is always directed.
///
/// Costs are not stored on the edge. Algorithms ask the graph for them through
/// [`EdgeCost::cost`](crate::graph::EdgeCost::cost), which lets adapters such
/// as [`UnitCost`](crate::graph::UnitCost) substitute their own.
///
/// # Examples
///
/// ```rust
/// use graph_search::{Edge, NodeId};
///
/// let edge = Edge::new(NodeId::new(0), NodeId::new(1));
/// assert_eq!(edge.head(), NodeId::new(0));
/// assert_eq!(edge.reversed().head(), NodeId::new(1));
/// assert_eq!(edge.to_string(), "n0 -> n1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    head: NodeId,
    tail: NodeId,
}

impl Edge {
    /// Creates the edge `head -> tail`.
    #[must_use]
    #[inline]
    pub const fn new(head: NodeId, tail: NodeId) -> Self {
        Edge { head, tail }
    }

    /// Returns the node the edge leaves.
    #[must_use]
    #[inline]
    pub const fn head(self) -> NodeId {
        self.head
    }

    /// Returns the node the edge enters.
    #[must_use]
    #[inline]
    pub const fn tail(self) -> NodeId {
        self.tail
    }

    /// Returns the edge `tail -> head`.
    #[must_use]
    #[inline]
    pub const fn reversed(self) -> Self {
        Edge {
            head: self.tail,
            tail: self.head,
        }
    }

    /// Returns `true` if the edge starts and ends at the same node.
    #[must_use]
    #[inline]
    pub fn is_self_loop(self) -> bool {
        self.head == self.tail
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {})", self.head.0, self.tail.0)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.head, self.tail)
    }
}

impl From<(NodeId, NodeId)> for Edge {
    #[inline]
    fn from((head, tail): (NodeId, NodeId)) -> Self {
        Edge::new(head, tail)
    }
}
