//! Identity-keyed node set.
//!
//! Unlike a bit set, [`NodeSet`] places no bound on node identities, which
//! lets it hold the sparse ids a caller's graph may hand out. Dominance
//! analysis uses it for dominator sets and Bron–Kerbosch for its candidate
//! and excluded sets.
//!
//! # Example
//!
//! ```rust
//! use graph_search::{NodeId, NodeSet};
//!
//! let a: NodeSet = [1, 2, 3].into_iter().map(NodeId::new).collect();
//! let b: NodeSet = [2, 3, 4].into_iter().map(NodeId::new).collect();
//!
//! let both = a.intersection(&b);
//! assert_eq!(both.len(), 2);
//! assert!(both.contains(NodeId::new(2)));
//! assert_eq!(a.union(&b).len(), 4);
//! ```

use std::collections::{btree_set, BTreeSet};

use crate::graph::NodeId;

/// A set of nodes keyed by identity.
///
/// Iteration yields nodes in ascending identity order, so algorithms that pick
/// "the first" member of a set behave the same on every run.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeSet {
    nodes: BTreeSet<NodeId>,
}

impl NodeSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        NodeSet {
            nodes: BTreeSet::new(),
        }
    }

    /// Creates a set holding a single node.
    #[must_use]
    pub fn singleton(node: NodeId) -> Self {
        let mut set = NodeSet::new();
        set.insert(node);
        set
    }

    /// Returns the number of nodes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the set holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds `node`. Returns `true` if it was not already present.
    pub fn insert(&mut self, node: NodeId) -> bool {
        self.nodes.insert(node)
    }

    /// Removes `node`. Returns `true` if it was present.
    pub fn remove(&mut self, node: NodeId) -> bool {
        self.nodes.remove(&node)
    }

    /// Returns `true` if `node` is in the set.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Returns the smallest node in the set.
    #[must_use]
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Returns `true` if every node of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &NodeSet) -> bool {
        self.nodes.is_subset(&other.nodes)
    }

    /// Returns a new set with the nodes present in either set.
    #[must_use]
    pub fn union(&self, other: &NodeSet) -> NodeSet {
        NodeSet {
            nodes: self.nodes.union(&other.nodes).copied().collect(),
        }
    }

    /// Returns a new set with the nodes present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &NodeSet) -> NodeSet {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        NodeSet {
            nodes: small
                .nodes
                .iter()
                .filter(|node| large.nodes.contains(node))
                .copied()
                .collect(),
        }
    }

    /// Adds every node of `other` (in place).
    ///
    /// Returns `true` if `self` changed.
    pub fn union_with(&mut self, other: &NodeSet) -> bool {
        let before = self.len();
        self.nodes.extend(other.nodes.iter().copied());
        self.len() != before
    }

    /// Keeps only the nodes also present in `other` (in place).
    ///
    /// Returns `true` if `self` changed.
    pub fn intersect_with(&mut self, other: &NodeSet) -> bool {
        let before = self.len();
        self.nodes.retain(|node| other.nodes.contains(node));
        self.len() != before
    }

    /// Returns an iterator over the nodes in ascending identity order.
    pub fn iter(&self) -> NodeSetIter<'_> {
        NodeSetIter {
            inner: self.nodes.iter(),
        }
    }
}

impl std::fmt::Debug for NodeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for node in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{node}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// Iterator over the nodes of a [`NodeSet`].
pub struct NodeSetIter<'a> {
    inner: btree_set::Iter<'a, NodeId>,
}

impl Iterator for NodeSetIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for NodeSetIter<'_> {}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = NodeId;
    type IntoIter = NodeSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for NodeSet {
    type Item = NodeId;
    type IntoIter = btree_set::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        NodeSet {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<NodeId> for NodeSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}
