//! Node identity.
//!
//! Every algorithm in this crate addresses nodes exclusively through [`NodeId`].
//! Nodes are owned by the caller's graph; the algorithms never create them, they
//! only read identities back out of the capability traits in
//! [capability traits](crate::graph#key-components).

use std::fmt;

/// Opaque identity of a node within one graph instance.
///
/// `NodeId` wraps a `usize`. The only contract is uniqueness within a graph:
/// identities may be sparse and need not start at zero, so no algorithm in
/// this crate uses them as dense vector indices.
///
/// # Examples
///
/// ```rust
/// use graph_search::NodeId;
/// use std::collections::HashMap;
///
/// let a = NodeId::new(7);
/// let b: NodeId = 42usize.into();
/// assert!(a < b);
///
/// let mut labels: HashMap<NodeId, &str> = HashMap::new();
/// labels.insert(a, "entry");
/// assert_eq!(labels[&a], "entry");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a node identity from its raw integer value.
    #[must_use]
    #[inline]
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Returns the raw integer value of this identity.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(id: usize) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
