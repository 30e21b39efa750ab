//! Dominator and post-dominator sets.
//!
//! Node `d` dominates node `n` (with respect to a start node) if every path
//! from the start to `n` passes through `d`. Every node dominates itself and
//! the start dominates every node it reaches. Post-dominance is the same
//! relation computed from an end node over reversed edges.
//!
//! # Algorithm
//!
//! Iterative data-flow: the start is initialized to `{start}`, every other
//! node to the full node set, and
//!
//! ```text
//! dom(n) = {n} ∪ ⋂ dom(p)   for p in predecessors(n)
//! ```
//!
//! is applied until a pass changes nothing. The sets only shrink, so the
//! iteration terminates.
//!
//! Nodes unreachable from the start keep whatever the iteration leaves them
//! (the full set if they have no predecessors at all). Their sets are not
//! meaningful dominance information.

use std::collections::HashMap;

use crate::{
    graph::{FiniteGraph, NodeId, Predecessors, Reversed, Successors},
    utils::NodeSet,
};

/// Dominator sets keyed by node.
#[derive(Debug, Clone, PartialEq)]
pub struct DominatorSets {
    root: NodeId,
    sets: HashMap<NodeId, NodeSet>,
}

impl DominatorSets {
    /// Returns the start (or end, for post-dominators) node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the set of nodes dominating `node`.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&NodeSet> {
        self.sets.get(&node)
    }

    /// Returns `true` if `dominator` dominates `node`.
    #[must_use]
    pub fn dominates(&self, dominator: NodeId, node: NodeId) -> bool {
        self.sets.get(&node).is_some_and(|set| set.contains(dominator))
    }

    /// Returns `true` if `dominator` dominates `node` and differs from it.
    #[must_use]
    pub fn strictly_dominates(&self, dominator: NodeId, node: NodeId) -> bool {
        dominator != node && self.dominates(dominator, node)
    }

    /// Returns the closest strict dominator of `node`.
    ///
    /// For a node reachable from the root its dominators form a chain, and the
    /// immediate dominator is the one whose own set is exactly one smaller.
    /// Returns `None` for the root and for nodes without dominance
    /// information.
    #[must_use]
    pub fn immediate_dominator(&self, node: NodeId) -> Option<NodeId> {
        let set = self.sets.get(&node)?;
        set.iter().filter(|&candidate| candidate != node).find(|&candidate| {
            self.sets
                .get(&candidate)
                .is_some_and(|own| own.len() + 1 == set.len() && own.is_subset(set))
        })
    }

    /// Iterates over `(node, dominators)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeSet)> {
        self.sets.iter().map(|(&node, set)| (node, set))
    }

    /// Returns the number of nodes with a dominator set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` if the graph had no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<NodeId, NodeSet> {
        self.sets
    }
}

/// Computes the dominator set of every node with respect to `start`.
///
/// # Complexity
///
/// - Time: O(V² · passes) set operations; a handful of passes in practice
/// - Space: O(V²)
///
/// # Examples
///
/// ```rust,ignore
/// use graph_search::algorithms::dominators;
///
/// let dom = dominators(&cfg, entry);
/// assert!(dom.dominates(entry, exit));
/// ```
pub fn dominators<G>(graph: &G, start: NodeId) -> DominatorSets
where
    G: FiniteGraph + Predecessors,
{
    let nodes: Vec<NodeId> = graph.node_ids().collect();
    let all: NodeSet = nodes.iter().copied().collect();

    let mut sets: HashMap<NodeId, NodeSet> = nodes
        .iter()
        .map(|&node| {
            let initial = if node == start {
                NodeSet::singleton(start)
            } else {
                all.clone()
            };
            (node, initial)
        })
        .collect();

    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;

        for &node in &nodes {
            if node == start {
                continue;
            }

            let mut meet: Option<NodeSet> = None;
            for predecessor in graph.predecessors(node) {
                let Some(dominating) = sets.get(&predecessor) else {
                    continue;
                };
                meet = Some(match meet.take() {
                    None => dominating.clone(),
                    Some(mut acc) => {
                        acc.intersect_with(dominating);
                        acc
                    }
                });
            }

            // No predecessors: leave the set as initialized
            let Some(mut updated) = meet else {
                continue;
            };
            updated.insert(node);

            if sets.get(&node) != Some(&updated) {
                sets.insert(node, updated);
                changed = true;
            }
        }

        tracing::trace!(pass = passes, changed, "dominator pass");
        if !changed {
            break;
        }
    }

    tracing::debug!(%start, nodes = nodes.len(), passes, "dominators converged");
    DominatorSets { root: start, sets }
}

/// Computes the post-dominator set of every node with respect to `end`.
///
/// Node `d` post-dominates `n` if every path from `n` to `end` passes through
/// `d`. Equivalent to [`dominators`] over the [`Reversed`] graph.
pub fn post_dominators<G>(graph: &G, end: NodeId) -> DominatorSets
where
    G: FiniteGraph + Successors,
{
    dominators(&Reversed::new(graph), end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestGraph;

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    fn set(ids: &[usize]) -> NodeSet {
        ids.iter().map(|&id| n(id)).collect()
    }

    // 0 -> {1, 2} -> 3
    fn diamond() -> TestGraph {
        TestGraph::directed().edges(&[(0, 1), (0, 2), (1, 3), (2, 3)])
    }

    #[test]
    fn test_dominators_diamond() {
        let dom = dominators(&diamond(), n(0));

        assert_eq!(dom.root(), n(0));
        assert_eq!(dom.len(), 4);
        assert_eq!(dom.get(n(0)), Some(&set(&[0])));
        assert_eq!(dom.get(n(1)), Some(&set(&[0, 1])));
        assert_eq!(dom.get(n(2)), Some(&set(&[0, 2])));
        assert_eq!(dom.get(n(3)), Some(&set(&[0, 3])));
    }

    #[test]
    fn test_dominators_queries() {
        let dom = dominators(&diamond(), n(0));

        assert!(dom.dominates(n(0), n(3)));
        assert!(dom.dominates(n(3), n(3)));
        assert!(!dom.strictly_dominates(n(3), n(3)));
        assert!(!dom.dominates(n(1), n(3)));
        assert_eq!(dom.immediate_dominator(n(3)), Some(n(0)));
        assert_eq!(dom.immediate_dominator(n(0)), None);
    }

    #[test]
    fn test_dominators_loop() {
        // 0 -> 1 -> 2 -> 1, 2 -> 3
        let graph = TestGraph::directed().edges(&[(0, 1), (1, 2), (2, 1), (2, 3)]);
        let dom = dominators(&graph, n(0));

        assert_eq!(dom.get(n(2)), Some(&set(&[0, 1, 2])));
        assert_eq!(dom.get(n(3)), Some(&set(&[0, 1, 2, 3])));
        assert_eq!(dom.immediate_dominator(n(3)), Some(n(2)));
        assert_eq!(dom.immediate_dominator(n(1)), Some(n(0)));
    }

    #[test]
    fn test_dominators_unreachable_root_keeps_full_set() {
        let graph = diamond().edge(9, 3, 1.0);
        let dom = dominators(&graph, n(0));

        assert_eq!(dom.get(n(9)), Some(&set(&[0, 1, 2, 3, 9])));
        assert_eq!(dom.iter().count(), 5);
    }

    #[test]
    fn test_post_dominators_diamond() {
        let post = post_dominators(&diamond(), n(3));

        assert_eq!(post.get(n(3)), Some(&set(&[3])));
        assert_eq!(post.get(n(1)), Some(&set(&[1, 3])));
        assert_eq!(post.get(n(0)), Some(&set(&[0, 3])));
        assert!(post.dominates(n(3), n(0)));
    }

    #[test]
    fn test_dominators_empty_graph() {
        let dom = dominators(&TestGraph::directed(), n(0));
        assert!(dom.is_empty());
        assert!(dom.into_inner().is_empty());
    }
}
