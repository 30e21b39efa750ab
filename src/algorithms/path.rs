//! Path reconstruction and validation.

use std::collections::HashMap;

use crate::graph::{NodeId, Successors};

/// Rebuilds the forward path ending at `goal` from a predecessor map.
///
/// Searches record, for each discovered node, the node it was discovered
/// from. Following those links back from `goal` until a node with no
/// predecessor (the search source) and reversing yields the path.
///
/// The predecessor links must form a chain without cycles, which every search
/// in this crate guarantees.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use graph_search::{algorithms::rebuild_path, NodeId};
///
/// let n = NodeId::new;
/// let predecessors = HashMap::from([(n(1), n(0)), (n(2), n(1))]);
///
/// assert_eq!(rebuild_path(&predecessors, n(2)), vec![n(0), n(1), n(2)]);
/// assert_eq!(rebuild_path(&predecessors, n(0)), vec![n(0)]);
/// ```
#[must_use]
pub fn rebuild_path(predecessors: &HashMap<NodeId, NodeId>, goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = predecessors.get(&current) {
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}

/// Returns `true` if `path` is a walk along existing edges of `graph`.
///
/// An empty path is trivially valid. A single-node path is valid if the node
/// belongs to the graph. Longer paths are valid when every node is followed
/// by one of its successors.
///
/// # Examples
///
/// ```rust,ignore
/// let outcome = a_star(&graph, start, goal);
/// if let Some(path) = &outcome.path {
///     assert!(is_path(path, &graph));
/// }
/// ```
#[must_use]
pub fn is_path<G: Successors>(path: &[NodeId], graph: &G) -> bool {
    match path {
        [] => true,
        [node] => graph.contains_node(*node),
        _ => path
            .windows(2)
            .all(|pair| graph.is_successor(pair[0], pair[1])),
    }
}
