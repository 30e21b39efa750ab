//! Unweighted path search: breadth-first and depth-first.

use std::collections::HashMap;

use crate::{
    algorithms::{
        astar::{a_star, SearchOutcome},
        path::rebuild_path,
    },
    graph::{NodeId, NullHeuristic, Successors, UnitCost},
    utils::NodeSet,
};

/// Finds a path from `start` to `goal` with the fewest edges.
///
/// Runs [`a_star`] over the graph with every edge costing `1.0` and the zero
/// heuristic, so [`SearchOutcome::cost`] is the number of edges on the path.
/// Edge costs of `graph`, if it has any, are ignored.
///
/// # Examples
///
/// ```rust,ignore
/// use graph_search::algorithms::breadth_first_search;
///
/// let outcome = breadth_first_search(&graph, start, goal);
/// assert_eq!(outcome.path.map(|p| p.len() - 1), Some(outcome.cost as usize));
/// ```
pub fn breadth_first_search<G: Successors>(
    graph: &G,
    start: NodeId,
    goal: NodeId,
) -> SearchOutcome {
    let unit = UnitCost::new(graph);
    a_star(&NullHeuristic::new(&unit), start, goal)
}

/// Finds some path from `start` to `goal` by depth-first exploration.
///
/// The path is valid but not necessarily short. Returns `None` if `goal` is
/// unreachable or `start` is not in the graph.
///
/// Uses an explicit stack, so deep graphs do not overflow the call stack.
pub fn depth_first_search<G: Successors>(
    graph: &G,
    start: NodeId,
    goal: NodeId,
) -> Option<Vec<NodeId>> {
    if !graph.contains_node(start) {
        return None;
    }

    let mut closed = NodeSet::new();
    let mut open = vec![start];
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();

    while let Some(current) = open.pop() {
        if closed.contains(current) {
            continue;
        }

        if current == goal {
            let path = rebuild_path(&predecessors, goal);
            tracing::debug!(
                %start,
                %goal,
                visited = closed.len(),
                hops = path.len() - 1,
                "dfs reached goal"
            );
            return Some(path);
        }

        closed.insert(current);

        for successor in graph.successors(current) {
            if closed.contains(successor) {
                continue;
            }
            // The latest discovery wins; it is the one popped first
            predecessors.insert(successor, current);
            open.push(successor);
        }
    }

    tracing::debug!(
        %start,
        %goal,
        visited = closed.len(),
        "dfs exhausted graph without reaching goal"
    );
    None
}
