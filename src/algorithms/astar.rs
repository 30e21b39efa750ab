//! A* heuristic-guided shortest path search.
//!
//! A* expands the open node with the smallest `gscore + h(node, goal)`, where
//! `gscore` is the best known cost from the start. With an admissible
//! heuristic (one that never overestimates the remaining cost) the first time
//! the goal is popped its `gscore` is optimal.
//!
//! A closed node is reopened when a strictly cheaper route to it turns up.
//! That only happens for heuristics that are admissible but not consistent;
//! with a consistent heuristic no node is expanded twice.
//!
//! # Negative Costs
//!
//! Edge costs and heuristic estimates must be non-negative. [`a_star`] does
//! not check this: negative values produce unspecified results, and a
//! negative-cost cycle may keep the search from terminating. Use
//! [`a_star_with`] and [`SearchConfig::strict`] to have them detected.

use std::collections::HashMap;

use crate::{
    algorithms::path::rebuild_path,
    graph::{CheckedCosts, Edge, EdgeCost, HeuristicCost, NodeId, Successors},
    utils::IndexedPriorityQueue,
    Result, SearchConfig,
};

/// Result of a single-pair search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// The path from start to goal, both included; `None` if the goal is
    /// unreachable
    pub path: Option<Vec<NodeId>>,
    /// Total cost of `path`; `0.0` when no path was found
    pub cost: f64,
    /// Number of nodes taken off the frontier during the search
    pub expanded: usize,
}

impl SearchOutcome {
    fn not_found(expanded: usize) -> Self {
        SearchOutcome {
            path: None,
            cost: 0.0,
            expanded,
        }
    }

    /// Returns `true` if a path to the goal was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// Finds a least-cost path from `start` to `goal`.
///
/// # Arguments
///
/// * `graph` - Graph providing successors, edge costs and a heuristic. Wrap
///   it in [`NullHeuristic`](crate::graph::NullHeuristic) or
///   [`WithHeuristic`](crate::graph::WithHeuristic) if it has no heuristic.
/// * `start` - Search source
/// * `goal` - Search target
///
/// # Returns
///
/// The path, its cost and the number of expanded nodes. An unreachable goal
/// (or a `start` that is not in the graph) yields `path: None` and cost `0.0`.
///
/// # Complexity
///
/// - Time: O((V + E) log V) with a consistent heuristic
/// - Space: O(V)
///
/// # Examples
///
/// ```rust,ignore
/// use graph_search::{algorithms::a_star, graph::NullHeuristic};
///
/// let outcome = a_star(&NullHeuristic::new(&graph), start, goal);
/// if let Some(path) = outcome.path {
///     println!("{} nodes, cost {}, {} expanded", path.len(), outcome.cost, outcome.expanded);
/// }
/// ```
pub fn a_star<G>(graph: &G, start: NodeId, goal: NodeId) -> SearchOutcome
where
    G: Successors + EdgeCost + HeuristicCost,
{
    search(graph, start, goal, || false)
}

/// [`a_star`] driven by a [`SearchConfig`].
///
/// # Errors
///
/// With `check_negative_costs` set, returns [`Error::NegativeCost`] or
/// [`Error::NegativeHeuristic`] for the first negative value the search
/// observes. The search stops at the next expansion after the violation.
///
/// [`Error::NegativeCost`]: crate::Error::NegativeCost
/// [`Error::NegativeHeuristic`]: crate::Error::NegativeHeuristic
pub fn a_star_with<G>(
    graph: &G,
    start: NodeId,
    goal: NodeId,
    config: &SearchConfig,
) -> Result<SearchOutcome>
where
    G: Successors + EdgeCost + HeuristicCost,
{
    if !config.check_negative_costs {
        return Ok(a_star(graph, start, goal));
    }

    let checked = CheckedCosts::new(graph);
    let outcome = search(&checked, start, goal, || checked.has_violation());
    checked.finish()?;
    Ok(outcome)
}

fn search<G, F>(graph: &G, start: NodeId, goal: NodeId, halt: F) -> SearchOutcome
where
    G: Successors + EdgeCost + HeuristicCost,
    F: Fn() -> bool,
{
    if !graph.contains_node(start) {
        tracing::debug!(%start, "a* start node not in graph");
        return SearchOutcome::not_found(0);
    }

    let mut open = IndexedPriorityQueue::new();
    // gscore at the time each node was expanded
    let mut closed: HashMap<NodeId, f64> = HashMap::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut expanded = 0;

    open.push(start, 0.0, graph.heuristic_cost(start, goal));

    while let Some(current) = open.pop() {
        expanded += 1;

        // After a violation the predecessor map may hold a cycle
        if halt() {
            break;
        }

        if current.node == goal {
            let path = rebuild_path(&predecessors, goal);
            tracing::debug!(
                %start,
                %goal,
                expanded,
                cost = current.gscore,
                hops = path.len() - 1,
                "a* reached goal"
            );
            return SearchOutcome {
                path: Some(path),
                cost: current.gscore,
                expanded,
            };
        }

        closed.insert(current.node, current.gscore);

        for neighbor in graph.successors(current.node) {
            let gscore = current.gscore + graph.cost(Edge::new(current.node, neighbor));

            if let Some(&settled) = closed.get(&neighbor) {
                if gscore >= settled {
                    continue;
                }
                closed.remove(&neighbor);
            }

            if open.find(neighbor).is_some_and(|entry| gscore >= entry.gscore) {
                continue;
            }

            predecessors.insert(neighbor, current.node);
            open.push(
                neighbor,
                gscore,
                gscore + graph.heuristic_cost(neighbor, goal),
            );
        }
    }

    tracing::debug!(%start, %goal, expanded, "a* exhausted frontier without reaching goal");
    SearchOutcome::not_found(expanded)
}
