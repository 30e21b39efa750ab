//! Dijkstra single-source shortest paths.
//!
//! Computes the cheapest path from one source to every reachable node of a
//! graph with non-negative edge costs. [`all_pairs_dijkstra`] runs one search
//! per node in parallel.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    algorithms::path::rebuild_path,
    graph::{CheckedCosts, Edge, EdgeCost, FiniteGraph, NodeId, Successors},
    utils::IndexedPriorityQueue,
    Result, SearchConfig,
};

/// Shortest paths from one source to every node it reaches.
///
/// Nodes the source cannot reach are absent. The source itself is present
/// with cost `0.0` and the single-node path `[source]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: NodeId,
    paths: HashMap<NodeId, Vec<NodeId>>,
    costs: HashMap<NodeId, f64>,
}

impl ShortestPaths {
    pub(crate) fn empty(source: NodeId) -> Self {
        ShortestPaths {
            source,
            paths: HashMap::new(),
            costs: HashMap::new(),
        }
    }

    pub(crate) fn from_predecessors(
        source: NodeId,
        costs: HashMap<NodeId, f64>,
        predecessors: &HashMap<NodeId, NodeId>,
    ) -> Self {
        let paths = costs
            .keys()
            .map(|&node| (node, rebuild_path(predecessors, node)))
            .collect();

        ShortestPaths {
            source,
            paths,
            costs,
        }
    }

    /// Returns the node the paths start from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the cost of the cheapest path to `node`, if it is reachable.
    #[must_use]
    pub fn cost_to(&self, node: NodeId) -> Option<f64> {
        self.costs.get(&node).copied()
    }

    /// Returns the cheapest path to `node`, source and `node` included.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Option<&[NodeId]> {
        self.paths.get(&node).map(Vec::as_slice)
    }

    /// Returns `true` if `node` is reachable from the source.
    #[must_use]
    pub fn reaches(&self, node: NodeId) -> bool {
        self.costs.contains_key(&node)
    }

    /// Iterates over every reachable node, in no particular order.
    pub fn reachable(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.costs.keys().copied()
    }

    /// Returns the number of reachable nodes, the source included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns `true` if nothing is reachable, which only happens when the
    /// source is not part of the graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Returns the path map.
    #[must_use]
    pub fn paths(&self) -> &HashMap<NodeId, Vec<NodeId>> {
        &self.paths
    }

    /// Returns the cost map.
    #[must_use]
    pub fn costs(&self) -> &HashMap<NodeId, f64> {
        &self.costs
    }

    /// Splits the result into its path map and cost map.
    #[must_use]
    pub fn into_parts(self) -> (HashMap<NodeId, Vec<NodeId>>, HashMap<NodeId, f64>) {
        (self.paths, self.costs)
    }
}

/// Computes shortest paths from `source` to every reachable node.
///
/// Edge costs must be non-negative. Negative costs are not detected here and
/// produce unspecified results; see [`dijkstra_with`] for the checked variant
/// and [`bellman_ford`](crate::algorithms::bellman_ford) for graphs that
/// legitimately carry negative costs.
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust,ignore
/// use graph_search::algorithms::dijkstra;
///
/// let paths = dijkstra(&graph, source);
/// for node in paths.reachable() {
///     println!("{node}: {:?} via {:?}", paths.cost_to(node), paths.path_to(node));
/// }
/// ```
pub fn dijkstra<G>(graph: &G, source: NodeId) -> ShortestPaths
where
    G: Successors + EdgeCost,
{
    search(graph, source, || false)
}

/// [`dijkstra`] driven by a [`SearchConfig`].
///
/// # Errors
///
/// With `check_negative_costs` set, returns
/// [`Error::NegativeCost`](crate::Error::NegativeCost) for the first negative
/// edge cost the search observes.
pub fn dijkstra_with<G>(graph: &G, source: NodeId, config: &SearchConfig) -> Result<ShortestPaths>
where
    G: Successors + EdgeCost,
{
    if !config.check_negative_costs {
        return Ok(dijkstra(graph, source));
    }

    let checked = CheckedCosts::new(graph);
    let paths = search(&checked, source, || checked.has_violation());
    checked.finish()?;
    Ok(paths)
}

/// Runs [`dijkstra`] from every node of the graph, in parallel.
///
/// # Returns
///
/// A map from each source node to its [`ShortestPaths`].
pub fn all_pairs_dijkstra<G>(graph: &G) -> HashMap<NodeId, ShortestPaths>
where
    G: FiniteGraph + Successors + EdgeCost + Sync,
{
    let sources: Vec<NodeId> = graph.node_ids().collect();
    tracing::debug!(sources = sources.len(), "all-pairs dijkstra");

    sources
        .into_par_iter()
        .map(|source| (source, dijkstra(graph, source)))
        .collect()
}

fn search<G, F>(graph: &G, source: NodeId, halt: F) -> ShortestPaths
where
    G: Successors + EdgeCost,
    F: Fn() -> bool,
{
    if !graph.contains_node(source) {
        tracing::debug!(%source, "dijkstra source not in graph");
        return ShortestPaths::empty(source);
    }

    let mut costs: HashMap<NodeId, f64> = HashMap::from([(source, 0.0)]);
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut open = IndexedPriorityQueue::new();
    let mut settled = 0usize;

    open.push(source, 0.0, 0.0);

    while let Some(current) = open.pop() {
        settled += 1;
        if halt() {
            break;
        }

        for neighbor in graph.successors(current.node) {
            let cost = current.gscore + graph.cost(Edge::new(current.node, neighbor));

            match costs.get(&neighbor) {
                None => open.push(neighbor, cost, cost),
                Some(&known) if cost < known => {
                    // Settled nodes are final; only open entries may improve
                    if !open.fix(neighbor, cost, cost) {
                        continue;
                    }
                }
                Some(_) => continue,
            }

            costs.insert(neighbor, cost);
            predecessors.insert(neighbor, current.node);
        }
    }

    tracing::debug!(%source, settled, reachable = costs.len(), "dijkstra finished");
    ShortestPaths::from_predecessors(source, costs, &predecessors)
}
