//! Bellman-Ford single-source shortest paths.
//!
//! Unlike Dijkstra, Bellman-Ford accepts negative edge costs. It relaxes every
//! edge for up to `|V| - 1` rounds, then makes one more pass: an edge that can
//! still be relaxed proves a negative-cost cycle reachable from the source.

use std::collections::HashMap;

use crate::{
    algorithms::dijkstra::ShortestPaths,
    graph::{Edge, EdgeCost, FiniteGraph, NodeId, Successors},
    Error, Result,
};

/// Computes shortest paths from `source`, allowing negative edge costs.
///
/// # Arguments
///
/// * `graph` - Finite graph with edge costs of any sign
/// * `source` - Node the paths start from
///
/// # Returns
///
/// The same [`ShortestPaths`] Dijkstra would produce on a non-negative graph.
/// A `source` outside the graph yields an empty result.
///
/// # Errors
///
/// Returns [`Error::NegativeCycle`] if a negative-cost cycle is reachable from
/// `source`. Shortest paths are undefined in that case, so no partial result
/// is returned.
///
/// # Complexity
///
/// - Time: O(V * E), with an early exit once a round relaxes nothing
/// - Space: O(V)
pub fn bellman_ford<G>(graph: &G, source: NodeId) -> Result<ShortestPaths>
where
    G: FiniteGraph + Successors + EdgeCost,
{
    if !graph.contains_node(source) {
        tracing::debug!(%source, "bellman-ford source not in graph");
        return Ok(ShortestPaths::empty(source));
    }

    let nodes: Vec<NodeId> = graph.node_ids().collect();
    let mut costs: HashMap<NodeId, f64> = HashMap::from([(source, 0.0)]);
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();

    let rounds = nodes.len().saturating_sub(1);
    let mut performed = 0;
    for _ in 0..rounds {
        performed += 1;
        let mut relaxed = false;

        for &node in &nodes {
            // Nodes not reached yet sit at infinity and relax nothing
            let Some(&base) = costs.get(&node) else {
                continue;
            };

            for successor in graph.successors(node) {
                let cost = base + graph.cost(Edge::new(node, successor));
                if costs.get(&successor).map_or(true, |&known| cost < known) {
                    costs.insert(successor, cost);
                    predecessors.insert(successor, node);
                    relaxed = true;
                }
            }
        }

        if !relaxed {
            break;
        }
    }

    for &node in &nodes {
        let Some(&base) = costs.get(&node) else {
            continue;
        };

        for successor in graph.successors(node) {
            let edge = Edge::new(node, successor);
            let cost = base + graph.cost(edge);
            if costs.get(&successor).is_some_and(|&known| cost < known) {
                tracing::warn!(%source, %edge, "bellman-ford found a negative cost cycle");
                return Err(Error::NegativeCycle {
                    origin: source,
                    edge,
                });
            }
        }
    }

    tracing::debug!(%source, rounds = performed, reachable = costs.len(), "bellman-ford finished");
    Ok(ShortestPaths::from_predecessors(source, costs, &predecessors))
}
