//! Borrowing adapters that add or replace graph capabilities.
//!
//! Algorithms take the capabilities they need as trait bounds. When a graph
//! lacks one, or a caller wants different behavior, wrap the graph once at the
//! call site instead of special-casing inside the algorithm:
//!
//! | Adapter | Effect |
//! |---------|--------|
//! | [`UnitCost`] | every edge costs `1.0` |
//! | [`NullHeuristic`] | heuristic is always `0.0` |
//! | [`WithHeuristic`] | heuristic supplied by a closure |
//! | [`Undirected`] | neighbors act as successors and predecessors |
//! | [`Reversed`] | successors and predecessors swap |
//!
//! Every adapter forwards the capabilities it does not replace, so adapters
//! compose: breadth-first search is A* over
//! `NullHeuristic<UnitCost<G>>`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use graph_search::{algorithms::a_star, graph::WithHeuristic};
//!
//! // Manhattan distance on a grid whose node ids encode (row, col)
//! let grid = build_grid(10, 10);
//! let guided = WithHeuristic::new(&grid, |node, goal| manhattan(node, goal));
//! let outcome = a_star(&guided, start, goal);
//! ```

use std::cell::Cell;

use crate::{
    graph::{
        Edge, EdgeCost, FiniteGraph, GraphBase, HeuristicCost, Neighbors, NodeId, Predecessors,
        Successors,
    },
    Error, Result,
};

/// Implements the structural capabilities of an adapter by delegating to the
/// wrapped `graph` field.
macro_rules! forward_structure {
    ($adapter:ident $(, $extra:ident)*) => {
        impl<G: GraphBase $(, $extra)*> GraphBase for $adapter<'_, G $(, $extra)*> {
            fn contains_node(&self, node: NodeId) -> bool {
                self.graph.contains_node(node)
            }
        }

        impl<G: FiniteGraph $(, $extra)*> FiniteGraph for $adapter<'_, G $(, $extra)*> {
            fn node_ids(&self) -> impl Iterator<Item = NodeId> {
                self.graph.node_ids()
            }

            fn node_count(&self) -> usize {
                self.graph.node_count()
            }
        }

        impl<G: Successors $(, $extra)*> Successors for $adapter<'_, G $(, $extra)*> {
            fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
                self.graph.successors(node)
            }

            fn is_successor(&self, node: NodeId, successor: NodeId) -> bool {
                self.graph.is_successor(node, successor)
            }
        }

        impl<G: Predecessors $(, $extra)*> Predecessors for $adapter<'_, G $(, $extra)*> {
            fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
                self.graph.predecessors(node)
            }

            fn is_predecessor(&self, node: NodeId, predecessor: NodeId) -> bool {
                self.graph.is_predecessor(node, predecessor)
            }
        }

        impl<G: Neighbors $(, $extra)*> Neighbors for $adapter<'_, G $(, $extra)*> {
            fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
                self.graph.neighbors(node)
            }

            fn is_neighbor(&self, node: NodeId, other: NodeId) -> bool {
                self.graph.is_neighbor(node, other)
            }

            fn degree(&self, node: NodeId) -> usize {
                self.graph.degree(node)
            }
        }
    };
}

/// Replaces every edge cost with `1.0`.
///
/// Shortest paths over a `UnitCost` graph are paths with the fewest edges.
pub struct UnitCost<'g, G> {
    graph: &'g G,
}

impl<'g, G> UnitCost<'g, G> {
    /// Wraps `graph`.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        UnitCost { graph }
    }
}

forward_structure!(UnitCost);

impl<G: GraphBase> EdgeCost for UnitCost<'_, G> {
    fn cost(&self, _edge: Edge) -> f64 {
        1.0
    }
}

impl<G: HeuristicCost> HeuristicCost for UnitCost<'_, G> {
    fn heuristic_cost(&self, node: NodeId, goal: NodeId) -> f64 {
        self.graph.heuristic_cost(node, goal)
    }
}

/// Supplies the always-zero heuristic.
///
/// A* over a `NullHeuristic` graph is uniform-cost search.
pub struct NullHeuristic<'g, G> {
    graph: &'g G,
}

impl<'g, G> NullHeuristic<'g, G> {
    /// Wraps `graph`.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        NullHeuristic { graph }
    }
}

forward_structure!(NullHeuristic);

impl<G: GraphBase> HeuristicCost for NullHeuristic<'_, G> {
    fn heuristic_cost(&self, _node: NodeId, _goal: NodeId) -> f64 {
        0.0
    }
}

impl<G: EdgeCost> EdgeCost for NullHeuristic<'_, G> {
    fn cost(&self, edge: Edge) -> f64 {
        self.graph.cost(edge)
    }
}

/// Supplies a heuristic from a closure `Fn(node, goal) -> estimate`.
///
/// Use this for graphs that carry no heuristic of their own. The closure must
/// be admissible for A* to return optimal paths.
pub struct WithHeuristic<'g, G, F> {
    graph: &'g G,
    heuristic: F,
}

impl<'g, G, F> WithHeuristic<'g, G, F>
where
    F: Fn(NodeId, NodeId) -> f64,
{
    /// Wraps `graph`, answering heuristic queries with `heuristic`.
    #[must_use]
    pub fn new(graph: &'g G, heuristic: F) -> Self {
        WithHeuristic { graph, heuristic }
    }
}

forward_structure!(WithHeuristic, F);

impl<G, F> HeuristicCost for WithHeuristic<'_, G, F>
where
    G: GraphBase,
    F: Fn(NodeId, NodeId) -> f64,
{
    fn heuristic_cost(&self, node: NodeId, goal: NodeId) -> f64 {
        (self.heuristic)(node, goal)
    }
}

impl<G: EdgeCost, F> EdgeCost for WithHeuristic<'_, G, F> {
    fn cost(&self, edge: Edge) -> f64 {
        self.graph.cost(edge)
    }
}

/// Treats an undirected graph as directed in both directions.
///
/// Every neighbor is exposed as a successor and as a predecessor, so the
/// directed algorithms (A*, Dijkstra, SCC, ...) run unchanged over undirected
/// input.
pub struct Undirected<'g, G> {
    graph: &'g G,
}

impl<'g, G: Neighbors> Undirected<'g, G> {
    /// Wraps `graph`.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Undirected { graph }
    }
}

impl<G: GraphBase> GraphBase for Undirected<'_, G> {
    fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }
}

impl<G: FiniteGraph> FiniteGraph for Undirected<'_, G> {
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.graph.node_ids()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

impl<G: Neighbors> Neighbors for Undirected<'_, G> {
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.neighbors(node)
    }

    fn is_neighbor(&self, node: NodeId, other: NodeId) -> bool {
        self.graph.is_neighbor(node, other)
    }

    fn degree(&self, node: NodeId) -> usize {
        self.graph.degree(node)
    }
}

impl<G: Neighbors> Successors for Undirected<'_, G> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.neighbors(node)
    }

    fn is_successor(&self, node: NodeId, successor: NodeId) -> bool {
        self.graph.is_neighbor(node, successor)
    }
}

impl<G: Neighbors> Predecessors for Undirected<'_, G> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.neighbors(node)
    }

    fn is_predecessor(&self, node: NodeId, predecessor: NodeId) -> bool {
        self.graph.is_neighbor(node, predecessor)
    }
}

impl<G: EdgeCost> EdgeCost for Undirected<'_, G> {
    fn cost(&self, edge: Edge) -> f64 {
        self.graph.cost(edge)
    }
}

impl<G: HeuristicCost> HeuristicCost for Undirected<'_, G> {
    fn heuristic_cost(&self, node: NodeId, goal: NodeId) -> f64 {
        self.graph.heuristic_cost(node, goal)
    }
}

/// Reverses every edge of a directed graph.
///
/// Successors become predecessors and vice versa, and [`EdgeCost::cost`] is
/// answered for the original orientation of the edge. Post-dominance is
/// dominance over the reversed graph.
pub struct Reversed<'g, G> {
    graph: &'g G,
}

impl<'g, G> Reversed<'g, G> {
    /// Wraps `graph`.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Reversed { graph }
    }
}

impl<G: GraphBase> GraphBase for Reversed<'_, G> {
    fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }
}

impl<G: FiniteGraph> FiniteGraph for Reversed<'_, G> {
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.graph.node_ids()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

impl<G: Predecessors> Successors for Reversed<'_, G> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.predecessors(node)
    }

    fn is_successor(&self, node: NodeId, successor: NodeId) -> bool {
        self.graph.is_predecessor(node, successor)
    }
}

impl<G: Successors> Predecessors for Reversed<'_, G> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }

    fn is_predecessor(&self, node: NodeId, predecessor: NodeId) -> bool {
        self.graph.is_successor(node, predecessor)
    }
}

impl<G: Neighbors> Neighbors for Reversed<'_, G> {
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.neighbors(node)
    }

    fn degree(&self, node: NodeId) -> usize {
        self.graph.degree(node)
    }
}

impl<G: EdgeCost> EdgeCost for Reversed<'_, G> {
    fn cost(&self, edge: Edge) -> f64 {
        self.graph.cost(edge.reversed())
    }
}

/// Observes costs and heuristic estimates, remembering the first negative one.
///
/// Used by the checked search entry points. The wrapped algorithm runs
/// unchanged; the violation is turned into an error once it returns.
pub(crate) struct CheckedCosts<'g, G> {
    graph: &'g G,
    violation: Cell<Option<Error>>,
}

impl<'g, G> CheckedCosts<'g, G> {
    pub(crate) fn new(graph: &'g G) -> Self {
        CheckedCosts {
            graph,
            violation: Cell::new(None),
        }
    }

    fn record(&self, error: Error) {
        let first = self.violation.take();
        if first.is_none() {
            tracing::warn!(%error, "checked search observed a negative cost");
        }
        self.violation.set(first.or(Some(error)));
    }

    pub(crate) fn has_violation(&self) -> bool {
        let first = self.violation.take();
        let found = first.is_some();
        self.violation.set(first);
        found
    }

    /// Consumes the adapter, returning the first recorded violation.
    pub(crate) fn finish(self) -> Result<()> {
        match self.violation.into_inner() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

forward_structure!(CheckedCosts);

impl<G: EdgeCost> EdgeCost for CheckedCosts<'_, G> {
    fn cost(&self, edge: Edge) -> f64 {
        let cost = self.graph.cost(edge);
        if cost < 0.0 {
            self.record(Error::NegativeCost { edge, cost });
        }
        cost
    }
}

impl<G: HeuristicCost> HeuristicCost for CheckedCosts<'_, G> {
    fn heuristic_cost(&self, node: NodeId, goal: NodeId) -> f64 {
        let estimate = self.graph.heuristic_cost(node, goal);
        if estimate < 0.0 {
            self.record(Error::NegativeHeuristic {
                node,
                goal,
                estimate,
            });
        }
        estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestGraph;

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_unit_cost_replaces_costs() {
        let graph = TestGraph::directed().edge(0, 1, 7.5).edge(1, 2, -3.0);
        let unit = UnitCost::new(&graph);

        assert_eq!(unit.cost(Edge::new(n(0), n(1))), 1.0);
        assert_eq!(unit.cost(Edge::new(n(1), n(2))), 1.0);
        assert_eq!(unit.successors(n(0)).collect::<Vec<_>>(), vec![n(1)]);
        assert_eq!(unit.node_count(), 3);
    }

    #[test]
    fn test_null_heuristic_keeps_costs() {
        let graph = TestGraph::directed().edge(0, 1, 7.5);
        let null = NullHeuristic::new(&graph);

        assert_eq!(null.heuristic_cost(n(0), n(1)), 0.0);
        assert_eq!(null.cost(Edge::new(n(0), n(1))), 7.5);
    }

    #[test]
    fn test_with_heuristic_uses_closure() {
        let graph = TestGraph::directed().edge(0, 5, 1.0);
        let guided = WithHeuristic::new(&graph, |node: NodeId, goal: NodeId| {
            goal.index().abs_diff(node.index()) as f64
        });

        assert_eq!(guided.heuristic_cost(n(0), n(5)), 5.0);
        assert!(guided.is_successor(n(0), n(5)));
    }

    #[test]
    fn test_composed_adapters() {
        let graph = TestGraph::directed().edge(0, 1, 4.0);
        let unit = UnitCost::new(&graph);
        let bfs = NullHeuristic::new(&unit);

        assert_eq!(bfs.cost(Edge::new(n(0), n(1))), 1.0);
        assert_eq!(bfs.heuristic_cost(n(0), n(1)), 0.0);
    }

    #[test]
    fn test_undirected_exposes_neighbors_both_ways() {
        let graph = TestGraph::undirected().edge(0, 1, 2.0).edge(1, 2, 3.0);
        let both = Undirected::new(&graph);

        let mut succ: Vec<NodeId> = both.successors(n(1)).collect();
        succ.sort();
        assert_eq!(succ, vec![n(0), n(2)]);
        assert!(both.is_successor(n(2), n(1)));
        assert!(both.is_predecessor(n(0), n(1)));
        assert_eq!(both.cost(Edge::new(n(2), n(1))), 3.0);
    }

    #[test]
    fn test_reversed_swaps_direction() {
        let graph = TestGraph::directed().edge(0, 1, 2.0).edge(0, 2, 5.0);
        let rev = Reversed::new(&graph);

        assert_eq!(rev.successors(n(1)).collect::<Vec<_>>(), vec![n(0)]);
        assert!(rev.successors(n(0)).next().is_none());
        let mut preds: Vec<NodeId> = rev.predecessors(n(0)).collect();
        preds.sort();
        assert_eq!(preds, vec![n(1), n(2)]);
        assert!(rev.is_successor(n(2), n(0)));
        assert_eq!(rev.cost(Edge::new(n(2), n(0))), 5.0);
    }

    #[test]
    fn test_checked_costs_records_first_violation() {
        let graph = TestGraph::directed()
            .edge(0, 1, 1.0)
            .edge(1, 2, -2.0)
            .edge(2, 3, -4.0);
        let checked = CheckedCosts::new(&graph);

        assert_eq!(checked.cost(Edge::new(n(0), n(1))), 1.0);
        assert_eq!(checked.cost(Edge::new(n(1), n(2))), -2.0);
        assert_eq!(checked.cost(Edge::new(n(2), n(3))), -4.0);

        assert_eq!(
            checked.finish(),
            Err(Error::NegativeCost {
                edge: Edge::new(n(1), n(2)),
                cost: -2.0,
            })
        );
    }

    #[test]
    fn test_checked_costs_clean_run() {
        let graph = TestGraph::directed().edge(0, 1, 0.0);
        let checked = CheckedCosts::new(&graph);
        checked.cost(Edge::new(n(0), n(1)));
        assert_eq!(checked.finish(), Ok(()));
    }

    #[test]
    fn test_checked_costs_heuristic() {
        let graph = TestGraph::directed().edge(0, 1, 1.0);
        let guided = WithHeuristic::new(&graph, |_: NodeId, _: NodeId| -1.0);
        let checked = CheckedCosts::new(&guided);

        assert_eq!(checked.heuristic_cost(n(0), n(1)), -1.0);
        assert!(matches!(
            checked.finish(),
            Err(Error::NegativeHeuristic { estimate, .. }) if estimate == -1.0
        ));
    }
}
