//! Fixture graph for unit tests.
//!
//! `TestGraph` is a small adjacency-list graph with a builder interface. It
//! implements every capability trait so each algorithm can be tested against
//! the same fixture.

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::{
    Edge, EdgeCost, FiniteGraph, GraphBase, Neighbors, NodeId, Predecessors, Successors,
};

#[derive(Debug, Clone)]
pub struct TestGraph {
    directed: bool,
    nodes: BTreeSet<NodeId>,
    outgoing: BTreeMap<NodeId, Vec<(NodeId, f64)>>,
    incoming: BTreeMap<NodeId, Vec<(NodeId, f64)>>,
}

impl TestGraph {
    pub fn directed() -> Self {
        TestGraph {
            directed: true,
            nodes: BTreeSet::new(),
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
        }
    }

    pub fn undirected() -> Self {
        TestGraph {
            directed: false,
            ..TestGraph::directed()
        }
    }

    // Complete undirected graph on nodes 0..k
    pub fn complete(k: usize) -> Self {
        let mut graph = TestGraph::undirected();
        for id in 0..k {
            graph = graph.node(id);
        }
        for a in 0..k {
            for b in (a + 1)..k {
                graph = graph.edge(a, b, 1.0);
            }
        }
        graph
    }

    pub fn node(mut self, id: usize) -> Self {
        self.nodes.insert(NodeId::new(id));
        self
    }

    pub fn edge(mut self, head: usize, tail: usize, cost: f64) -> Self {
        self.link(NodeId::new(head), NodeId::new(tail), cost);
        if !self.directed && head != tail {
            self.link(NodeId::new(tail), NodeId::new(head), cost);
        }
        self
    }

    // Unit-cost edges
    pub fn edges(self, pairs: &[(usize, usize)]) -> Self {
        pairs
            .iter()
            .fold(self, |graph, &(head, tail)| graph.edge(head, tail, 1.0))
    }

    fn link(&mut self, head: NodeId, tail: NodeId, cost: f64) {
        self.nodes.insert(head);
        self.nodes.insert(tail);
        self.outgoing.entry(head).or_default().push((tail, cost));
        self.incoming.entry(tail).or_default().push((head, cost));
    }

    fn adjacent(
        map: &BTreeMap<NodeId, Vec<(NodeId, f64)>>,
        node: NodeId,
    ) -> impl Iterator<Item = NodeId> + '_ {
        map.get(&node)
            .into_iter()
            .flat_map(|list| list.iter().map(|&(other, _)| other))
    }
}

impl GraphBase for TestGraph {
    fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }
}

impl FiniteGraph for TestGraph {
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.nodes.iter().copied()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Successors for TestGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        Self::adjacent(&self.outgoing, node)
    }
}

impl Predecessors for TestGraph {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        Self::adjacent(&self.incoming, node)
    }
}

impl Neighbors for TestGraph {
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        let mut all: BTreeSet<NodeId> = Self::adjacent(&self.outgoing, node).collect();
        if self.directed {
            all.extend(Self::adjacent(&self.incoming, node));
        }
        all.into_iter()
    }
}

impl EdgeCost for TestGraph {
    fn cost(&self, edge: Edge) -> f64 {
        self.outgoing
            .get(&edge.head())
            .and_then(|list| list.iter().find(|&&(tail, _)| tail == edge.tail()))
            .map(|&(_, cost)| cost)
            .unwrap_or_else(|| panic!("TestGraph has no edge {edge}"))
    }
}
