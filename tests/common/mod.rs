//! Shared graph fixture and brute-force oracles for integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use graph_search::{
    Edge, EdgeCost, FiniteGraph, GraphBase, Neighbors, NodeId, Predecessors, Successors,
};

/// Adjacency-map graph over nodes `0..n`. A repeated `(head, tail)` pair keeps
/// the last cost given.
#[derive(Debug, Clone)]
pub struct EdgeList {
    outgoing: Vec<BTreeMap<usize, f64>>,
    incoming: Vec<BTreeSet<usize>>,
}

impl EdgeList {
    pub fn directed(n: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut graph = EdgeList {
            outgoing: vec![BTreeMap::new(); n],
            incoming: vec![BTreeSet::new(); n],
        };
        for &(head, tail, cost) in edges {
            graph.outgoing[head].insert(tail, cost);
            graph.incoming[tail].insert(head);
        }
        graph
    }

    /// Symmetric graph; every pair becomes two unit-cost arcs.
    pub fn undirected(n: usize, pairs: &[(usize, usize)]) -> Self {
        let edges: Vec<(usize, usize, f64)> = pairs
            .iter()
            .flat_map(|&(a, b)| [(a, b, 1.0), (b, a, 1.0)])
            .collect();
        EdgeList::directed(n, &edges)
    }

    pub fn len(&self) -> usize {
        self.outgoing.len()
    }

    pub fn cost_between(&self, head: usize, tail: usize) -> Option<f64> {
        self.outgoing[head].get(&tail).copied()
    }

    /// `reach[a][b]` is true if `b` is reachable from `a` (every node reaches
    /// itself).
    pub fn reachability(&self) -> Vec<Vec<bool>> {
        let n = self.len();
        let mut reach = vec![vec![false; n]; n];
        for a in 0..n {
            reach[a][a] = true;
            for &b in self.outgoing[a].keys() {
                reach[a][b] = true;
            }
        }
        for k in 0..n {
            for a in 0..n {
                for b in 0..n {
                    if reach[a][k] && reach[k][b] {
                        reach[a][b] = true;
                    }
                }
            }
        }
        reach
    }

    /// Floyd-Warshall distances; `None` where unreachable.
    pub fn distances(&self) -> Vec<Vec<Option<f64>>> {
        let n = self.len();
        let mut dist = vec![vec![None; n]; n];
        for a in 0..n {
            dist[a][a] = Some(0.0);
            for (&b, &cost) in &self.outgoing[a] {
                let best = dist[a][b].map_or(cost, |known: f64| known.min(cost));
                dist[a][b] = Some(best);
            }
        }
        for k in 0..n {
            for a in 0..n {
                for b in 0..n {
                    if let (Some(x), Some(y)) = (dist[a][k], dist[k][b]) {
                        if dist[a][b].map_or(true, |known| x + y < known) {
                            dist[a][b] = Some(x + y);
                        }
                    }
                }
            }
        }
        dist
    }

    /// Fewest-edge distances.
    pub fn hops(&self) -> Vec<Vec<Option<f64>>> {
        let unit: Vec<(usize, usize, f64)> = (0..self.len())
            .flat_map(|a| self.outgoing[a].keys().map(move |&b| (a, b, 1.0)))
            .collect();
        EdgeList::directed(self.len(), &unit).distances()
    }

    /// Whether `target` is reachable from `source` without passing `avoid`.
    pub fn reaches_avoiding(&self, source: usize, target: usize, avoid: usize) -> bool {
        if source == avoid {
            return false;
        }
        let mut seen = vec![false; self.len()];
        let mut stack = vec![source];
        seen[source] = true;
        while let Some(node) = stack.pop() {
            if node == target {
                return true;
            }
            for &next in self.outgoing[node].keys() {
                if next != avoid && !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
        false
    }

    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        a != b && self.outgoing[a].contains_key(&b)
    }

    /// Every maximal clique, by subset enumeration. Only for small graphs.
    pub fn maximal_cliques(&self) -> BTreeSet<Vec<usize>> {
        let n = self.len();
        let is_clique = |mask: u32| {
            (0..n).all(|a| {
                mask & (1 << a) == 0
                    || (0..n).all(|b| b == a || mask & (1 << b) == 0 || self.adjacent(a, b))
            })
        };

        let cliques: Vec<u32> = (1u32..(1 << n)).filter(|&mask| is_clique(mask)).collect();
        cliques
            .iter()
            .filter(|&&mask| {
                !cliques
                    .iter()
                    .any(|&other| other != mask && other & mask == mask)
            })
            .map(|&mask| (0..n).filter(|&a| mask & (1 << a) != 0).collect())
            .collect()
    }
}

pub fn id(index: usize) -> NodeId {
    NodeId::new(index)
}

impl GraphBase for EdgeList {
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.len()
    }
}

impl FiniteGraph for EdgeList {
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.len()).map(NodeId::new)
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}

impl Successors for EdgeList {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.outgoing[node.index()].keys().map(|&tail| NodeId::new(tail))
    }
}

impl Predecessors for EdgeList {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.incoming[node.index()].iter().map(|&head| NodeId::new(head))
    }
}

impl Neighbors for EdgeList {
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        let index = node.index();
        let all: BTreeSet<usize> = self.outgoing[index]
            .keys()
            .chain(self.incoming[index].iter())
            .copied()
            .collect();
        all.into_iter().map(NodeId::new)
    }
}

impl EdgeCost for EdgeList {
    fn cost(&self, edge: Edge) -> f64 {
        self.outgoing[edge.head().index()][&edge.tail().index()]
    }
}
