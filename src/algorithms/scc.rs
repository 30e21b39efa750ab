//! Strongly connected components (Tarjan's algorithm).
//!
//! A strongly connected component is a maximal set of nodes in which every
//! node can reach every other node. Each node belongs to exactly one
//! component; a node on no cycle forms a component on its own.
//!
//! # Algorithm
//!
//! Tarjan's algorithm assigns each node a discovery index and a low-link
//! (the smallest index reachable through the DFS subtree plus one back edge).
//! A node whose low-link equals its own index roots a component, which is
//! popped off the node stack when the node finishes.
//!
//! The DFS runs on an explicit work stack of `(node, successors)` frames, so
//! graphs with long chains do not overflow the call stack.
//!
//! Components come out in reverse topological order of the condensation:
//! a component is emitted before every component that can reach it.

use std::collections::{HashMap, HashSet};

use crate::graph::{FiniteGraph, NodeId, Successors};

/// Partitions the graph into strongly connected components.
///
/// # Returns
///
/// The components in reverse topological order. Node order inside a
/// component carries no meaning.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust,ignore
/// use graph_search::algorithms::strongly_connected_components;
///
/// let sccs = strongly_connected_components(&graph);
/// let cyclic = sccs.iter().filter(|c| c.len() > 1).count();
/// println!("{} components, {cyclic} with cycles", sccs.len());
/// ```
pub fn strongly_connected_components<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: FiniteGraph + Successors,
{
    let mut state = TarjanState::default();

    for node in graph.node_ids() {
        if !state.index.contains_key(&node) {
            state.strongconnect(graph, node);
        }
    }

    tracing::debug!(
        nodes = state.index.len(),
        components = state.components.len(),
        "tarjan scc finished"
    );
    state.components
}

/// Collapses each component to a single node.
///
/// # Arguments
///
/// * `graph` - The graph the components were computed on
/// * `sccs` - Output of [`strongly_connected_components`]
///
/// # Returns
///
/// A map from each node to the index of its component in `sccs`, and the
/// deduplicated edges between distinct components. The condensation is always
/// acyclic.
pub fn condensation<G: Successors>(
    graph: &G,
    sccs: &[Vec<NodeId>],
) -> (HashMap<NodeId, usize>, Vec<(usize, usize)>) {
    let component_of: HashMap<NodeId, usize> = sccs
        .iter()
        .enumerate()
        .flat_map(|(index, members)| members.iter().map(move |&node| (node, index)))
        .collect();

    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut edges = Vec::new();

    for (from, members) in sccs.iter().enumerate() {
        for &node in members {
            for successor in graph.successors(node) {
                let Some(&to) = component_of.get(&successor) else {
                    continue;
                };
                if from != to && seen.insert((from, to)) {
                    edges.push((from, to));
                }
            }
        }
    }

    (component_of, edges)
}

#[derive(Default)]
struct TarjanState {
    next_index: usize,
    index: HashMap<NodeId, usize>,
    lowlink: HashMap<NodeId, usize>,
    stack: Vec<NodeId>,
    on_stack: HashSet<NodeId>,
    components: Vec<Vec<NodeId>>,
}

impl TarjanState {
    fn discover(&mut self, node: NodeId) {
        self.index.insert(node, self.next_index);
        self.lowlink.insert(node, self.next_index);
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack.insert(node);
    }

    fn lower(&mut self, node: NodeId, candidate: usize) {
        if let Some(low) = self.lowlink.get_mut(&node) {
            *low = (*low).min(candidate);
        }
    }

    fn strongconnect<G: Successors>(&mut self, graph: &G, root: NodeId) {
        self.discover(root);
        let mut work = vec![(root, graph.successors(root))];

        while let Some((node, successors)) = work.last_mut() {
            let node = *node;

            if let Some(successor) = successors.next() {
                match self.index.get(&successor).copied() {
                    None => {
                        self.discover(successor);
                        work.push((successor, graph.successors(successor)));
                    }
                    Some(index) if self.on_stack.contains(&successor) => {
                        self.lower(node, index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            work.pop();
            let low = self.lowlink[&node];

            if let Some(&(parent, _)) = work.last() {
                self.lower(parent, low);
            }

            if low == self.index[&node] {
                let mut component = Vec::new();
                while let Some(member) = self.stack.pop() {
                    self.on_stack.remove(&member);
                    component.push(member);
                    if member == node {
                        break;
                    }
                }
                tracing::trace!(root = %node, size = component.len(), "scc emitted");
                self.components.push(component);
            }
        }
    }
}
