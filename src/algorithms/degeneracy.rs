//! Degeneracy ordering and k-core decomposition.
//!
//! Repeatedly removing a node of minimum remaining degree yields the
//! degeneracy ordering of an undirected graph (Matula and Beck). The largest
//! minimum degree seen at removal time is the node's core number: the largest
//! `k` such that the node belongs to a subgraph in which every node has at
//! least `k` neighbors.
//!
//! Nodes are kept in buckets indexed by remaining degree, with a position
//! index so that moving a node to a lower bucket is O(1). The whole
//! decomposition runs in O(V + E).

use std::collections::HashMap;

use crate::graph::{FiniteGraph, Neighbors, NodeId};

/// Result of [`degeneracy_ordering`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegeneracyOrdering {
    order: Vec<NodeId>,
    cores: Vec<Vec<NodeId>>,
    core_numbers: HashMap<NodeId, usize>,
}

impl DegeneracyOrdering {
    /// Returns the nodes in degeneracy order.
    ///
    /// This is the reverse of the removal order: the most deeply nested core
    /// comes first.
    #[must_use]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Returns the k-shells: `cores()[k]` holds the nodes whose core number is
    /// exactly `k`.
    ///
    /// The k-core, every node with core number at least `k`, is the union of
    /// `cores()[k..]`; see [`k_core`](Self::k_core).
    #[must_use]
    pub fn cores(&self) -> &[Vec<NodeId>] {
        &self.cores
    }

    /// Returns the core number of `node`.
    #[must_use]
    pub fn core_number(&self, node: NodeId) -> Option<usize> {
        self.core_numbers.get(&node).copied()
    }

    /// Returns the degeneracy of the graph: its largest core number.
    #[must_use]
    pub fn degeneracy(&self) -> usize {
        self.cores.len().saturating_sub(1)
    }

    /// Returns every node with core number at least `k`.
    #[must_use]
    pub fn k_core(&self, k: usize) -> Vec<NodeId> {
        self.cores.iter().skip(k).flatten().copied().collect()
    }

    /// Splits the result into the ordering and the k-shells.
    #[must_use]
    pub fn into_parts(self) -> (Vec<NodeId>, Vec<Vec<NodeId>>) {
        (self.order, self.cores)
    }
}

/// Computes the degeneracy ordering and k-shells of an undirected graph.
///
/// Self-loops and repeated neighbors are ignored.
///
/// # Panics
///
/// Panics if the graph's adjacency is inconsistent: a node whose
/// [`degree`](Neighbors::degree) disagrees with its neighbor list, or a
/// neighbor relation that is not symmetric. Such graphs drive a remaining
/// degree below zero.
///
/// # Examples
///
/// ```rust,ignore
/// use graph_search::algorithms::degeneracy_ordering;
///
/// let ordering = degeneracy_ordering(&graph);
/// println!("degeneracy {}, innermost core {:?}", ordering.degeneracy(),
///     ordering.cores().last());
/// ```
pub fn degeneracy_ordering<G>(graph: &G) -> DegeneracyOrdering
where
    G: FiniteGraph + Neighbors,
{
    let nodes: Vec<NodeId> = graph.node_ids().collect();
    if nodes.is_empty() {
        return DegeneracyOrdering::default();
    }

    let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::with_capacity(nodes.len());
    let mut remaining: HashMap<NodeId, usize> = HashMap::with_capacity(nodes.len());
    let mut max_degree = 0;

    for &node in &nodes {
        let all: Vec<NodeId> = graph.neighbors(node).collect();
        let reported = graph.degree(node);
        assert_eq!(
            reported,
            all.len(),
            "degree of {node} is {reported} but it has {} neighbors",
            all.len()
        );

        // A neighbor listed twice still counts once
        let mut adjacent: Vec<NodeId> = all.into_iter().filter(|&other| other != node).collect();
        adjacent.sort_unstable();
        adjacent.dedup();
        max_degree = max_degree.max(adjacent.len());
        remaining.insert(node, adjacent.len());
        adjacency.insert(node, adjacent);
    }

    let mut buckets: Vec<Vec<NodeId>> = vec![Vec::new(); max_degree + 1];
    let mut slot: HashMap<NodeId, usize> = HashMap::with_capacity(nodes.len());
    for &node in &nodes {
        let bucket = &mut buckets[remaining[&node]];
        slot.insert(node, bucket.len());
        bucket.push(node);
    }

    let mut removal = Vec::with_capacity(nodes.len());
    let mut shell_sizes = vec![0usize];
    let mut core_numbers = HashMap::with_capacity(nodes.len());
    let mut k = 0;
    let mut lowest = 0;

    for _ in 0..nodes.len() {
        let Some(i) = (lowest..buckets.len()).find(|&i| !buckets[i].is_empty()) else {
            panic!("degeneracy buckets drained with nodes remaining");
        };
        if i > k {
            k = i;
            shell_sizes.resize(k + 1, 0);
        }

        let Some(node) = buckets[i].pop() else {
            unreachable!("bucket {i} was checked non-empty");
        };
        slot.remove(&node);
        remaining.remove(&node);
        removal.push(node);
        core_numbers.insert(node, k);
        shell_sizes[k] += 1;

        for &other in &adjacency[&node] {
            let Some(degree) = remaining.get_mut(&other) else {
                continue;
            };

            let position = slot[&other];
            buckets[*degree].swap_remove(position);
            if let Some(&moved) = buckets[*degree].get(position) {
                slot.insert(moved, position);
            }

            *degree = degree.checked_sub(1).unwrap_or_else(|| {
                panic!("remaining degree of {other} dropped below zero; adjacency is not symmetric")
            });
            slot.insert(other, buckets[*degree].len());
            buckets[*degree].push(other);
        }

        lowest = i.saturating_sub(1);
    }

    // Shells in removal order are contiguous and ascending in k
    let mut cores = Vec::with_capacity(shell_sizes.len());
    let mut start = 0;
    for &size in &shell_sizes {
        cores.push(removal[start..start + size].to_vec());
        start += size;
    }

    removal.reverse();
    tracing::debug!(nodes = nodes.len(), degeneracy = k, "degeneracy ordering computed");

    DegeneracyOrdering {
        order: removal,
        cores,
        core_numbers,
    }
}
