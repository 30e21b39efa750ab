//! Maximal clique enumeration (Bron–Kerbosch with pivoting).
//!
//! A clique is a set of pairwise adjacent nodes; it is maximal if no other
//! node is adjacent to all of its members. The outer loop visits nodes in
//! degeneracy order (Eppstein, Löffler and Strash), which bounds the size of
//! every candidate set by the graph's degeneracy. The recursion prunes with a
//! pivot chosen by [`PivotStrategy`].
//!
//! Recursion depth is bounded by the size of the largest clique.

use crate::{
    algorithms::degeneracy::degeneracy_ordering,
    graph::{FiniteGraph, Neighbors, NodeId},
    utils::NodeSet,
    PivotStrategy, SearchConfig,
};

/// Enumerates every maximal clique of an undirected graph.
///
/// Each maximal clique is reported exactly once. Node order inside a clique
/// and the order of cliques carry no meaning. An isolated node is a maximal
/// clique of size one. Self-loops are ignored.
///
/// # Complexity
///
/// - Time: O(d · V · 3^(d/3)) for degeneracy `d`
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust,ignore
/// use graph_search::algorithms::bron_kerbosch;
///
/// let largest = bron_kerbosch(&graph).into_iter().max_by_key(Vec::len);
/// ```
pub fn bron_kerbosch<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: FiniteGraph + Neighbors,
{
    bron_kerbosch_with(graph, &SearchConfig::default())
}

/// [`bron_kerbosch`] with an explicit pivot strategy taken from `config`.
pub fn bron_kerbosch_with<G>(graph: &G, config: &SearchConfig) -> Vec<Vec<NodeId>>
where
    G: FiniteGraph + Neighbors,
{
    let ordering = degeneracy_ordering(graph);
    if ordering.order().is_empty() {
        return Vec::new();
    }

    let mut search = CliqueSearch {
        graph,
        pivot: config.pivot,
        cliques: Vec::new(),
        calls: 0,
    };

    let mut candidates: NodeSet = ordering.order().iter().copied().collect();
    let mut excluded = NodeSet::new();

    for &node in ordering.order() {
        let adjacent = search.neighborhood(node);
        search.expand(
            vec![node],
            candidates.intersection(&adjacent),
            excluded.intersection(&adjacent),
        );
        candidates.remove(node);
        excluded.insert(node);
    }

    tracing::debug!(
        cliques = search.cliques.len(),
        calls = search.calls,
        pivot = %config.pivot,
        degeneracy = ordering.degeneracy(),
        "bron-kerbosch finished"
    );
    search.cliques
}

struct CliqueSearch<'g, G> {
    graph: &'g G,
    pivot: PivotStrategy,
    cliques: Vec<Vec<NodeId>>,
    calls: usize,
}

impl<G: Neighbors> CliqueSearch<'_, G> {
    fn neighborhood(&self, node: NodeId) -> NodeSet {
        self.graph
            .neighbors(node)
            .filter(|&other| other != node)
            .collect()
    }

    fn expand(&mut self, clique: Vec<NodeId>, mut candidates: NodeSet, mut excluded: NodeSet) {
        self.calls += 1;

        if candidates.is_empty() {
            if excluded.is_empty() {
                tracing::trace!(size = clique.len(), "maximal clique");
                self.cliques.push(clique);
            }
            return;
        }

        let pivot_neighbors = self.choose_pivot(&candidates, &excluded);
        let branches: Vec<NodeId> = candidates
            .iter()
            .filter(|&node| !pivot_neighbors.contains(node))
            .collect();

        for node in branches {
            let adjacent = self.neighborhood(node);
            let mut grown = clique.clone();
            grown.push(node);
            self.expand(
                grown,
                candidates.intersection(&adjacent),
                excluded.intersection(&adjacent),
            );
            candidates.remove(node);
            excluded.insert(node);
        }
    }

    /// Returns the neighborhood of the pivot.
    ///
    /// # Panics
    ///
    /// Panics if both sets are empty; `expand` reports the clique before
    /// reaching this point in that case.
    fn choose_pivot(&self, candidates: &NodeSet, excluded: &NodeSet) -> NodeSet {
        let mut pool = candidates.iter().chain(excluded.iter());

        let pivot = match self.pivot {
            PivotStrategy::First => pool.next().map(|node| self.neighborhood(node)),
            PivotStrategy::MaxNeighbors => {
                pool.fold(None, |best: Option<(usize, NodeSet)>, node| {
                    let adjacent = self.neighborhood(node);
                    let overlap = adjacent.intersection(candidates).len();
                    match best {
                        Some((most, _)) if most >= overlap => best,
                        _ => Some((overlap, adjacent)),
                    }
                })
                .map(|(_, adjacent)| adjacent)
            }
        };

        pivot.unwrap_or_else(|| panic!("pivot requested from empty candidate and excluded sets"))
    }
}
