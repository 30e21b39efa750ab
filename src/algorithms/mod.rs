//! Graph search and structure algorithms.
//!
//! Every algorithm is a free function generic over the capability traits in
//! [`crate::graph`]. It states the smallest set of capabilities it needs, so
//! any graph representation implementing them can be analyzed directly.
//!
//! # Available Algorithms
//!
//! | Algorithm | Function | Requires | Complexity |
//! |-----------|----------|----------|------------|
//! | A* search | [`a_star`] | successors, cost, heuristic | O((V + E) log V) |
//! | Breadth-first search | [`breadth_first_search`] | successors | O((V + E) log V) |
//! | Depth-first search | [`depth_first_search`] | successors | O(V + E) |
//! | Dijkstra | [`dijkstra`] | successors, cost | O((V + E) log V) |
//! | All-pairs Dijkstra | [`all_pairs_dijkstra`] | finite, successors, cost | O(V (V + E) log V) |
//! | Bellman-Ford | [`bellman_ford`] | finite, successors, cost | O(V E) |
//! | Tarjan SCC | [`strongly_connected_components`] | finite, successors | O(V + E) |
//! | Dominators | [`dominators`] | finite, predecessors | O(V² · passes) |
//! | Post-dominators | [`post_dominators`] | finite, successors | O(V² · passes) |
//! | Degeneracy ordering | [`degeneracy_ordering`] | finite, neighbors | O(V + E) |
//! | Maximal cliques | [`bron_kerbosch`] | finite, neighbors | O(d V 3^(d/3)) |
//!
//! Single-pair searches return a [`SearchOutcome`]; single-source searches
//! return [`ShortestPaths`].
//!
//! # Edge Costs
//!
//! A*, breadth-first search and Dijkstra assume non-negative costs and do not
//! verify them. The `*_with` variants take a [`SearchConfig`](crate::SearchConfig)
//! whose `check_negative_costs` flag turns violations into errors. Bellman-Ford
//! handles negative costs and reports negative cycles.
//!
//! # Determinism
//!
//! Frontier ties are broken by ascending node id, so searches over a graph
//! with deterministic adjacency return the same path on every run.

mod astar;
mod bellman_ford;
mod cliques;
mod degeneracy;
mod dijkstra;
mod dominators;
mod path;
mod scc;
mod traversal;

pub use astar::{a_star, a_star_with, SearchOutcome};
pub use bellman_ford::bellman_ford;
pub use cliques::{bron_kerbosch, bron_kerbosch_with};
pub use degeneracy::{degeneracy_ordering, DegeneracyOrdering};
pub use dijkstra::{all_pairs_dijkstra, dijkstra, dijkstra_with, ShortestPaths};
pub use dominators::{dominators, post_dominators, DominatorSets};
pub use path::{is_path, rebuild_path};
pub use scc::{condensation, strongly_connected_components};
pub use traversal::{breadth_first_search, depth_first_search};
