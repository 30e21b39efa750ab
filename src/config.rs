//! Search configuration.
//!
//! The plain entry points ([`a_star`](crate::algorithms::a_star),
//! [`dijkstra`](crate::algorithms::dijkstra),
//! [`bron_kerbosch`](crate::algorithms::bron_kerbosch)) run with the default
//! configuration. The `*_with` variants take a [`SearchConfig`] explicitly.

use strum::{Display, EnumString};

/// Pivot policy for Bron–Kerbosch maximal clique enumeration.
///
/// The pivot only affects how much of the search tree is pruned, never which
/// cliques are reported.
///
/// # Examples
///
/// ```rust
/// use graph_search::PivotStrategy;
///
/// let pivot: PivotStrategy = "max-neighbors".parse().unwrap();
/// assert_eq!(pivot, PivotStrategy::MaxNeighbors);
/// assert_eq!(PivotStrategy::First.to_string(), "first");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum PivotStrategy {
    /// Pivot on the first available candidate (or excluded) node.
    First,
    /// Pivot on the node with the most neighbors among the candidates
    /// (Tomita, Tanaka and Takahashi).
    MaxNeighbors,
}

impl Default for PivotStrategy {
    fn default() -> Self {
        if cfg!(feature = "tomita-pivot") {
            PivotStrategy::MaxNeighbors
        } else {
            PivotStrategy::First
        }
    }
}

/// Configuration shared by the configurable algorithm entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fail with [`Error::NegativeCost`](crate::Error::NegativeCost) or
    /// [`Error::NegativeHeuristic`](crate::Error::NegativeHeuristic) when A*
    /// or Dijkstra observe a negative value, instead of returning unspecified
    /// results (default: false)
    pub check_negative_costs: bool,

    /// Pivot policy for Bron–Kerbosch (default: [`PivotStrategy::default`])
    pub pivot: PivotStrategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            check_negative_costs: false,
            pivot: PivotStrategy::default(),
        }
    }
}

impl SearchConfig {
    /// Creates a configuration that rejects negative costs and heuristics.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            check_negative_costs: true,
            ..Self::default()
        }
    }

    /// Returns this configuration with the given pivot strategy.
    #[must_use]
    pub fn with_pivot(mut self, pivot: PivotStrategy) -> Self {
        self.pivot = pivot;
        self
    }
}
