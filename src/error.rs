use thiserror::Error;

use crate::graph::{Edge, NodeId};

/// The error type for every fallible operation in this crate.
///
/// Only genuine failures are reported here. An unreachable goal is a normal
/// outcome and is expressed through `Option` or an empty result instead.
/// Precondition violations that indicate a broken graph implementation
/// (inconsistent degree tables, pivot selection over empty sets) panic.
///
/// # Examples
///
/// ```rust
/// use graph_search::{Edge, Error, NodeId};
///
/// let err = Error::NegativeCost {
///     edge: Edge::new(NodeId::new(0), NodeId::new(1)),
///     cost: -2.5,
/// };
/// assert_eq!(err.to_string(), "negative edge cost -2.5 on n0 -> n1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Bellman-Ford found an edge that can still be relaxed after `|V| - 1`
    /// rounds, so a negative-cost cycle is reachable from `origin`.
    ///
    /// No partial paths or costs are returned alongside this error.
    #[error("negative cost cycle reachable from {origin}: {edge} still relaxes")]
    NegativeCycle {
        /// The source node of the failed search
        origin: NodeId,
        /// An edge that still relaxed in the verification pass
        edge: Edge,
    },

    /// A checked search observed an edge with negative cost.
    ///
    /// Only raised when [`SearchConfig::check_negative_costs`](crate::SearchConfig)
    /// is enabled.
    #[error("negative edge cost {cost} on {edge}")]
    NegativeCost {
        /// The offending edge
        edge: Edge,
        /// The cost the graph reported for it
        cost: f64,
    },

    /// A checked A* search observed a negative heuristic estimate.
    #[error("negative heuristic estimate {estimate} from {node} to {goal}")]
    NegativeHeuristic {
        /// The node the estimate was requested for
        node: NodeId,
        /// The search goal
        goal: NodeId,
        /// The estimate the graph reported
        estimate: f64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
