//! Low-level collections shared by the algorithms.
//!
//! - [`NodeSet`] - identity-keyed set with union and intersection
//! - [`IndexedPriorityQueue`] - min-heap with key decrease and arbitrary removal
//!
//! Neither depends on any graph capability.

mod queue;
mod set;

pub use queue::{IndexedPriorityQueue, QueueEntry};
pub use set::{NodeSet, NodeSetIter};
