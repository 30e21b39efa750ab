//! Indexed binary min-heap for best-first search frontiers.
//!
//! [`IndexedPriorityQueue`] orders [`QueueEntry`] values by `fscore` and keeps
//! an identity → heap-slot index alongside the heap. The index is what makes
//! key decrease ([`fix`](IndexedPriorityQueue::fix)) and arbitrary removal
//! O(log n): the entry is found in O(1) and sifted from where it sits.
//!
//! # Invariant
//!
//! For every node in the queue the index holds exactly one slot, and that slot
//! holds the node's entry. Every swap the heap performs updates both slots in
//! the index.
//!
//! # Ordering
//!
//! Entries with equal `fscore` are ordered by ascending [`NodeId`], so searches
//! built on the queue are reproducible regardless of insertion order.

use std::{cmp::Ordering, collections::HashMap};

use crate::graph::NodeId;

/// A frontier entry: a node and its search scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueEntry {
    /// The node this entry belongs to
    pub node: NodeId,
    /// Best known cost from the search source
    pub gscore: f64,
    /// Priority key: `gscore` plus the heuristic estimate (A*), or `gscore`
    pub fscore: f64,
}

impl QueueEntry {
    fn precedes(&self, other: &QueueEntry) -> bool {
        match self.fscore.total_cmp(&other.fscore) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.node < other.node,
        }
    }
}

/// Binary min-heap over [`QueueEntry`] with an identity index.
///
/// # Examples
///
/// ```rust
/// use graph_search::{IndexedPriorityQueue, NodeId};
///
/// let mut queue = IndexedPriorityQueue::new();
/// queue.push(NodeId::new(1), 0.0, 5.0);
/// queue.push(NodeId::new(2), 0.0, 3.0);
///
/// // Decrease the key of node 1 below node 2
/// assert!(queue.fix(NodeId::new(1), 0.0, 1.0));
/// assert_eq!(queue.pop().map(|e| e.node), Some(NodeId::new(1)));
/// assert_eq!(queue.pop().map(|e| e.node), Some(NodeId::new(2)));
/// assert!(queue.pop().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndexedPriorityQueue {
    entries: Vec<QueueEntry>,
    index: HashMap<NodeId, usize>,
}

impl IndexedPriorityQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        IndexedPriorityQueue {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the number of entries in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the queue holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `node` currently has an entry.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Returns the entry for `node`, if it is in the queue.
    #[must_use]
    pub fn find(&self, node: NodeId) -> Option<&QueueEntry> {
        self.index.get(&node).map(|&slot| &self.entries[slot])
    }

    /// Returns the minimum entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&QueueEntry> {
        self.entries.first()
    }

    /// Inserts `node` with the given scores.
    ///
    /// If `node` is already queued its scores are replaced instead, so the
    /// index never holds two slots for one node.
    pub fn push(&mut self, node: NodeId, gscore: f64, fscore: f64) {
        if self.fix(node, gscore, fscore) {
            return;
        }

        let slot = self.entries.len();
        self.entries.push(QueueEntry {
            node,
            gscore,
            fscore,
        });
        self.index.insert(node, slot);
        self.sift_up(slot);
    }

    /// Removes and returns the entry with the smallest `fscore`.
    pub fn pop(&mut self) -> Option<QueueEntry> {
        if self.entries.is_empty() {
            return None;
        }
        self.remove_slot(0)
    }

    /// Replaces the scores of `node` and restores heap order.
    ///
    /// Returns `false` (and does nothing) if `node` is not in the queue.
    pub fn fix(&mut self, node: NodeId, gscore: f64, fscore: f64) -> bool {
        let Some(&slot) = self.index.get(&node) else {
            return false;
        };

        let entry = &mut self.entries[slot];
        entry.gscore = gscore;
        entry.fscore = fscore;
        self.restore(slot);
        true
    }

    /// Removes the entry for `node`, wherever it sits in the heap.
    pub fn remove(&mut self, node: NodeId) -> Option<QueueEntry> {
        let slot = *self.index.get(&node)?;
        self.remove_slot(slot)
    }

    fn remove_slot(&mut self, slot: usize) -> Option<QueueEntry> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(slot, last);
        let removed = self.entries.pop()?;
        self.index.remove(&removed.node);

        if slot < self.entries.len() {
            self.restore(slot);
        }
        Some(removed)
    }

    fn restore(&mut self, slot: usize) {
        let slot = self.sift_up(slot);
        self.sift_down(slot);
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.entries[slot].precedes(&self.entries[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.entries[right].precedes(&self.entries[left]) {
                right
            } else {
                left
            };

            if !self.entries[child].precedes(&self.entries[slot]) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.index.insert(self.entries[a].node, a);
        self.index.insert(self.entries[b].node, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    fn assert_index_consistent(queue: &IndexedPriorityQueue) {
        assert_eq!(queue.index.len(), queue.entries.len());
        for (slot, entry) in queue.entries.iter().enumerate() {
            assert_eq!(queue.index.get(&entry.node), Some(&slot));
        }
    }

    fn drain(queue: &mut IndexedPriorityQueue) -> Vec<usize> {
        let mut order = Vec::new();
        while let Some(entry) = queue.pop() {
            assert_index_consistent(queue);
            order.push(entry.node.index());
        }
        order
    }

    #[test]
    fn test_queue_pops_in_fscore_order() {
        let mut queue = IndexedPriorityQueue::new();
        for (id, f) in [(0, 5.0), (1, 1.0), (2, 4.0), (3, 2.0), (4, 3.0)] {
            queue.push(n(id), f, f);
            assert_index_consistent(&queue);
        }

        assert_eq!(queue.len(), 5);
        assert_eq!(queue.peek().map(|e| e.node), Some(n(1)));
        assert_eq!(drain(&mut queue), vec![1, 3, 4, 2, 0]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_ties_break_on_node_id() {
        let mut queue = IndexedPriorityQueue::new();
        for id in [7, 3, 9, 1] {
            queue.push(n(id), 0.0, 2.0);
        }
        assert_eq!(drain(&mut queue), vec![1, 3, 7, 9]);
    }

    #[test]
    fn test_queue_fix_decreases_and_increases() {
        let mut queue = IndexedPriorityQueue::new();
        for id in 0..6 {
            queue.push(n(id), id as f64, id as f64);
        }

        assert!(queue.fix(n(5), 0.5, -1.0));
        assert_index_consistent(&queue);
        assert!(queue.fix(n(0), 10.0, 10.0));
        assert_index_consistent(&queue);

        let fixed = queue.find(n(5)).copied();
        assert_eq!(fixed.map(|e| e.gscore), Some(0.5));

        assert_eq!(drain(&mut queue), vec![5, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_queue_fix_absent_is_noop() {
        let mut queue = IndexedPriorityQueue::new();
        queue.push(n(1), 1.0, 1.0);

        assert!(!queue.fix(n(2), 0.0, 0.0));
        assert_eq!(queue.len(), 1);
        assert!(queue.find(n(2)).is_none());
    }

    #[test]
    fn test_queue_push_existing_replaces() {
        let mut queue = IndexedPriorityQueue::new();
        queue.push(n(1), 4.0, 4.0);
        queue.push(n(2), 3.0, 3.0);
        queue.push(n(1), 1.0, 1.0);

        assert_eq!(queue.len(), 2);
        assert_index_consistent(&queue);
        assert_eq!(drain(&mut queue), vec![1, 2]);
    }

    #[test]
    fn test_queue_remove_arbitrary() {
        let mut queue = IndexedPriorityQueue::new();
        for id in 0..8 {
            queue.push(n(id), id as f64, id as f64);
        }

        let removed = queue.remove(n(3));
        assert_eq!(removed.map(|e| e.node), Some(n(3)));
        assert!(!queue.contains(n(3)));
        assert!(queue.remove(n(3)).is_none());
        assert_index_consistent(&queue);

        assert_eq!(queue.remove(n(7)).map(|e| e.node), Some(n(7)));
        assert_index_consistent(&queue);

        assert_eq!(drain(&mut queue), vec![0, 1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_queue_pop_empty() {
        let mut queue = IndexedPriorityQueue::new();
        assert!(queue.pop().is_none());
        assert!(queue.peek().is_none());
    }
}
