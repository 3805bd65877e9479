//! Priority frontier shared by the best-first engines.

use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// A min-priority queue of nodes with deterministic tie-breaking. Entries with
/// equal priority come out in insertion order, and pushing a node that is
/// already queued replaces its entry, giving it a fresh position in that
/// order. There is at most one entry per node.
#[derive(Debug)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, u64)>>,
    next_sequence: u64,
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    /// Insert `node_id`, or replace its priority if it is already queued.
    pub fn push(&mut self, node_id: NodeId, priority: HeuristicValue) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(node_id, Reverse((priority, sequence)));
    }

    /// Remove the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<(NodeId, HeuristicValue)> {
        self.queue
            .pop()
            .map(|(node_id, Reverse((priority, _)))| (node_id, priority))
    }

    pub fn priority(&self, node_id: NodeId) -> Option<HeuristicValue> {
        self.queue
            .get_priority(&node_id)
            .map(|Reverse((priority, _))| *priority)
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        self.queue.get(&node_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
