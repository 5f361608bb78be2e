//! FIFO frontier of nodes awaiting expansion.
//!
//! Nodes are expanded in insertion order. Since every child has exactly one
//! token more than its parent, this explores equations in order of length.

use std::collections::{HashSet, VecDeque};

use crate::solver::config::DedupPolicy;
use crate::solver::node::{Node, NodeKey};

pub struct Frontier {
    queue: VecDeque<Node>,
    seen: HashSet<NodeKey>,
    policy: DedupPolicy,
    high_water: usize,
    skipped: u64,
}

impl Frontier {
    pub fn new(policy: DedupPolicy) -> Self {
        Self {
            queue: VecDeque::new(),
            seen: HashSet::new(),
            policy,
            high_water: 0,
            skipped: 0,
        }
    }

    /// Enqueue a node at the tail.
    ///
    /// Returns `false` if the dedup policy recognised the node's state and
    /// dropped it.
    pub fn push(&mut self, node: Node) -> bool {
        if let DedupPolicy::Bounded { capacity } = self.policy {
            let key = node.key();
            if self.seen.contains(&key) {
                self.skipped += 1;
                return false;
            }
            if self.seen.len() < capacity {
                self.seen.insert(key);
            }
        }

        self.queue.push_back(node);
        self.high_water = self.high_water.max(self.queue.len());
        true
    }

    /// Remove the node at the head.
    pub fn pop(&mut self) -> Option<Node> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Largest size the queue has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Nodes dropped as duplicates.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl Extend<Node> for Frontier {
    fn extend<T: IntoIterator<Item = Node>>(&mut self, iter: T) {
        for node in iter {
            self.push(node);
        }
    }
}
