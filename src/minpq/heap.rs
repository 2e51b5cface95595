// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::{ExtrinsicMinPQ, PriorityNode};
use crate::errors::{Error, Result};
use std::fmt::Debug;

/// Binary heap min-priority queue with no index.  The heap moves are
/// O(log n), but finding an item for `contains` or `change_priority`
/// is a linear scan.  Zero-based, unlike the indexed heap.
#[derive(Debug, Clone)]
pub struct HeapMinPQ<T> {
    nodes: Vec<PriorityNode<T>>,
}

impl<T: PartialEq + Debug> HeapMinPQ<T> {
    pub fn new() -> Self {
        HeapMinPQ { nodes: Vec::new() }
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.nodes.iter().position(|node| node.item() == item)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.nodes[i].priority() >= self.nodes[parent].priority() {
                break;
            }
            self.nodes.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.nodes.len();
        loop {
            let (left, right) = (2 * i + 1, 2 * i + 2);
            if left >= len {
                break;
            }
            let child = if right < len && self.nodes[right].priority() < self.nodes[left].priority() {
                right
            } else {
                left
            };
            if self.nodes[child].priority() >= self.nodes[i].priority() {
                break;
            }
            self.nodes.swap(i, child);
            i = child;
        }
    }
}

impl<T: PartialEq + Debug> Default for HeapMinPQ<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq + Debug> ExtrinsicMinPQ<T> for HeapMinPQ<T> {
    fn add(&mut self, item: T, priority: f64) -> Result<()> {
        if self.contains(&item) {
            return Err(Error::duplicate(&item));
        }
        self.nodes.push(PriorityNode::new(item, priority));
        let last = self.nodes.len() - 1;
        self.sift_up(last);
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    fn peek_min(&self) -> Result<&T> {
        self.nodes.first().map(PriorityNode::item).ok_or(Error::EmptyQueue)
    }

    fn peek_min_priority(&self) -> Result<f64> {
        self.nodes.first().map(PriorityNode::priority).ok_or(Error::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<T> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let node = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(node.into_item())
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        let i = self.position(item).ok_or_else(|| Error::not_found(item))?;
        self.nodes[i].set_priority(priority);
        self.sift_up(i);
        self.sift_down(i);
        Ok(())
    }

    fn size(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::super::contract;
    use super::*;

    #[test]
    fn removes_in_ascending_priority() {
        contract::removes_in_ascending_priority(HeapMinPQ::new());
    }

    #[test]
    fn duplicate_add_leaves_queue_unchanged() {
        contract::duplicate_add_leaves_queue_unchanged(HeapMinPQ::new());
    }

    #[test]
    fn empty_queue_errors() {
        contract::empty_queue_errors(HeapMinPQ::new());
    }

    #[test]
    fn change_priority_moves_items() {
        contract::change_priority_moves_items(HeapMinPQ::new());
    }

    #[test]
    fn lowering_the_minimum_keeps_it() {
        contract::lowering_the_minimum_keeps_it(HeapMinPQ::new());
    }

    #[test]
    fn contains_tracks_membership() {
        contract::contains_tracks_membership(HeapMinPQ::new());
    }
}
