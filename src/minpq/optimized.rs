// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The indexed binary heap.
//!
//! Slots are numbered from 1, so the parent of slot `i` is `i / 2` and
//! its children are `2i` and `2i + 1`.  Slot `i` lives at
//! `nodes[i - 1]`; the arithmetic below only ever speaks in slots.
//!
//! `index` maps every item to the slot holding it.  It is rewritten on
//! every swap, insertion and removal, and nothing else touches `nodes`
//! without going through `swap`.

use super::{ExtrinsicMinPQ, PriorityNode};
use crate::errors::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Binary heap min-priority queue with an item-to-slot index, giving
/// O(log n) `add`, `remove_min` and `change_priority`.
#[derive(Debug, Clone)]
pub struct OptimizedHeapMinPQ<T: Eq + Hash> {
    nodes: Vec<PriorityNode<T>>,
    index: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone + Debug> OptimizedHeapMinPQ<T> {
    pub fn new() -> Self {
        OptimizedHeapMinPQ {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        OptimizedHeapMinPQ {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    fn priority_at(&self, slot: usize) -> f64 {
        self.nodes[slot - 1].priority()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a - 1, b - 1);
        for &slot in &[a, b] {
            let item = self.nodes[slot - 1].item().clone();
            self.index.insert(item, slot);
        }
    }

    // Toward the root while the parent is larger.
    fn swim(&mut self, mut slot: usize) {
        while slot > 1 && self.priority_at(slot) < self.priority_at(slot / 2) {
            self.swap(slot, slot / 2);
            slot /= 2;
        }
    }

    // Toward the leaves while the smaller child is smaller than the
    // parent.  A lone left child is still a child.
    fn sink(&mut self, mut slot: usize) {
        let size = self.nodes.len();
        while 2 * slot <= size {
            let left = 2 * slot;
            let right = left + 1;
            let child = if right <= size && self.priority_at(right) < self.priority_at(left) {
                right
            } else {
                left
            };
            if self.priority_at(child) >= self.priority_at(slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }

    /// Whether every slot is no larger than its children and the index
    /// agrees with the heap about where every item lives.
    pub fn is_valid_heap(&self) -> bool {
        let size = self.nodes.len();
        let ordered = (2..=size).all(|slot| self.priority_at(slot / 2) <= self.priority_at(slot));
        let indexed = self.index.len() == size
            && self
                .nodes
                .iter()
                .enumerate()
                .all(|(i, node)| self.index.get(node.item()) == Some(&(i + 1)));
        ordered && indexed
    }
}

impl<T: Eq + Hash + Clone + Debug> Default for OptimizedHeapMinPQ<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone + Debug> ExtrinsicMinPQ<T> for OptimizedHeapMinPQ<T> {
    fn add(&mut self, item: T, priority: f64) -> Result<()> {
        if self.contains(&item) {
            return Err(Error::duplicate(&item));
        }
        debug_assert!(!priority.is_nan(), "NaN priority for {:?}", item);
        let slot = self.nodes.len() + 1;
        self.index.insert(item.clone(), slot);
        self.nodes.push(PriorityNode::new(item, priority));
        self.swim(slot);
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    fn peek_min(&self) -> Result<&T> {
        self.nodes.first().map(PriorityNode::item).ok_or(Error::EmptyQueue)
    }

    fn peek_min_priority(&self) -> Result<f64> {
        self.nodes.first().map(PriorityNode::priority).ok_or(Error::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<T> {
        let last = self.nodes.len();
        if last == 0 {
            return Err(Error::EmptyQueue);
        }
        self.swap(1, last);
        let node = self.nodes.pop().ok_or(Error::EmptyQueue)?;
        self.index.remove(node.item());
        if !self.nodes.is_empty() {
            self.sink(1);
        }
        Ok(node.into_item())
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        let slot = *self.index.get(item).ok_or_else(|| Error::not_found(item))?;
        debug_assert!(!priority.is_nan(), "NaN priority for {:?}", item);
        self.nodes[slot - 1].set_priority(priority);
        // Only one of these can move it, but we don't know which.
        self.swim(slot);
        self.sink(slot);
        Ok(())
    }

    fn size(&self) -> usize {
        self.nodes.len()
    }
}
