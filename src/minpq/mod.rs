// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Min-priority queues with extrinsic priorities
//!
//! The priority lives beside the item, not inside it, so the same
//! item can be re-prioritized without the caller holding a reference
//! into the queue.  Items are unique within a queue.
//!
//! Three implementations share the one contract:
//!
//! * [`OptimizedHeapMinPQ`]: a binary heap plus an item-to-slot index.
//!   Every operation is O(log n), `contains` is O(1).
//! * [`HeapMinPQ`]: the same heap without the index, so `contains` and
//!   `change_priority` fall back to a linear scan.
//! * [`UnsortedArrayMinPQ`]: a plain vector, linear everywhere.
//!
//! The last two exist for comparison; the solvers use the first.
//! Ties between equal priorities come out in whatever order the
//! structure happens to produce.

mod heap;
mod optimized;
mod unsorted;

pub use self::heap::HeapMinPQ;
pub use self::optimized::OptimizedHeapMinPQ;
pub use self::unsorted::UnsortedArrayMinPQ;

use crate::errors::Result;

/// An item and its priority.  The item never changes once the node
/// exists; the priority is rewritten in place by the queue that owns
/// the node.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityNode<T> {
    item: T,
    priority: f64,
}

impl<T> PriorityNode<T> {
    pub fn new(item: T, priority: f64) -> Self {
        PriorityNode { item, priority }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn priority(&self) -> f64 {
        self.priority
    }

    pub(crate) fn set_priority(&mut self, priority: f64) {
        self.priority = priority;
    }

    pub fn into_item(self) -> T {
        self.item
    }
}

/// A min-priority queue of unique items.
pub trait ExtrinsicMinPQ<T> {
    /// Add an item with the given priority.  Fails with
    /// `DuplicateItem`, leaving the queue untouched, if the item is
    /// already present.
    fn add(&mut self, item: T, priority: f64) -> Result<()>;

    /// Whether the item is in the queue.
    fn contains(&self, item: &T) -> bool;

    /// The item with the least priority, left in place.
    fn peek_min(&self) -> Result<&T>;

    /// The least priority currently held.
    fn peek_min_priority(&self) -> Result<f64>;

    /// Remove and return the item with the least priority.
    fn remove_min(&mut self) -> Result<T>;

    /// Replace an item's priority.  Fails with `NotFound` if the item
    /// isn't present.
    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()>;

    /// Number of items held.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
