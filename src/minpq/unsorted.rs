// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::{ExtrinsicMinPQ, PriorityNode};
use crate::errors::{Error, Result};
use std::fmt::Debug;

/// The baseline: an unsorted vector, scanned end to end for every
/// operation but `size`.
#[derive(Debug, Clone)]
pub struct UnsortedArrayMinPQ<T> {
    nodes: Vec<PriorityNode<T>>,
}

impl<T: PartialEq + Debug> UnsortedArrayMinPQ<T> {
    pub fn new() -> Self {
        UnsortedArrayMinPQ { nodes: Vec::new() }
    }

    // First of the least, so ties leave in insertion order.
    fn min_position(&self) -> Option<usize> {
        let mut least: Option<usize> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            match least {
                Some(j) if self.nodes[j].priority() <= node.priority() => {}
                _ => least = Some(i),
            }
        }
        least
    }
}

impl<T: PartialEq + Debug> Default for UnsortedArrayMinPQ<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq + Debug> ExtrinsicMinPQ<T> for UnsortedArrayMinPQ<T> {
    fn add(&mut self, item: T, priority: f64) -> Result<()> {
        if self.contains(&item) {
            return Err(Error::duplicate(&item));
        }
        self.nodes.push(PriorityNode::new(item, priority));
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.nodes.iter().any(|node| node.item() == item)
    }

    fn peek_min(&self) -> Result<&T> {
        let i = self.min_position().ok_or(Error::EmptyQueue)?;
        Ok(self.nodes[i].item())
    }

    fn peek_min_priority(&self) -> Result<f64> {
        let i = self.min_position().ok_or(Error::EmptyQueue)?;
        Ok(self.nodes[i].priority())
    }

    fn remove_min(&mut self) -> Result<T> {
        let i = self.min_position().ok_or(Error::EmptyQueue)?;
        Ok(self.nodes.remove(i).into_item())
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| node.item() == item)
            .ok_or_else(|| Error::not_found(item))?;
        node.set_priority(priority);
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
        contract::removes_in_ascending_priority(UnsortedArrayMinPQ::new());
    }

    #[test]
    fn duplicate_add_leaves_queue_unchanged() {
        contract::duplicate_add_leaves_queue_unchanged(UnsortedArrayMinPQ::new());
    }

    #[test]
    fn empty_queue_errors() {
        contract::empty_queue_errors(UnsortedArrayMinPQ::new());
    }

    #[test]
    fn change_priority_moves_items() {
        contract::change_priority_moves_items(UnsortedArrayMinPQ::new());
    }

    #[test]
    fn lowering_the_minimum_keeps_it() {
        contract::lowering_the_minimum_keeps_it(UnsortedArrayMinPQ::new());
    }

    #[test]
    fn contains_tracks_membership() {
        contract::contains_tracks_membership(UnsortedArrayMinPQ::new());
    }

    #[test]
    fn equal_priorities_leave_in_insertion_order() {
        let mut pq = UnsortedArrayMinPQ::new();
        pq.add("first", 1.0).unwrap();
        pq.add("second", 1.0).unwrap();
        assert_eq!(contract::drain(&mut pq), vec!["first", "second"]);
    }
}
