// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shortest paths by priority-queue relaxation.
//!
//! Take the closest unsettled vertex, relax its outgoing edges, and
//! queue whatever got closer.  A vertex that improves after it has
//! already left the queue goes back in, so negative edges are fine as
//! long as no negative cycle is reachable; with non-negative weights
//! that never happens and this is plain Dijkstra.

use super::{Graph, ShortestPathSolver, ShortestPaths, Vertex};
use crate::errors::Result;
use crate::minpq::{ExtrinsicMinPQ, OptimizedHeapMinPQ};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DijkstraSolver<V: Vertex> {
    paths: ShortestPaths<V>,
}

impl<V: Vertex> ShortestPathSolver<V> for DijkstraSolver<V> {
    fn run<G: Graph<V> + ?Sized>(graph: &G, start: V) -> Result<Self> {
        let mut paths = ShortestPaths::new(start.clone());
        let mut pq = OptimizedHeapMinPQ::new();
        pq.add(start, 0.0)?;

        let (mut settled, mut relaxed) = (0usize, 0usize);
        while !pq.is_empty() {
            let vertex = pq.remove_min()?;
            settled += 1;
            for edge in graph.neighbors(&vertex).iter() {
                if let Some(distance) = paths.relax(edge) {
                    relaxed += 1;
                    if pq.contains(&edge.to) {
                        pq.change_priority(&edge.to, distance)?;
                    } else {
                        pq.add(edge.to.clone(), distance)?;
                    }
                }
            }
        }

        debug!(
            reached = paths.reached(),
            settled, relaxed, "priority-queue shortest paths complete"
        );
        Ok(DijkstraSolver { paths })
    }

    fn paths(&self) -> &ShortestPaths<V> {
        &self.paths
    }
}
