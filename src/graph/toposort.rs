// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shortest paths in a directed acyclic graph.
//!
//! A depth-first walk from the start records vertices as they finish;
//! reversed, that is a topological order of everything reachable.
//! Relaxing each vertex's edges in that order settles every vertex
//! before it is relaxed from, so one linear pass suffices and no
//! priority queue is needed.  Edge weights may be negative.  Cycles
//! are not detected and give wrong answers.
//!
//! The walk keeps its own stack: a picture's graph is as deep as the
//! picture is wide, far deeper than the call stack is happy with.

use super::{Edge, Graph, ShortestPathSolver, ShortestPaths, Vertex};
use crate::errors::Result;
use std::collections::HashSet;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct ToposortDagSolver<V: Vertex> {
    paths: ShortestPaths<V>,
}

// A vertex on the walk's stack, its outgoing edges, and how many of
// them have been followed.  Finished frames keep their edges for the
// relaxation pass, so `neighbors` is asked once per vertex.
struct Frame<V> {
    vertex: V,
    edges: Vec<Edge<V>>,
    next: usize,
}

impl<V: Vertex> Frame<V> {
    fn open<G: Graph<V> + ?Sized>(graph: &G, vertex: V) -> Self {
        let edges = graph.neighbors(&vertex).into_owned();
        Frame {
            vertex,
            edges,
            next: 0,
        }
    }
}

// Depth-first post-order from `start`.  Each vertex is opened once.
fn post_order<V: Vertex, G: Graph<V> + ?Sized>(graph: &G, start: V) -> Vec<Frame<V>> {
    let mut visited = HashSet::new();
    let mut finished = Vec::new();
    visited.insert(start.clone());
    let mut stack = vec![Frame::open(graph, start)];

    while let Some(frame) = stack.last_mut() {
        match frame.edges.get(frame.next) {
            Some(edge) => {
                let to = edge.to.clone();
                frame.next += 1;
                if visited.insert(to.clone()) {
                    stack.push(Frame::open(graph, to));
                }
            }
            None => {
                if let Some(done) = stack.pop() {
                    finished.push(done);
                }
            }
        }
    }
    finished
}

impl<V: Vertex> ShortestPathSolver<V> for ToposortDagSolver<V> {
    fn run<G: Graph<V> + ?Sized>(graph: &G, start: V) -> Result<Self> {
        let mut paths = ShortestPaths::new(start.clone());
        let order = post_order(graph, start);

        let mut relaxed = 0usize;
        for frame in order.iter().rev() {
            trace!(vertex = ?frame.vertex, edges = frame.edges.len(), "relaxing");
            for edge in &frame.edges {
                if paths.relax(edge).is_some() {
                    relaxed += 1;
                }
            }
        }

        debug!(
            reached = paths.reached(),
            ordered = order.len(),
            relaxed,
            "topological shortest paths complete"
        );
        Ok(ToposortDagSolver { paths })
    }

    fn paths(&self) -> &ShortestPaths<V> {
        &self.paths
    }
}
