// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Directed weighted graphs and single-source shortest paths
//!
//! A graph here is nothing more than the ability to list a vertex's
//! outgoing edges.  That is enough for both a graph held in memory
//! ([`AdjacencyListGraph`]) and one that invents its vertices and edges
//! on demand, the way the pixel graph in `seamcarving` does.
//!
//! Two solvers answer the same question from one start vertex:
//! [`DijkstraSolver`] relaxes edges in order of a priority queue, and
//! [`ToposortDagSolver`] relaxes them once, in topological order, which
//! only works when the graph has no cycles.  Both do all of their work
//! in `run`; `solution` only reads what `run` recorded.

mod adjacency;
mod dijkstra;
mod toposort;

pub use self::adjacency::AdjacencyListGraph;
pub use self::dijkstra::DijkstraSolver;
pub use self::toposort::ToposortDagSolver;

use crate::errors::{Error, Result};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

/// Anything usable as a vertex: a hashable, comparable, cloneable key.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// A directed, weighted edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Edge { from, to, weight }
    }
}

/// A directed graph, as seen from one vertex at a time.
pub trait Graph<V: Clone> {
    /// The outgoing edges of `vertex`, in a stable order.  A vertex the
    /// graph knows nothing about has none.
    fn neighbors(&self, vertex: &V) -> Cow<'_, [Edge<V>]>;
}

/// Single-source shortest paths.  `run` is the constructor: choosing a
/// solver type chooses the algorithm, and call sites stay the same.
pub trait ShortestPathSolver<V: Vertex>: Sized {
    /// Compute shortest paths from `start` to everything it reaches.
    fn run<G: Graph<V> + ?Sized>(graph: &G, start: V) -> Result<Self>;

    /// The distances and predecessors `run` settled on.
    fn paths(&self) -> &ShortestPaths<V>;

    fn start(&self) -> &V {
        &self.paths().start
    }

    /// Length of the shortest path to `vertex`, or `None` if `run`
    /// never reached it.
    fn dist_to(&self, vertex: &V) -> Option<f64> {
        self.paths().dist_to.get(vertex).cloned()
    }

    /// The last edge on the shortest path to `vertex`.  `None` for the
    /// start vertex and for anything unreached.
    fn edge_to(&self, vertex: &V) -> Option<&Edge<V>> {
        self.paths().edge_to.get(vertex)
    }

    fn has_path_to(&self, vertex: &V) -> bool {
        self.paths().dist_to.contains_key(vertex)
    }

    /// The vertices of the shortest path from the start to `goal`,
    /// both ends included.  Fails with `UnreachableGoal` if `goal` was
    /// never reached.
    fn solution(&self, goal: &V) -> Result<Vec<V>> {
        self.paths().path_to(goal)
    }
}

/// What a solver leaves behind: a predecessor edge and a distance for
/// every vertex it reached.  The start has a distance and no edge.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V: Vertex> {
    start: V,
    edge_to: HashMap<V, Edge<V>>,
    dist_to: HashMap<V, f64>,
}

impl<V: Vertex> ShortestPaths<V> {
    pub(crate) fn new(start: V) -> Self {
        let mut dist_to = HashMap::new();
        dist_to.insert(start.clone(), 0.0);
        ShortestPaths {
            start,
            edge_to: HashMap::new(),
            dist_to,
        }
    }

    /// Relax one edge.  Returns the new distance of `edge.to` if the
    /// edge strictly improved it.
    pub(crate) fn relax(&mut self, edge: &Edge<V>) -> Option<f64> {
        let from = *self.dist_to.get(&edge.from)?;
        let candidate = from + edge.weight;
        let current = self
            .dist_to
            .get(&edge.to)
            .cloned()
            .unwrap_or(std::f64::INFINITY);
        if candidate < current {
            self.dist_to.insert(edge.to.clone(), candidate);
            self.edge_to.insert(edge.to.clone(), edge.clone());
            Some(candidate)
        } else {
            None
        }
    }

    pub(crate) fn reached(&self) -> usize {
        self.dist_to.len()
    }

    fn path_to(&self, goal: &V) -> Result<Vec<V>> {
        if !self.dist_to.contains_key(goal) {
            return Err(Error::unreachable(goal));
        }
        let mut path = vec![goal.clone()];
        let mut current = goal;
        while let Some(edge) = self.edge_to.get(current) {
            // A chain longer than the number of reached vertices can
            // only be a cycle in the predecessors.
            if path.len() > self.dist_to.len() {
                return Err(Error::unreachable(goal));
            }
            path.push(edge.from.clone());
            current = &edge.from;
        }
        if *current != self.start {
            return Err(Error::unreachable(goal));
        }
        path.reverse();
        Ok(path)
    }
}

/// Runtime choice of solver, for callers that pick the algorithm from
/// configuration rather than at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Dijkstra,
    Toposort,
}

impl FromStr for SolverKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(SolverKind::Dijkstra),
            "toposort" | "topological" => Ok(SolverKind::Toposort),
            _ => Err(Error::UnknownAlgorithm("solver", name.to_string())),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{AdjacencyListGraph, Edge};

    /// A small DAG with two routes to `e`, the cheaper one longer:
    ///
    /// ```text
    ///   a --2-- b --1-- d --4-- e
    ///   |                       |
    ///   +--10-- c ------0-------+
    /// ```
    pub fn diamond() -> AdjacencyListGraph<&'static str> {
        AdjacencyListGraph::from_edges(vec![
            Edge::new("a", "b", 2.0),
            Edge::new("a", "c", 10.0),
            Edge::new("b", "d", 1.0),
            Edge::new("d", "e", 4.0),
            Edge::new("c", "e", 0.0),
        ])
    }

    /// Path cost, summed edge by edge.
    pub fn path_weight(graph: &AdjacencyListGraph<&'static str>, path: &[&'static str]) -> f64 {
        use super::Graph;
        path.windows(2)
            .map(|pair| {
                graph
                    .neighbors(&pair[0])
                    .iter()
                    .filter(|edge| edge.to == pair[1])
                    .map(|edge| edge.weight)
                    .fold(std::f64::INFINITY, f64::min)
            })
            .sum()
    }
}
