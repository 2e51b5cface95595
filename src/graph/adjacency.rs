// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::{Edge, Graph, Vertex};
use std::borrow::Cow;
use std::collections::HashMap;

/// A graph with every vertex and edge built up front.  Each vertex maps
/// to its outgoing edges in the order they were added.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<V: Vertex> {
    adjacency: HashMap<V, Vec<Edge<V>>>,
    edges: usize,
}

impl<V: Vertex> AdjacencyListGraph<V> {
    pub fn new() -> Self {
        AdjacencyListGraph {
            adjacency: HashMap::new(),
            edges: 0,
        }
    }

    pub fn from_edges<I: IntoIterator<Item = Edge<V>>>(edges: I) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Both ends become vertices of the graph, even a destination with
    /// no edges of its own.
    pub fn add_edge(&mut self, edge: Edge<V>) {
        self.adjacency.entry(edge.to.clone()).or_insert_with(Vec::new);
        self.adjacency
            .entry(edge.from.clone())
            .or_insert_with(Vec::new)
            .push(edge);
        self.edges += 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }
}

impl<V: Vertex> Default for AdjacencyListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> for AdjacencyListGraph<V> {
    fn neighbors(&self, vertex: &V) -> Cow<'_, [Edge<V>]> {
        match self.adjacency.get(vertex) {
            Some(edges) => Cow::Borrowed(edges.as_slice()),
            None => Cow::Borrowed(&[]),
        }
    }
}
