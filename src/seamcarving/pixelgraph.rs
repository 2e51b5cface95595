// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A picture as a graph
//!
//! One vertex per pixel plus a source to the left of the picture and a
//! sink to its right.  The source has an edge to every pixel in the
//! first column, each pixel has an edge to its up, middle and down
//! neighbours in the next column, and every pixel in the last column
//! has an edge to the sink.  An edge weighs the energy of the pixel it
//! enters, so edges into the sink weigh nothing, and the cheapest
//! source-to-sink path is the cheapest seam.
//!
//! Nothing is stored: each call to `neighbors` computes the edges again.

use super::EnergyFunction;
use crate::graph::{AdjacencyListGraph, Edge, Graph};
use image::GenericImageView;
use itertools::iproduct;
use std::borrow::Cow;

/// A vertex of the pixel graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Source,
    Sink,
    Pixel { x: u32, y: u32 },
}

/// The generative pixel graph over a picture and an energy function.
pub struct PixelGraph<'a, I, E: ?Sized> {
    picture: &'a I,
    energy: &'a E,
}

impl<'a, I, E> PixelGraph<'a, I, E>
where
    I: GenericImageView,
    E: EnergyFunction<I> + ?Sized,
{
    pub fn new(picture: &'a I, energy: &'a E) -> Self {
        PixelGraph { picture, energy }
    }

    fn edge_into(&self, from: Node, x: u32, y: u32) -> Edge<Node> {
        Edge::new(from, Node::Pixel { x, y }, self.energy.energy(self.picture, x, y))
    }

    /// Build every vertex and edge now, into an adjacency list.
    pub fn materialize(&self) -> AdjacencyListGraph<Node> {
        let (width, height) = self.picture.dimensions();
        let pixels = iproduct!(0..width, 0..height).map(|(x, y)| Node::Pixel { x, y });
        AdjacencyListGraph::from_edges(
            std::iter::once(Node::Source)
                .chain(pixels)
                .flat_map(|node| self.neighbors(&node).into_owned()),
        )
    }
}

impl<'a, I, E> Graph<Node> for PixelGraph<'a, I, E>
where
    I: GenericImageView,
    E: EnergyFunction<I> + ?Sized,
{
    fn neighbors(&self, node: &Node) -> Cow<'_, [Edge<Node>]> {
        let (width, height) = self.picture.dimensions();
        let edges: Vec<Edge<Node>> = match *node {
            Node::Source => (0..height).map(|y| self.edge_into(Node::Source, 0, y)).collect(),
            Node::Sink => Vec::new(),
            Node::Pixel { x, .. } if x + 1 >= width => vec![Edge::new(*node, Node::Sink, 0.0)],
            Node::Pixel { x, y } => {
                let rows = y.saturating_sub(1)..=(y + 1).min(height - 1);
                rows.map(|z| self.edge_into(*node, x + 1, z)).collect()
            }
        };
        Cow::Owned(edges)
    }
}
