// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::pixelgraph::{Node, PixelGraph};
use super::{check_dimensions, EnergyFunction, SeamFinder};
use crate::errors::Result;
use crate::graph::{Graph, ShortestPathSolver};
use image::GenericImageView;
use std::marker::PhantomData;

// Drop the source and sink from a source-to-sink path and keep the row
// of each pixel in between.
pub(crate) fn path_to_seam(path: Vec<Node>) -> Vec<u32> {
    path.into_iter()
        .filter_map(|node| match node {
            Node::Pixel { y, .. } => Some(y),
            Node::Source | Node::Sink => None,
        })
        .collect()
}

// Shared by both graph-backed finders.
pub(crate) fn solve_for_seam<S, G>(graph: &G, width: u32) -> Result<Vec<u32>>
where
    S: ShortestPathSolver<Node>,
    G: Graph<Node> + ?Sized,
{
    let path = S::run(graph, Node::Source)?.solution(&Node::Sink)?;
    let seam = path_to_seam(path);
    debug_assert_eq!(seam.len(), width as usize);
    Ok(seam)
}

/// Finds seams by running a shortest-path solver `S` from the source
/// to the sink of a [`PixelGraph`].  The graph is never stored; edges
/// and their energies are computed each time the solver asks.
pub struct GenerativeSeamFinder<S> {
    solver: PhantomData<S>,
}

impl<S: ShortestPathSolver<Node>> GenerativeSeamFinder<S> {
    pub fn new() -> Self {
        GenerativeSeamFinder {
            solver: PhantomData,
        }
    }
}

impl<S: ShortestPathSolver<Node>> Default for GenerativeSeamFinder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ShortestPathSolver<Node>> SeamFinder for GenerativeSeamFinder<S> {
    fn find_seam<I, E>(&self, picture: &I, energy: &E) -> Result<Vec<u32>>
    where
        I: GenericImageView,
        E: EnergyFunction<I> + ?Sized,
    {
        let (width, _) = check_dimensions(picture)?;
        solve_for_seam::<S, _>(&PixelGraph::new(picture, energy), width)
    }
}
