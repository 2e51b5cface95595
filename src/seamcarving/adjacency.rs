// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::generative::solve_for_seam;
use super::pixelgraph::{Node, PixelGraph};
use super::{check_dimensions, EnergyFunction, SeamFinder};
use crate::errors::Result;
use crate::graph::ShortestPathSolver;
use image::GenericImageView;
use std::marker::PhantomData;
use tracing::debug;

/// Finds seams like [`GenerativeSeamFinder`](super::GenerativeSeamFinder),
/// but builds the whole pixel graph into an adjacency list before the
/// solver starts.  Each edge's energy is computed exactly once, at the
/// cost of holding every edge in memory.
pub struct AdjacencyListSeamFinder<S> {
    solver: PhantomData<S>,
}

impl<S: ShortestPathSolver<Node>> AdjacencyListSeamFinder<S> {
    pub fn new() -> Self {
        AdjacencyListSeamFinder {
            solver: PhantomData,
        }
    }
}

impl<S: ShortestPathSolver<Node>> Default for AdjacencyListSeamFinder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ShortestPathSolver<Node>> SeamFinder for AdjacencyListSeamFinder<S> {
    fn find_seam<I, E>(&self, picture: &I, energy: &E) -> Result<Vec<u32>>
    where
        I: GenericImageView,
        E: EnergyFunction<I> + ?Sized,
    {
        let (width, _) = check_dimensions(picture)?;
        let graph = PixelGraph::new(picture, energy).materialize();
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "pixel graph materialized"
        );
        solve_for_seam::<S, _>(&graph, width)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{luma_energy, picture};
    use super::*;
    use crate::graph::{DijkstraSolver, ToposortDagSolver};
    use std::cell::Cell;

    #[test]
    fn energy_is_computed_once_per_edge() {
        let image = picture(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let calls = Cell::new(0);
        let counting = |p: &image::GrayImage, x: u32, y: u32| {
            calls.set(calls.get() + 1);
            luma_energy(p, x, y)
        };
        let seam = AdjacencyListSeamFinder::<ToposortDagSolver<Node>>::new()
            .find_seam(&image, &counting)
            .unwrap();
        // Top row is cheapest everywhere.
        assert_eq!(seam, vec![0, 0, 0]);
        // 3 from the source and 2 + 3 + 2 into each later column.
        assert_eq!(calls.get(), 3 + 7 + 7);
    }

    #[test]
    fn agrees_with_the_generative_graph() {
        let image = picture(3, 3, &[5, 1, 1, 1, 5, 5, 5, 5, 5]);
        let materialized = AdjacencyListSeamFinder::<DijkstraSolver<Node>>::new()
            .find_seam(&image, &luma_energy)
            .unwrap();
        let generative = super::super::GenerativeSeamFinder::<DijkstraSolver<Node>>::new()
            .find_seam(&image, &luma_energy)
            .unwrap();
        assert_eq!(materialized, generative);
        assert_eq!(materialized, vec![1, 0, 0]);
    }
}
