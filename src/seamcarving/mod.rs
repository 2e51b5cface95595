// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam finding
//!
//! A seam runs left to right through a picture, one pixel per column,
//! each pixel in the same row as its predecessor or one row above or
//! below.  The seam with the least total energy is the one to remove
//! when narrowing the picture's height without disturbing what matters
//! in it.
//!
//! Three finders produce the same answer:
//!
//! * [`DynamicProgrammingSeamFinder`] fills a cumulative-energy table
//!   and walks it backward.  It is the fast one.
//! * [`GenerativeSeamFinder`] runs a shortest-path solver over a pixel
//!   graph whose edges are computed on demand.
//! * [`AdjacencyListSeamFinder`] runs the solver over the same graph,
//!   built in full first.

mod adjacency;
mod dynamic;
mod energy;
mod generative;
mod pixelgraph;

pub use self::adjacency::AdjacencyListSeamFinder;
pub use self::dynamic::DynamicProgrammingSeamFinder;
pub use self::energy::DualGradientEnergy;
pub use self::generative::GenerativeSeamFinder;
pub use self::pixelgraph::{Node, PixelGraph};

use crate::errors::{Error, Result};
use crate::graph::{DijkstraSolver, SolverKind, ToposortDagSolver};
use image::GenericImageView;
use std::str::FromStr;
use tracing::{info_span, trace};

/// The cost of a pixel.  Must be non-negative, and is asked for as
/// often as the caller needs it: nothing is cached.
pub trait EnergyFunction<I: ?Sized> {
    fn energy(&self, picture: &I, x: u32, y: u32) -> f64;
}

impl<I: ?Sized, F> EnergyFunction<I> for F
where
    F: Fn(&I, u32, u32) -> f64,
{
    fn energy(&self, picture: &I, x: u32, y: u32) -> f64 {
        self(picture, x, y)
    }
}

/// Finds the least-energy seam in a picture.  The seam is the row of
/// each column's pixel, left to right: `width()` entries, each in
/// `0..height()`.
pub trait SeamFinder {
    fn find_seam<I, E>(&self, picture: &I, energy: &E) -> Result<Vec<u32>>
    where
        I: GenericImageView,
        E: EnergyFunction<I> + ?Sized;
}

// Every finder refuses pictures with nothing in them.
pub(crate) fn check_dimensions<I: GenericImageView>(picture: &I) -> Result<(u32, u32)> {
    let (width, height) = picture.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyPicture(width, height));
    }
    Ok((width, height))
}

/// Total energy of the pixels along a seam.
pub fn seam_energy<I, E>(picture: &I, energy: &E, seam: &[u32]) -> f64
where
    I: GenericImageView,
    E: EnergyFunction<I> + ?Sized,
{
    seam.iter()
        .enumerate()
        .map(|(x, y)| energy.energy(picture, x as u32, *y))
        .sum()
}

/// Runtime choice of seam finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderKind {
    DynamicProgramming,
    Generative,
    AdjacencyList,
}

impl FromStr for FinderKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dp" | "dynamic" => Ok(FinderKind::DynamicProgramming),
            "generative" => Ok(FinderKind::Generative),
            "adjacency" | "adjacency-list" => Ok(FinderKind::AdjacencyList),
            _ => Err(Error::UnknownAlgorithm("seam finder", name.to_string())),
        }
    }
}

/// Find a seam with the finder and solver named at runtime.  The
/// dynamic programming finder ignores the solver.
pub fn find_seam_with<I, E>(
    finder: FinderKind,
    solver: SolverKind,
    picture: &I,
    energy: &E,
) -> Result<Vec<u32>>
where
    I: GenericImageView,
    E: EnergyFunction<I> + ?Sized,
{
    let (width, height) = picture.dimensions();
    let span = info_span!("find_seam", ?finder, ?solver, width, height);
    let _enter = span.enter();

    let seam = match (finder, solver) {
        (FinderKind::DynamicProgramming, _) => {
            DynamicProgrammingSeamFinder.find_seam(picture, energy)
        }
        (FinderKind::Generative, SolverKind::Dijkstra) => {
            GenerativeSeamFinder::<DijkstraSolver<Node>>::new().find_seam(picture, energy)
        }
        (FinderKind::Generative, SolverKind::Toposort) => {
            GenerativeSeamFinder::<ToposortDagSolver<Node>>::new().find_seam(picture, energy)
        }
        (FinderKind::AdjacencyList, SolverKind::Dijkstra) => {
            AdjacencyListSeamFinder::<DijkstraSolver<Node>>::new().find_seam(picture, energy)
        }
        (FinderKind::AdjacencyList, SolverKind::Toposort) => {
            AdjacencyListSeamFinder::<ToposortDagSolver<Node>>::new().find_seam(picture, energy)
        }
    }?;
    trace!(seam = ?seam, "seam found");
    Ok(seam)
}
