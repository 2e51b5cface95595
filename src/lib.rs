// #![deny(missing_docs)]

//! Least-energy seams through a picture, found by dynamic programming
//! or by single-source shortest paths over a graph of its pixels, and
//! the priority queues and solvers that the graph search is built on.

pub mod errors;
pub use errors::{Error, Result};

pub mod minpq;
pub use minpq::{ExtrinsicMinPQ, HeapMinPQ, OptimizedHeapMinPQ, PriorityNode, UnsortedArrayMinPQ};

pub mod graph;
pub use graph::{
    AdjacencyListGraph, DijkstraSolver, Edge, Graph, ShortestPathSolver, SolverKind,
    ToposortDagSolver,
};

pub mod seamcarving;
pub use seamcarving::{
    find_seam_with, seam_energy, AdjacencyListSeamFinder, DualGradientEnergy,
    DynamicProgrammingSeamFinder, EnergyFunction, FinderKind, GenerativeSeamFinder, Node,
    SeamFinder,
};

pub mod twodmap;
