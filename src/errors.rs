// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Every error here is a contract violation by the caller: re-adding
//! an item, asking about one that isn't there, draining an empty
//! queue, or asking for a path to a vertex the solver never reached.
//! None of them are retryable.

use failure::Fail;
use std::fmt::Debug;

/// The error type for the priority queues, solvers and seam finders.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum Error {
    /// The item is already in the priority queue.
    #[fail(display = "priority queue already contains {}", _0)]
    DuplicateItem(String),

    /// The item is not in the priority queue.
    #[fail(display = "priority queue does not contain {}", _0)]
    NotFound(String),

    /// Peek or remove on a priority queue with nothing in it.
    #[fail(display = "priority queue is empty")]
    EmptyQueue,

    /// The solver never relaxed this vertex, so there is no path to it.
    #[fail(display = "no path from the start vertex to {}", _0)]
    UnreachableGoal(String),

    /// A seam was requested on a picture with no pixels.
    #[fail(display = "cannot find a seam in a {}x{} picture", _0, _1)]
    EmptyPicture(u32, u32),

    /// A runtime algorithm selector didn't name a known algorithm.
    #[fail(display = "unknown {} algorithm: {:?}", _0, _1)]
    UnknownAlgorithm(&'static str, String),
}

impl Error {
    pub(crate) fn duplicate<T: Debug>(item: &T) -> Self {
        Error::DuplicateItem(format!("{:?}", item))
    }

    pub(crate) fn not_found<T: Debug>(item: &T) -> Self {
        Error::NotFound(format!("{:?}", item))
    }

    pub(crate) fn unreachable<T: Debug>(goal: &T) -> Self {
        Error::UnreachableGoal(format!("{:?}", goal))
    }
}

/// Results from this crate.
pub type Result<T> = std::result::Result<T, Error>;
