//! # Errors
//!
//! [Error] is returned by every fallible operation of this crate.

use crate::Edit;
use thiserror::Error;

/// The input graph is not a tree.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InvalidTree {
    /// A node is its own descendant.
    #[error("A node is its own descendant.")]
    Cycle,
    /// A node is the child of more than one parent.
    #[error("A node is the child of more than one parent.")]
    SharedNode,
}

/// Tree edit distance error
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Error {
    /// See [`InvalidTree`] for more details.
    #[error(transparent)]
    InvalidTree(#[from] InvalidTree),
    /// The cost model priced an edit below zero, or not at all (e.g. NaN).
    #[error("The cost of {0:?} is not a non-negative number.")]
    InvalidCost(Edit),
    /// The computation was cancelled before it completed.
    #[error("The computation was cancelled.")]
    Cancelled,
}
