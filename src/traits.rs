use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The required interface for structs representing nodes in a binary tree.
///
/// Every traversal in this crate is generic over `Node`, so any owned tree type can be walked
/// as long as it can hand out its value and borrow its children.
pub trait Node {
    /// The payload stored in each node.
    type Value;
    /// Gets the value stored in this node.
    fn value(&self) -> &Self::Value;
    /// Gets the left child of this node, if any.
    fn left(&self) -> Option<&Self>;
    /// Gets the right child of this node, if any.
    fn right(&self) -> Option<&Self>;
    /// Checks if this node has no children.
    #[inline]
    fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}

/// A generic error that implements `Error`.
/// Mostly intended to be used to standardize errors across the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    /// The details of an exception
    details: String,
}

impl Exception {
    /// Creates a new `Exception`.
    #[inline]
    #[must_use]
    pub fn new(details: &str) -> Self {
        Self {
            details: details.to_owned(),
        }
    }

    /// Gets the details of this `Exception`.
    #[inline]
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }
}

impl Display for Exception {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.details)
    }
}

impl Error for Exception {}

/// The result type for fallible traversals.
pub type TraversalResult<T> = Result<T, Exception>;
