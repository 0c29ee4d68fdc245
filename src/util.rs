//! Defines the `Error` type for the boolnet library, along with a few helpers shared across
//! modules.

use itertools::Itertools;
use thiserror::Error;

use std::result;

pub type Result<T> = result::Result<T, BoolnetError>;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum BoolnetError {

    /// An assignment or evidence set whose length does not match what was required
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A parent was referenced before it was added to the network
    #[error("Variable {variable} references {parent}, which is not already in the network")]
    CyclicOrForwardReference { variable: String, parent: String },

    /// Represents a variable that was added to the network twice
    #[error("Variable {0} was encountered twice")]
    DuplicateVariable(String),

    /// A CPT whose length does not match the number of parent assignments
    #[error("CPT for {variable} has {got} rows, expected {expected}")]
    InvalidTableSize { variable: String, expected: usize, got: usize },

    /// A CPT entry outside of [0, 1]
    #[error("CPT for {variable} contains {value}, which is not a probability")]
    InvalidProbability { variable: String, value: f64 },

    /// Rejection sampling did not keep a single sample
    #[error("No samples were consistent with the evidence")]
    NoAcceptedSamples,

    /// Every likelihood weight was exactly zero
    #[error("All sample weights were zero")]
    ZeroTotalWeight,

    /// An index outside of the network
    #[error("Index {index} out of range for a network of {len} variables")]
    IndexOutOfRange { index: usize, len: usize },

    /// Exactly what it sounds like
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

}


/// Iterate over every boolean assignment to `n` variables.
///
/// Assignments are produced in row order of a CPT: the all-true assignment comes first, and the
/// last position changes fastest.
pub fn all_assignments(n: usize) -> Box<dyn Iterator<Item = Vec<bool>>> {
    if n == 0 {
        return Box::new(std::iter::once(vec![]));
    }

    Box::new(
        (0..n).map(|_| vec![true, false].into_iter()).multi_cartesian_product()
    )
}
