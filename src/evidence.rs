//! Defines `Evidence`, the set of observed variables for a conditional query.

use crate::model::Network;
use crate::util::{BoolnetError, Result};

use itertools::Itertools;

/// Observed values for a subset of the variables in a `Network`, keyed by index.
///
/// The pairs are kept sorted by index so that membership is a binary search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evidence {
    observed: Vec<(usize, bool)>
}

impl Evidence {

    /// Evidence that observes nothing
    pub fn empty() -> Self {
        Evidence { observed: vec![] }
    }

    /// Build `Evidence` from positionally matched indices and values.
    ///
    /// # Returns
    /// the `Evidence`, or `DimensionMismatch` if the slices differ in length and
    /// `InvalidArgument` if an index is observed twice
    pub fn new(indices: &[usize], values: &[bool]) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(BoolnetError::DimensionMismatch { expected: indices.len(), got: values.len() });
        }

        let observed: Vec<(usize, bool)> = indices.iter()
                                                  .cloned()
                                                  .zip(values.iter().cloned())
                                                  .sorted_by_key(|&(i, _)| i)
                                                  .collect();

        if let Some(((i, _), _)) = observed.iter().tuple_windows().find(|(a, b)| a.0 == b.0) {
            return Err(BoolnetError::InvalidArgument(format!("variable {} is observed twice", i)));
        }

        Ok(Evidence { observed })
    }

    /// The observed value of the variable at `index`, if it is observed
    pub fn get(&self, index: usize) -> Option<bool> {
        self.observed
            .binary_search_by_key(&index, |&(i, _)| i)
            .ok()
            .map(|pos| self.observed[pos].1)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Iterate over the ```(index, value)``` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = &(usize, bool)> {
        self.observed.iter()
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Check that every observed index lies inside `network`
    pub fn validate(&self, network: &Network) -> Result<()> {
        match self.observed.last() {
            Some(&(i, _)) if i >= network.len() => {
                Err(BoolnetError::IndexOutOfRange { index: i, len: network.len() })
            },
            _ => Ok(())
        }
    }

    /// Check whether the current values of `network` agree with every observation.
    ///
    /// # Returns
    /// the answer, or `IndexOutOfRange` if an observation lies outside `network`
    pub fn is_consistent(&self, network: &Network) -> Result<bool> {
        self.validate(network)?;
        Ok(self.agrees_with(network))
    }

    /// `is_consistent` for evidence already validated against `network`
    pub(crate) fn agrees_with(&self, network: &Network) -> bool {
        self.observed.iter().all(|&(i, v)| network.read(i) == v)
    }
}
