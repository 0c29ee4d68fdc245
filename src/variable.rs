//! Definition of the variable module
//!
//! A `Variable` represents a boolean random variable in a Bayesian network.

use crate::cpt::Cpt;

/// A boolean random variable, its parents and its CPT.
///
/// Parents are held as indices into the owning `Network`. A `Variable` never owns its parents,
/// and the parents of a variable always precede it in the network.
#[derive(Clone, Debug)]
pub struct Variable {

    /// The name of the `Variable`
    name: String,

    /// Indices of the parents in the network, in declared order
    parents: Vec<usize>,

    /// ```P(self = true | parents)```
    cpt: Cpt,

    /// The currently assigned value
    value: bool

}

impl Variable {

    pub(crate) fn new(name: String, parents: Vec<usize>, cpt: Cpt) -> Self {
        Variable { name, parents, cpt, value: false }
    }

    /// Get the name of the `Variable`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the parents of the `Variable` as indices into the network
    pub fn parents(&self) -> &[usize] {
        &self.parents
    }

    /// Check if `index` is a parent of this `Variable`
    pub fn has_parent(&self, index: usize) -> bool {
        self.parents.contains(&index)
    }

    /// Check if this `Variable` has no parents
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn cpt(&self) -> &Cpt {
        &self.cpt
    }

    /// The currently assigned value
    pub fn value(&self) -> bool {
        self.value
    }

    pub(crate) fn observe(&mut self, value: bool) {
        self.value = value;
    }
}
