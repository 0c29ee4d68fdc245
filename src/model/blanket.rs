//! Markov blankets of the variables in a `Network`.

use super::Network;
use crate::util::Result;

use itertools::Itertools;


/// The unnormalized posterior of a single variable given its Markov blanket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlanketPosterior {

    /// ```P(X = true | Pa(X)) * prod_c P(c | Pa(c))``` with ```X = true```
    pub p_true: f64,

    /// The same product with ```X = false```
    pub p_false: f64

}

impl BlanketPosterior {

    /// ```P(X = true | blanket)```, or `None` if both terms are zero
    pub fn normalized(&self) -> Option<f64> {
        let total = self.p_true + self.p_false;
        if total > 0.0 {
            Some(self.p_true / total)
        } else {
            None
        }
    }
}


impl Network {

    /// The indices of the Markov blanket of the `Variable` at `index`: its parents, its children
    /// and the other parents of its children. Sorted, without duplicates, excluding `index`.
    pub fn markov_blanket(&self, index: usize) -> Result<Vec<usize>> {
        let children = self.children(index)?;

        let co_parents = children.iter()
                                 .filter_map(|&c| self.variable(c))
                                 .flat_map(|v| v.parents().iter().cloned());

        Ok(self.variable(index)
               .map(|v| v.parents().to_vec())
               .unwrap_or_default()
               .into_iter()
               .chain(children.iter().cloned())
               .chain(co_parents)
               .filter(|&i| i != index)
               .sorted()
               .dedup()
               .collect())
    }

    /// Compute the unnormalized posterior of the `Variable` at `index` given the current values
    /// of its Markov blanket.
    ///
    /// The variable is held first at `true` then at `false` while its own CPT entry and the CPT
    /// entries of each child (at the children's current values) are multiplied together. The
    /// value of the variable is restored before returning.
    pub fn markov_blanket_posterior(&mut self, index: usize) -> Result<BlanketPosterior> {
        self.check_index(index)?;
        Ok(self.blanket_posterior(index))
    }

    pub(crate) fn blanket_posterior(&mut self, index: usize) -> BlanketPosterior {
        let original = self.read(index);
        let children = self.child_indices(index);

        let mut hypothesis = |value: bool| {
            self.write(index, value);
            let own = self.assigned(index);
            children.iter().fold(own, |acc, &c| acc * self.assigned(c))
        };

        let p_true = hypothesis(true);
        let p_false = hypothesis(false);

        self.write(index, original);

        BlanketPosterior { p_true, p_false }
    }
}
