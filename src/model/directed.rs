//! Defines a `Network`, a Bayesian network over boolean variables, and the builder used to
//! assemble one.

use crate::cpt::encode_row;
use crate::evidence::Evidence;
use crate::init::Initialization;
use crate::util::{BoolnetError, Result};
use crate::variable::Variable;

use indexmap::IndexMap;


/// Represents a Bayesian Network - a Directed Probabilistic Graphical Model.
///
/// # Representation
/// A traditional graph data structure is not used; the parent list of each `Variable` implicitly
/// defines the edges of the graph. The `Variable`s are held in their topological order, keyed by
/// name, so every parent precedes its children and a `Variable` can be addressed either by name
/// or by position.
///
/// The `Network` owns the current value of every `Variable`. Samplers and inference engines
/// mutate those values in place, so a single `Network` must only serve one query at a time.
#[derive(Clone, Debug)]
pub struct Network {

    /// The `Variable`s, in topological order
    graph: IndexMap<String, Variable>

}

impl Network {

    /// Get the number of `Variable`s in the `Network`
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Lookup the index of a `Variable` based on the name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.graph.get_index_of(name)
    }

    /// Get the `Variable` at `index`
    pub fn variable(&self, index: usize) -> Option<&Variable> {
        self.graph.get_index(index).map(|(_, v)| v)
    }

    /// Iterate the `Variable`s in topological order
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.graph.values()
    }

    /// The names of the `Variable`s in topological order
    pub fn names(&self) -> Vec<&str> {
        self.graph.keys().map(|k| k.as_str()).collect()
    }

    /// The current value of every `Variable`, in topological order
    pub fn values(&self) -> Vec<bool> {
        self.graph.values().map(|v| v.value()).collect()
    }

    /// The current value of the `Variable` at `index`
    pub fn value(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.read(index))
    }

    /// Set the value of the `Variable` at `index`
    pub fn set_value(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        self.write(index, value);
        Ok(())
    }

    /// Assign every `Variable` in topological order.
    pub fn assign(&mut self, values: &[bool]) -> Result<()> {
        if values.len() != self.len() {
            return Err(BoolnetError::DimensionMismatch { expected: self.len(), got: values.len() });
        }

        for (var, &value) in self.graph.values_mut().zip(values.iter()) {
            var.observe(value);
        }

        Ok(())
    }

    /// Clamp the observed `Variable`s to their evidence values
    pub fn clamp(&mut self, evidence: &Evidence) -> Result<()> {
        evidence.validate(self)?;
        for &(i, value) in evidence.iter() {
            self.write(i, value);
        }
        Ok(())
    }

    /// Return an `IndexOutOfRange` error if `index` is not in the `Network`
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(BoolnetError::IndexOutOfRange { index, len: self.len() })
        }
    }

    /// The CPT row selected by the current values of the parents of the `Variable` at `index`
    pub fn row_index(&self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        Ok(self.row(index))
    }

    /// ```P(X = x | Pa(X))```, where ```x``` is the current value of the `Variable` at `index`
    /// and the parents take their current values.
    pub fn assigned_probability(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.assigned(index))
    }

    /// ```P(X = true | Pa(X))``` under the current parent values, regardless of the value of the
    /// `Variable` at `index`
    pub fn conditional_probability(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.conditional(index))
    }

    /// Determine the probability of a full assignment to the `Variable`s in the `Network`.
    ///
    /// Specifically, this computes ```P(X_1 = x_1, ..., X_k = x_k)``` by the chain rule. The
    /// assignment is written into the `Network` first.
    ///
    /// # Args
    /// * `assignment`: one value per `Variable`, in topological order
    ///
    /// # Returns
    /// the probability, or `DimensionMismatch` if the assignment is not complete
    pub fn joint_probability(&mut self, assignment: &[bool]) -> Result<f64> {
        self.assign(assignment)?;
        Ok((0..self.len()).map(|i| self.assigned(i)).product())
    }

    /// The indices of every `Variable` that lists `index` as a parent
    pub fn children(&self, index: usize) -> Result<Vec<usize>> {
        self.check_index(index)?;
        Ok(self.child_indices(index))
    }

    // The accessors below skip the range check. Samplers and engines validate every index they
    // are handed before reaching them.

    pub(crate) fn read(&self, index: usize) -> bool {
        self.graph[index].value()
    }

    pub(crate) fn row(&self, index: usize) -> usize {
        encode_row(self.graph[index].parents().iter().map(|&p| self.read(p)))
    }

    pub(crate) fn assigned(&self, index: usize) -> f64 {
        let var = &self.graph[index];
        var.cpt().entry_for(self.row(index), var.value())
    }

    pub(crate) fn conditional(&self, index: usize) -> f64 {
        self.graph[index].cpt().entry(self.row(index))
    }

    pub(crate) fn child_indices(&self, index: usize) -> Vec<usize> {
        self.graph
            .values()
            .enumerate()
            .skip(index.saturating_add(1))
            .filter(|(_, v)| v.has_parent(index))
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn write(&mut self, index: usize, value: bool) {
        self.graph[index].observe(value);
    }
}


/// An implementation of the [builder pattern] for creating a `Network`.
///
/// Networks must be assembled in topological order: a parent has to be added before any of its
/// children. This is what rules out cycles.
///
/// [builder pattern]: https://en.wikipedia.org/wiki/Builder_pattern
#[derive(Debug, Default)]
pub struct NetworkBuilder {

    /// The `Variable`s added so far
    graph: IndexMap<String, Variable>,

    /// The error state of the builder
    err: Option<BoolnetError>

}


impl NetworkBuilder {

    /// Construct a new `NetworkBuilder` representing an empty `Network`
    pub fn new() -> Self {
        NetworkBuilder {
            graph: IndexMap::new(),
            err: None
        }
    }


    /// Add a named `Variable` to the `Network`.
    ///
    /// # Args
    /// * `name`: the name for the variable.
    /// * `parents`: the names of the parent variables, in the order the CPT rows are laid out.
    ///   The parents must already be in the network.
    /// * `init`: the initialization mechanism for the CPT of the variable.
    pub fn with_variable(mut self, name: &str, parents: &[&str], init: Initialization) -> Self {
        if self.err.is_none() {
            if let Err(e) = self.add_variable(name, parents, init) {
                self.err = Some(e);
            }
        }

        self
    }


    /// Complete building the network.
    ///
    /// # Returns
    /// the `Network`, or the first error generated during the building process
    pub fn build(self) -> Result<Network> {
        match self.err {
            Some(e) => Err(e),
            None => Ok(Network { graph: self.graph })
        }
    }

    /// Internal function that actually does the variable addition
    fn add_variable(&mut self, name: &str, parents: &[&str], init: Initialization) -> Result<()> {
        if self.graph.contains_key(name) {
            return Err(BoolnetError::DuplicateVariable(String::from(name)));
        }

        let mut indices = Vec::with_capacity(parents.len());
        for &p in parents {
            match self.graph.get_index_of(p) {
                Some(i) if !indices.contains(&i) => indices.push(i),
                Some(_) => {
                    return Err(BoolnetError::InvalidArgument(
                        format!("{} lists parent {} more than once", name, p)
                    ));
                },
                None => {
                    return Err(BoolnetError::CyclicOrForwardReference {
                        variable: String::from(name),
                        parent: String::from(p)
                    });
                }
            }
        }

        let cpt = init.build_cpt(name, indices.len())?;
        self.graph.insert(String::from(name), Variable::new(String::from(name), indices, cpt));

        Ok(())
    }
}
