//! Module containing initialization routines for the CPT of a variable.

use crate::cpt::{rows_for, Cpt, Table};
use crate::util::{BoolnetError, Result};

use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Defines possible ways to initialize a `Variable`s CPT.
#[derive(Clone, Debug)]
pub enum Initialization<'a> {
    /// ```P(X = true) = 0.5``` under every parent assignment
    Uniform,

    /// Randomly initialize every row of the CPT from the given seed
    Random(u64),

    /// Initialize the CPT as a Bernoulli distribution with parameter ```p```.
    /// Note that this `Initialization` is valid only for a `Variable` with no parents.
    Binomial(f64),

    /// User defined CPT, one ```P(X = true)``` entry per parent assignment
    Table(&'a [f64])
}


impl<'a> Initialization<'a> {

    /// Construct a CPT, initialized based on ```self```
    ///
    /// # Args
    /// * `name`: the name of the variable that owns the CPT
    /// * `arity`: the number of parents of the variable
    ///
    /// # Returns
    /// a `Cpt` with ```2^arity``` rows, or an error if ```self``` cannot produce one
    pub fn build_cpt(self, name: &str, arity: usize) -> Result<Cpt> {
        let rows = rows_for(arity)?;

        let table = match self {
            Initialization::Uniform => Table::from_elem(rows, 0.5),
            Initialization::Random(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Table::random_using(rows, Uniform::new(0.0, 1.0), &mut rng)
            },
            Initialization::Binomial(p) => {
                if arity != 0 {
                    return Err(BoolnetError::InvalidArgument(
                        format!("{} has parents and cannot be initialized as a Binomial", name)
                    ));
                }
                Table::from_elem(1, p)
            },
            Initialization::Table(values) => Table::from(values.to_vec())
        };

        Cpt::new(name, arity, table)
    }
}
