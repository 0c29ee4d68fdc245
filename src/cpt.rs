//! Conditional probability tables for boolean variables.
//!
//! A `Cpt` for a variable with parents ```p_0 ... p_{n-1}``` holds ```2^n``` rows. Each row stores
//! ```P(X = true | parent assignment)```. Rows are ordered so that the all-true parent assignment
//! is row 0 and a false parent at position ```i``` contributes ```2^(n-1-i)``` to the row index.
//! A root variable has exactly one row, its marginal probability of being true.

use crate::util::{BoolnetError, Result};

use ndarray::prelude as nd;

/// Alias f64 ndarray::Array1 as Table
pub type Table = nd::Array1<f64>;


/// Map an assignment of parent values (in declared parent order) to a row of a `Cpt`.
///
/// # Returns
/// the row, or `InvalidArgument` if there are more parent values than a `Cpt` can have rows for
/// (at most ```usize::BITS - 1```)
pub fn row_index<I: IntoIterator<Item = bool>>(parent_values: I) -> Result<usize> {
    let values: Vec<bool> = parent_values.into_iter().collect();
    rows_for(values.len())?;
    Ok(encode_row(values))
}


/// The row convention itself. Every probability lookup in the crate goes through here; callers
/// guarantee the arity fits, as `Cpt::new` does.
pub(crate) fn encode_row<I: IntoIterator<Item = bool>>(parent_values: I) -> usize {
    parent_values
        .into_iter()
        .fold(0, |idx, value| (idx << 1) | (!value as usize))
}


#[derive(Clone, Debug, PartialEq)]
pub struct Cpt {

    /// The number of parents
    arity: usize,

    /// ```P(X = true | row)``` for each parent assignment
    table: Table

}


impl Cpt {

    /// Construct a new `Cpt` for the variable `name` with `arity` parents.
    ///
    /// # Returns
    /// the table, or an error if the number of rows is not ```2^arity``` or if any entry is not a
    /// probability
    pub fn new(name: &str, arity: usize, table: Table) -> Result<Self> {
        let expected = rows_for(arity)?;

        if table.len() != expected {
            return Err(BoolnetError::InvalidTableSize {
                variable: String::from(name),
                expected,
                got: table.len()
            });
        }

        if let Some(&bad) = table.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(BoolnetError::InvalidProbability { variable: String::from(name), value: bad });
        }

        Ok(Cpt { arity, table })
    }

    /// The number of parents this table conditions on
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The number of rows in the table
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// ```P(X = true | row)```, or `IndexOutOfRange` if there is no such row
    pub fn p_true(&self, row: usize) -> Result<f64> {
        self.check_row(row)?;
        Ok(self.entry(row))
    }

    /// ```P(X = value | row)```, or `IndexOutOfRange` if there is no such row
    pub fn probability(&self, row: usize, value: bool) -> Result<f64> {
        self.check_row(row)?;
        Ok(self.entry_for(row, value))
    }

    /// The underlying table
    pub fn table(&self) -> &Table {
        &self.table
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row < self.len() {
            Ok(())
        } else {
            Err(BoolnetError::IndexOutOfRange { index: row, len: self.len() })
        }
    }

    pub(crate) fn entry(&self, row: usize) -> f64 {
        self.table[row]
    }

    pub(crate) fn entry_for(&self, row: usize, value: bool) -> f64 {
        let p = self.entry(row);
        if value { p } else { 1.0 - p }
    }
}


/// The number of rows for a table with `arity` parents
pub(crate) fn rows_for(arity: usize) -> Result<usize> {
    if arity >= usize::BITS as usize {
        return Err(BoolnetError::InvalidArgument(format!("{} parents is too many for a CPT", arity)));
    }

    Ok(1 << arity)
}
