//! Defines the `Sampler` traits - objects that randomly sample states of a `Network`.
//!
//! Samplers write each state they draw directly into the `Network` they borrow. Every sampler
//! takes its random source as an argument so that runs are reproducible under a fixed seed.

use rand::Rng;

pub mod forward;
pub mod gibbs;
pub mod likelihood;

pub use self::forward::{prior_sample, ForwardSampler};
pub use self::gibbs::GibbsSampler;
pub use self::likelihood::LikelihoodWeightedSampler;

use crate::model::Network;

pub trait Sampler {

    /// Draw the next state into the associated `Network`.
    fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// The `Network` holding the most recent state
    fn network(&self) -> &Network;

}


pub trait WeightedSampler {

    /// Draw the next state into the associated `Network` and return its weight.
    fn weighted_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64;

    /// The `Network` holding the most recent state
    fn network(&self) -> &Network;

}
