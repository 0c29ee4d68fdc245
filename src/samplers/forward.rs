//! Defines a simple forward sampler for `Network`s
//!
//! Implementation of Koller & Friedman Algorithm 12.1 (pp 489)

use crate::model::Network;
use super::Sampler;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;


/// Draw a full state from the joint distribution of `network`.
///
/// Variables are visited in topological order, so every parent has already been drawn when its
/// children read it.
pub fn prior_sample<R: Rng + ?Sized>(network: &mut Network, rng: &mut R) {
    let between = Uniform::new(0.0, 1.0);

    for i in 0..network.len() {
        let p = network.conditional(i);
        network.write(i, between.sample(rng) < p);
    }
}


/// A simple, stateless `Sampler` for Bayesian networks
pub struct ForwardSampler<'a> {

    /// The `Network` to sample
    network: &'a mut Network

}


impl<'a> ForwardSampler<'a> {

    pub fn new(network: &'a mut Network) -> Self {
        ForwardSampler { network }
    }

}

impl<'a> Sampler for ForwardSampler<'a> {

    fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        prior_sample(self.network, rng);
    }

    fn network(&self) -> &Network {
        &*self.network
    }

}
