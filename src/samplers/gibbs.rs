//! Defines a Gibbs `Sampler`.
//!
//! Implementation of Koller & Friedman Algorithm 12.4, with each transition drawn from the
//! Markov-blanket posterior of a single unobserved variable.

use crate::config::ScanOrder;
use crate::evidence::Evidence;
use crate::model::Network;
use crate::util::Result;
use super::{prior_sample, Sampler};

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::trace;


pub struct GibbsSampler<'a> {

    /// The network holding the current state of the chain
    network: &'a mut Network,

    /// The unobserved variables, in network order
    variables: Vec<usize>,

    scan: ScanOrder,

    /// Position in `variables` of the next variable to resample for `ScanOrder::SingleSite`
    cursor: usize,

    between: Uniform<f64>

}


impl<'a> GibbsSampler<'a> {

    /// Construct a new `GibbsSampler` over `network` conditioned on `evidence`.
    ///
    /// The initial state is a forward sample with the evidence variables then clamped. The
    /// evidence variables are never resampled.
    pub fn for_network<R: Rng + ?Sized>(
        network: &'a mut Network,
        evidence: &Evidence,
        scan: ScanOrder,
        rng: &mut R
    ) -> Result<Self> {
        evidence.validate(network)?;

        prior_sample(network, rng);
        network.clamp(evidence)?;

        let variables = (0..network.len()).filter(|&i| !evidence.contains(i)).collect();

        Ok(GibbsSampler { network, variables, scan, cursor: 0, between: Uniform::new(0.0, 1.0) })
    }

    /// The unobserved variables the chain moves over
    pub fn variables(&self) -> &[usize] {
        &self.variables
    }

    /// Resample the variable at `index` from its Markov-blanket posterior
    fn resample<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) {
        let posterior = self.network.blanket_posterior(index);

        match posterior.normalized() {
            Some(p) => {
                let draw = self.between.sample(rng);
                self.network.write(index, draw < p);
            },
            // no value of the variable is possible under the rest of the state; leave it alone
            None => trace!(variable = index, "markov blanket has zero mass, keeping current value")
        }
    }
}


impl<'a> Sampler for GibbsSampler<'a> {

    fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.variables.is_empty() {
            return;
        }

        match self.scan {
            ScanOrder::Systematic => {
                for k in 0..self.variables.len() {
                    let v = self.variables[k];
                    self.resample(v, rng);
                }
            },
            ScanOrder::SingleSite => {
                let v = self.variables[self.cursor];
                self.cursor = (self.cursor + 1) % self.variables.len();
                self.resample(v, rng);
            },
            ScanOrder::Random => {
                let v = self.variables[rng.gen_range(0..self.variables.len())];
                self.resample(v, rng);
            }
        }
    }

    fn network(&self) -> &Network {
        &*self.network
    }

}
