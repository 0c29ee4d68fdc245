//! Defines a `ConditionalInferenceEngine` for Markov-Chain Monte-Carlo methods.
//!
//! Implementation of MCMC Inference for Conditional Queries described in Koller & Friedman
//! 12.3.5.2. Counted states are consecutive states of a single chain, so they are correlated.

use crate::config::ScanOrder;
use crate::evidence::Evidence;
use crate::model::Network;
use crate::samplers::{GibbsSampler, Sampler};
use crate::util::Result;
use super::{check_samples, ConditionalInferenceEngine};

use rand::RngCore;
use tracing::debug;


/// A `ConditionalInferenceEngine` that runs a Gibbs chain over the unobserved variables.
pub struct McmcEngine<'a> {

    /// The network holding the state of the chain
    network: &'a mut Network,

    /// The evidence on which to condition
    evidence: Evidence,

    /// Transitions to discard before counting
    burnin: usize,

    /// The number of samples to use
    samples: usize,

    scan: ScanOrder

}

impl<'a> McmcEngine<'a> {

    pub fn new(
        network: &'a mut Network,
        evidence: Evidence,
        burnin: usize,
        samples: usize,
        scan: ScanOrder
    ) -> Result<Self> {
        evidence.validate(network)?;
        check_samples(samples)?;
        Ok(McmcEngine { network, evidence, burnin, samples, scan })
    }

}

impl<'a> ConditionalInferenceEngine for McmcEngine<'a> {

    fn infer(&mut self, query: usize, rng: &mut dyn RngCore) -> Result<f64> {
        self.network.check_index(query)?;

        let mut sampler = GibbsSampler::for_network(&mut *self.network, &self.evidence, self.scan, rng)?;

        // let the sampler burnin
        for _ in 0..self.burnin {
            sampler.sample(rng);
        }

        let mut t = 0usize;
        for _ in 0..self.samples {
            sampler.sample(rng);
            if sampler.network().read(query) {
                t += 1;
            }
        }

        debug!(burnin = self.burnin, samples = self.samples, hits = t, scan = ?self.scan, "mcmc finished");

        Ok(t as f64 / self.samples as f64)
    }

}
