//! Defines a `ConditionalInferenceEngine` that estimates posteriors by rejection sampling.
//!
//! Forward samples that disagree with the evidence are discarded; the posterior is the fraction
//! of the remaining samples in which the query variable is true.

use crate::evidence::Evidence;
use crate::model::Network;
use crate::samplers::{ForwardSampler, Sampler};
use crate::util::{BoolnetError, Result};
use super::{check_samples, ConditionalInferenceEngine};

use rand::RngCore;
use tracing::debug;


pub struct RejectionSamplingEngine<'a> {

    /// The network to sample
    network: &'a mut Network,

    /// The evidence on which to condition
    evidence: Evidence,

    /// The number of samples to draw, accepted or not
    samples: usize

}

impl<'a> RejectionSamplingEngine<'a> {

    pub fn new(network: &'a mut Network, evidence: Evidence, samples: usize) -> Result<Self> {
        evidence.validate(network)?;
        check_samples(samples)?;
        Ok(RejectionSamplingEngine { network, evidence, samples })
    }

}

impl<'a> ConditionalInferenceEngine for RejectionSamplingEngine<'a> {

    fn infer(&mut self, query: usize, rng: &mut dyn RngCore) -> Result<f64> {
        self.network.check_index(query)?;

        let mut sampler = ForwardSampler::new(&mut *self.network);
        let (mut t, mut f) = (0usize, 0usize);

        for _ in 0..self.samples {
            sampler.sample(rng);

            let network = sampler.network();
            if self.evidence.agrees_with(network) {
                if network.read(query) { t += 1 } else { f += 1 }
            }
        }

        debug!(samples = self.samples, accepted = t + f, "rejection sampling finished");

        if t + f == 0 {
            return Err(BoolnetError::NoAcceptedSamples);
        }

        Ok(t as f64 / (t + f) as f64)
    }

}
