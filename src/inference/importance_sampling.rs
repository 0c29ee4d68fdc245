//! Defines an importance-sampling `ConditionalInferenceEngine` for approximate inference using
//! particle-based approximations.
//!
//! Implementation of Importance Sampling via Normalized Likelihood Weighting, described in Koller &
//! Friedman 12.2.3.3

use crate::evidence::Evidence;
use crate::model::Network;
use crate::samplers::{LikelihoodWeightedSampler, WeightedSampler};
use crate::util::{BoolnetError, Result};
use super::{check_samples, ConditionalInferenceEngine};

use rand::RngCore;
use tracing::debug;


/// A `ConditionalInferenceEngine` for Bayesian networks using Importance Sampling
pub struct ImportanceSamplingEngine<'a> {

    /// The network over which to perform inference
    network: &'a mut Network,

    /// The evidence on which to condition
    evidence: Evidence,

    /// The number of samples to use
    samples: usize

}

impl<'a> ImportanceSamplingEngine<'a> {

    pub fn new(network: &'a mut Network, evidence: Evidence, samples: usize) -> Result<Self> {
        evidence.validate(network)?;
        check_samples(samples)?;
        Ok(ImportanceSamplingEngine { network, evidence, samples })
    }

}

impl<'a> ConditionalInferenceEngine for ImportanceSamplingEngine<'a> {

    fn infer(&mut self, query: usize, rng: &mut dyn RngCore) -> Result<f64> {
        self.network.check_index(query)?;

        let mut sampler = LikelihoodWeightedSampler::new(&mut *self.network, &self.evidence)?;
        let (mut t, mut f) = (0.0, 0.0);

        // sample away...
        for _ in 0..self.samples {
            let w = sampler.weighted_sample(rng);
            if sampler.network().read(query) { t += w } else { f += w }
        }

        debug!(samples = self.samples, total_weight = t + f, "likelihood weighting finished");

        if t + f == 0.0 {
            return Err(BoolnetError::ZeroTotalWeight);
        }

        Ok(t / (t + f))
    }

}
