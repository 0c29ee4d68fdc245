//! Tunables shared by the sampling-based inference engines.

use crate::util::{BoolnetError, Result};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};


/// The order in which a `GibbsSampler` visits the unobserved variables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    /// Resample every unobserved variable, in network order, per sample
    #[default]
    Systematic,

    /// Resample one unobserved variable per sample, cycling in network order
    SingleSite,

    /// Resample one unobserved variable, chosen uniformly at random, per sample
    Random
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {

    /// The number of samples each query draws
    pub samples: usize,

    /// Markov-chain transitions discarded before counting begins
    pub burn_in: usize,

    pub scan: ScanOrder,

    /// Seed for the random source. An entropy-seeded source is used when absent
    pub seed: Option<u64>

}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            samples: 10_000,
            burn_in: 0,
            scan: ScanOrder::default(),
            seed: None
        }
    }
}

impl SamplingConfig {

    /// Check that the configuration describes a run that does some work
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(BoolnetError::InvalidArgument(String::from("at least one sample is required")));
        }
        Ok(())
    }

    /// A random source for a query under this configuration
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        }
    }
}
