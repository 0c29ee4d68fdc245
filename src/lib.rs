//! Approximate and exact inference over Bayesian networks of boolean variables.
//!
//! A `Network` is assembled once with a `NetworkBuilder` (or from a `NetworkDescription`) and then
//! answers any number of queries. Exact probabilities are available for fully observed
//! assignments; conditional queries are estimated by rejection sampling, likelihood weighting or
//! Gibbs sampling.

pub mod config;
pub mod cpt;
pub mod evidence;
pub mod inference;
pub mod init;
pub mod model;
pub mod samplers;
pub mod util;
pub mod variable;

pub use config::{SamplingConfig, ScanOrder};
pub use cpt::{row_index, Cpt};
pub use evidence::Evidence;
pub use inference::{
    ask, likelihood_weighting, mcmc_ask, rejection_sampling, ConditionalInferenceEngine,
    ImportanceSamplingEngine, McmcEngine, Method, RejectionSamplingEngine,
};
pub use init::Initialization;
pub use model::{BlanketPosterior, Network, NetworkBuilder, NetworkDescription, VariableDescription};
pub use samplers::{prior_sample, ForwardSampler, GibbsSampler, LikelihoodWeightedSampler, Sampler, WeightedSampler};
pub use util::{all_assignments, BoolnetError, Result};
pub use variable::Variable;
