//! Defines the interface to inference engines

use crate::config::{SamplingConfig, ScanOrder};
use crate::evidence::Evidence;
use crate::model::Network;
use crate::util::{BoolnetError, Result};

use rand::RngCore;
use serde::{Deserialize, Serialize};

mod importance_sampling;
mod mcmc;
mod rejection;

pub use self::importance_sampling::ImportanceSamplingEngine;
pub use self::mcmc::McmcEngine;
pub use self::rejection::RejectionSamplingEngine;


/// A `ConditionalInferenceEngine` is capable of answering Conditional Probability Queries of the form:
///     ```P(Y = true | E = e)```
///
/// `ConditionalInferenceEngine`s are stateful and must take the evidence `e` as an argument to whatever
/// construction mechanism they employ.
pub trait ConditionalInferenceEngine {

    /// Estimate ```P(query = true | evidence)```, drawing randomness from `rng`
    fn infer(&mut self, query: usize, rng: &mut dyn RngCore) -> Result<f64>;

}


/// The approximate inference algorithms available through `ask`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Rejection,
    LikelihoodWeighting,
    Mcmc
}


pub(crate) fn check_samples(samples: usize) -> Result<()> {
    if samples == 0 {
        Err(BoolnetError::InvalidArgument(String::from("at least one sample is required")))
    } else {
        Ok(())
    }
}


/// Estimate ```P(query = true | evidence)``` by rejection sampling over `samples` forward samples.
pub fn rejection_sampling(
    network: &mut Network,
    query: usize,
    evidence_indices: &[usize],
    evidence_values: &[bool],
    samples: usize,
    rng: &mut dyn RngCore
) -> Result<f64> {
    let evidence = Evidence::new(evidence_indices, evidence_values)?;
    RejectionSamplingEngine::new(network, evidence, samples)?.infer(query, rng)
}


/// Estimate ```P(query = true | evidence)``` by likelihood weighting over `samples` particles.
pub fn likelihood_weighting(
    network: &mut Network,
    query: usize,
    evidence_indices: &[usize],
    evidence_values: &[bool],
    samples: usize,
    rng: &mut dyn RngCore
) -> Result<f64> {
    let evidence = Evidence::new(evidence_indices, evidence_values)?;
    ImportanceSamplingEngine::new(network, evidence, samples)?.infer(query, rng)
}


/// Estimate ```P(query = true | evidence)``` from `samples` systematic Gibbs sweeps, without
/// burn-in.
pub fn mcmc_ask(
    network: &mut Network,
    query: usize,
    evidence_indices: &[usize],
    evidence_values: &[bool],
    samples: usize,
    rng: &mut dyn RngCore
) -> Result<f64> {
    let evidence = Evidence::new(evidence_indices, evidence_values)?;
    McmcEngine::new(network, evidence, 0, samples, ScanOrder::Systematic)?.infer(query, rng)
}


/// Answer a conditional query with the given `method`, taking sample counts, burn-in, scan order
/// and seed from `config`.
pub fn ask(
    network: &mut Network,
    method: Method,
    query: usize,
    evidence: Evidence,
    config: &SamplingConfig
) -> Result<f64> {
    config.validate()?;
    let mut rng = config.rng();

    match method {
        Method::Rejection => {
            RejectionSamplingEngine::new(network, evidence, config.samples)?.infer(query, &mut rng)
        },
        Method::LikelihoodWeighting => {
            ImportanceSamplingEngine::new(network, evidence, config.samples)?.infer(query, &mut rng)
        },
        Method::Mcmc => {
            McmcEngine::new(network, evidence, config.burn_in, config.samples, config.scan)?
                .infer(query, &mut rng)
        }
    }
}


#[cfg(test)]
/// Tests for the inference engines in this module. Tests are hoisted here to avoid duplication.
/// Any tests specific to the inference engine are held within that submodule's tests module.
///
/// Expected values are computed exactly by summing the joint over every full assignment that
/// agrees with the evidence.
mod tests {
    use super::*;
    use crate::model::directed::tests::{chain, poker};
    use crate::util::all_assignments;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const N: usize = 100_000;

    /// ```P(query = true | evidence)``` by enumeration
    fn exact(network: &mut Network, query: usize, evidence: &Evidence) -> f64 {
        let (mut t, mut f) = (0.0, 0.0);
        for a in all_assignments(network.len()) {
            if evidence.iter().all(|&(i, v)| a[i] == v) {
                let p = network.joint_probability(&a).unwrap();
                if a[query] { t += p } else { f += p }
            }
        }
        t / (t + f)
    }

    /// Utility method to test the actual inference task
    fn test_inference(engine: &mut dyn ConditionalInferenceEngine, query: usize, expected: f64, precision: f64) {
        let mut rng = StdRng::seed_from_u64(2024);
        let p = engine.infer(query, &mut rng).unwrap();
        println!("actual = {}, expected = {}", p, expected);
        assert!((p - expected).abs() < precision);
    }

    #[test]
    fn chain_rejection() {
        let mut model = chain();
        let mut rng = StdRng::seed_from_u64(1);
        let p = rejection_sampling(&mut model, 1, &[0], &[true], N, &mut rng).unwrap();
        assert!((p - 0.8).abs() < 0.02);
    }

    #[test]
    fn chain_likelihood_weighting() {
        let mut model = chain();
        let mut rng = StdRng::seed_from_u64(1);
        let p = likelihood_weighting(&mut model, 1, &[0], &[true], N, &mut rng).unwrap();
        assert!((p - 0.8).abs() < 0.02);
    }

    #[test]
    fn chain_mcmc() {
        let mut model = chain();
        let mut rng = StdRng::seed_from_u64(1);
        let p = mcmc_ask(&mut model, 1, &[0], &[true], N, &mut rng).unwrap();
        assert!((p - 0.8).abs() < 0.02);
    }

    /// The three queries run against the poker-game network
    fn poker_queries() -> Vec<(usize, Evidence)> {
        vec![
            // B.GoodHand given B.Bets and not A.Wins
            (4, Evidence::new(&[5, 6], &[true, false]).unwrap()),
            // B.Bluff given B.Cocky
            (1, Evidence::new(&[0], &[true]).unwrap()),
            // B.GoodHand given B.Bluff and A.Deals
            (4, Evidence::new(&[1, 2], &[true, true]).unwrap()),
        ]
    }

    #[test]
    fn poker_rejection() {
        let mut model = poker();
        for (query, evidence) in poker_queries() {
            let expected = exact(&mut model, query, &evidence);
            let mut engine = RejectionSamplingEngine::new(&mut model, evidence, N).unwrap();
            test_inference(&mut engine, query, expected, 0.02);
        }
    }

    #[test]
    fn poker_importance_sampling() {
        let mut model = poker();
        for (query, evidence) in poker_queries() {
            let expected = exact(&mut model, query, &evidence);
            let mut engine = ImportanceSamplingEngine::new(&mut model, evidence, N).unwrap();
            test_inference(&mut engine, query, expected, 0.02);
        }
    }

    #[test]
    fn poker_mcmc() {
        let mut model = poker();
        for (query, evidence) in poker_queries() {
            let expected = exact(&mut model, query, &evidence);
            let mut engine = McmcEngine::new(&mut model, evidence, 1000, N, ScanOrder::Systematic).unwrap();
            test_inference(&mut engine, query, expected, 0.02);
        }
    }

    #[test]
    fn methods_agree() {
        let mut model = poker();
        let evidence = Evidence::new(&[5, 6], &[true, false]).unwrap();
        let config = SamplingConfig { samples: N, burn_in: 1000, seed: Some(77), ..SamplingConfig::default() };

        let estimates: Vec<f64> = [Method::Rejection, Method::LikelihoodWeighting, Method::Mcmc]
            .iter()
            .map(|&m| ask(&mut model, m, 4, evidence.clone(), &config).unwrap())
            .collect();

        for a in &estimates {
            for b in &estimates {
                assert!((a - b).abs() < 0.03);
            }
        }
    }

    #[test]
    fn malformed_evidence() {
        let mut model = chain();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            rejection_sampling(&mut model, 1, &[0, 1], &[true], 10, &mut rng).unwrap_err(),
            BoolnetError::DimensionMismatch { expected: 2, got: 1 }
        );
        assert_eq!(
            likelihood_weighting(&mut model, 1, &[3], &[true], 10, &mut rng).unwrap_err(),
            BoolnetError::IndexOutOfRange { index: 3, len: 2 }
        );
        assert!(mcmc_ask(&mut model, 1, &[0], &[true], 0, &mut rng).is_err());
    }

    #[test]
    fn ask_rejects_empty_config() {
        let mut model = chain();
        let config = SamplingConfig { samples: 0, ..SamplingConfig::default() };
        assert!(ask(&mut model, Method::Mcmc, 1, Evidence::empty(), &config).is_err());
    }
}
