//! Defines a `Sampler` for likelihood weighted particle generation for `Network`s.
//!
//! Koller & Friedman Algorithm 12.2 (pp 493)

use crate::evidence::Evidence;
use crate::model::Network;
use crate::util::Result;
use super::WeightedSampler;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;


/// A simple `Sampler` for Bayesian networks that uses likelihood weighted sampling to draw full
/// states from the `Network` given evidence.
pub struct LikelihoodWeightedSampler<'a> {

    /// The network from which to sample
    network: &'a mut Network,

    /// The evidence on which to condition
    evidence: &'a Evidence,

    between: Uniform<f64>

}


impl<'a> LikelihoodWeightedSampler<'a> {

    /// Construct a sampler over `network`, failing if `evidence` refers to a variable outside it
    pub fn new(network: &'a mut Network, evidence: &'a Evidence) -> Result<Self> {
        evidence.validate(network)?;
        Ok(LikelihoodWeightedSampler { network, evidence, between: Uniform::new(0.0, 1.0) })
    }

}


impl<'a> WeightedSampler for LikelihoodWeightedSampler<'a> {

    fn weighted_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let mut w = 1.0;

        for i in 0..self.network.len() {
            if let Some(val) = self.evidence.get(i) {
                self.network.write(i, val);
                // update the weight by P(var | Pa(var))
                w *= self.network.assigned(i);
            } else {
                // parents precede i, so they are already set for this particle
                let p = self.network.conditional(i);
                self.network.write(i, self.between.sample(rng) < p);
            }
        }

        w
    }

    fn network(&self) -> &Network {
        &*self.network
    }

}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::model::directed::tests::{chain, poker};
    use crate::util::{all_assignments, BoolnetError};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample() {
        let mut model = poker();
        let evidence = Evidence::new(&[5, 6], &[true, false]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let mut sampler = LikelihoodWeightedSampler::new(&mut model, &evidence).unwrap();
        for _ in 0..100 {
            let weight = sampler.weighted_sample(&mut rng);
            let particle = sampler.network().values();

            assert!(particle[5]);
            assert!(!particle[6]);
            assert!(weight >= 0.0);
            assert!(weight <= 1.0);
        }
    }

    #[test]
    fn weight_of_a_particle() {
        // with A observed true, the weight is always P(A = true)
        let mut model = chain();
        let evidence = Evidence::new(&[0], &[true]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let mut sampler = LikelihoodWeightedSampler::new(&mut model, &evidence).unwrap();
        for _ in 0..20 {
            assert_eq!(0.5, sampler.weighted_sample(&mut rng));
        }

        // with B observed false, the weight depends on the sampled A
        let evidence = Evidence::new(&[1], &[false]).unwrap();
        let mut sampler = LikelihoodWeightedSampler::new(&mut model, &evidence).unwrap();
        for _ in 0..20 {
            let w = sampler.weighted_sample(&mut rng);
            let expected = if sampler.network().read(0) { 0.2 } else { 0.7 };
            assert!((w - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn full_evidence_weight_is_the_joint() {
        let mut model = poker();
        let mut rng = StdRng::seed_from_u64(3);
        let indices: Vec<usize> = (0..model.len()).collect();

        for a in all_assignments(model.len()).step_by(9) {
            let exact = model.joint_probability(&a).unwrap();
            let evidence = Evidence::new(&indices, &a).unwrap();
            let mut sampler = LikelihoodWeightedSampler::new(&mut model, &evidence).unwrap();
            assert!((sampler.weighted_sample(&mut rng) - exact).abs() < 1e-12);
        }
    }

    #[test]
    fn mean_weight_is_the_evidence_probability() {
        let mut model = poker();
        let mut rng = StdRng::seed_from_u64(5);

        // P(B.Bets = true, A.Wins = false) by summing the joint
        let p_evidence: f64 = all_assignments(model.len())
                                .filter(|a| a[5] && !a[6])
                                .map(|a| model.joint_probability(&a).unwrap())
                                .sum();

        let evidence = Evidence::new(&[5, 6], &[true, false]).unwrap();
        let mut sampler = LikelihoodWeightedSampler::new(&mut model, &evidence).unwrap();
        let n = 100_000;
        let total: f64 = (0..n).map(|_| sampler.weighted_sample(&mut rng)).sum();

        assert!((total / n as f64 - p_evidence).abs() < 0.01);
    }

    #[test]
    fn evidence_out_of_range() {
        let mut model = chain();
        let evidence = Evidence::new(&[2], &[true]).unwrap();
        match LikelihoodWeightedSampler::new(&mut model, &evidence) {
            Err(e) => assert_eq!(e, BoolnetError::IndexOutOfRange { index: 2, len: 2 }),
            Ok(_) => panic!("expected an error")
        }
    }
}
