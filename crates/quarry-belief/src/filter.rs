//! The forward HMM filter.

use crate::config::{BeliefConfig, BeliefConfigError};
use quarry_core::BehaviorMode;

/// Tolerance below which the post-correction observation mass is
/// treated as zero.
const ZERO_MASS: f64 = 1e-12;

/// A two-state forward hidden Markov filter over `{Near, Far}`.
///
/// Belief starts uniform at `(0.5, 0.5)` and is mutated only by
/// [`update`](BeliefFilter::update): predict through the transition
/// matrix, correct against the binary visibility evidence, normalize.
/// The invariant `b_near + b_far == 1` holds within floating tolerance
/// after every update.
///
/// The discrete decision rule is literal: [`mode`](BeliefFilter::mode)
/// reports `Chasing` iff `b_near > 0.5`, with no hysteresis band, so
/// beliefs oscillating around the boundary flip the mode on every
/// evaluation.
#[derive(Clone, Debug)]
pub struct BeliefFilter {
    config: BeliefConfig,
    b_near: f64,
    b_far: f64,
}

impl BeliefFilter {
    /// Construct a filter from a validated configuration.
    ///
    /// Misconfigured probabilities are rejected here, before any
    /// gameplay state exists.
    pub fn new(config: BeliefConfig) -> Result<Self, BeliefConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            b_near: 0.5,
            b_far: 0.5,
        })
    }

    /// Current P(target near).
    pub fn b_near(&self) -> f64 {
        self.b_near
    }

    /// Current P(target far).
    pub fn b_far(&self) -> f64 {
        self.b_far
    }

    /// The configuration this filter was built with.
    pub fn config(&self) -> &BeliefConfig {
        &self.config
    }

    /// Reset the belief to uniform.
    pub fn reset(&mut self) {
        self.b_near = 0.5;
        self.b_far = 0.5;
    }

    /// One filter step against the evidence `saw` (target visible).
    ///
    /// Predict: marginalize the previous belief through the transition
    /// model. Correct: weight each hypothesis by the probability of
    /// the evidence under it, then normalize. When the total mass is
    /// zero — the evidence has zero probability under both states, a
    /// configuration pathology — the belief resets to uniform rather
    /// than dividing by zero.
    pub fn update(&mut self, saw: bool) {
        let c = &self.config;
        let predicted_near = self.b_near * c.near_to_near + self.b_far * c.far_to_near;
        let predicted_far = self.b_near * c.near_to_far + self.b_far * c.far_to_far;

        let (emit_near, emit_far) = if saw {
            (c.see_if_near, c.see_if_far)
        } else {
            (1.0 - c.see_if_near, 1.0 - c.see_if_far)
        };
        let weighted_near = predicted_near * emit_near;
        let weighted_far = predicted_far * emit_far;

        let mass = weighted_near + weighted_far;
        if mass <= ZERO_MASS {
            self.reset();
            return;
        }
        self.b_near = weighted_near / mass;
        self.b_far = weighted_far / mass;
    }

    /// The behavior mode implied by the current belief:
    /// `Chasing` iff `b_near > 0.5`.
    pub fn mode(&self) -> BehaviorMode {
        if self.b_near > 0.5 {
            BehaviorMode::Chasing
        } else {
            BehaviorMode::Searching
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filter() -> BeliefFilter {
        BeliefFilter::new(BeliefConfig::default()).unwrap()
    }

    #[test]
    fn starts_uniform_and_searching() {
        let f = filter();
        assert_eq!(f.b_near(), 0.5);
        assert_eq!(f.b_far(), 0.5);
        assert_eq!(f.mode(), BehaviorMode::Searching);
    }

    #[test]
    fn rejects_invalid_config() {
        let bad = BeliefConfig {
            near_to_near: 0.9,
            near_to_far: 0.9,
            ..BeliefConfig::default()
        };
        assert!(BeliefFilter::new(bad).is_err());
    }

    #[test]
    fn sustained_sightings_converge_to_chasing() {
        // With the default matrix (0.7/0.3, 0.4/0.6) and emissions
        // (0.8, 0.2), repeated "see" evidence must push b_near
        // strictly upward each tick and over the 0.5 threshold almost
        // immediately.
        let mut f = filter();
        let mut prev = f.b_near();
        for tick in 0..8 {
            f.update(true);
            assert!(
                f.b_near() > prev,
                "tick {tick}: b_near {} did not increase past {prev}",
                f.b_near()
            );
            prev = f.b_near();
        }
        assert_eq!(f.mode(), BehaviorMode::Chasing);
        assert!(f.b_near() > 0.5);
    }

    #[test]
    fn sustained_misses_drive_belief_down() {
        let mut f = filter();
        for _ in 0..8 {
            f.update(false);
        }
        assert!(f.b_near() < 0.5);
        assert_eq!(f.mode(), BehaviorMode::Searching);
    }

    #[test]
    fn zero_observation_mass_resets_to_uniform() {
        // Seeing is impossible under both hypotheses; the evidence
        // "see" then carries zero mass and the belief must reset.
        let cfg = BeliefConfig {
            see_if_near: 0.0,
            see_if_far: 0.0,
            ..BeliefConfig::default()
        };
        let mut f = BeliefFilter::new(cfg).unwrap();
        f.update(false); // a miss is certain; belief shifts by dynamics only
        f.update(true);
        assert_eq!(f.b_near(), 0.5);
        assert_eq!(f.b_far(), 0.5);
    }

    #[test]
    fn reset_restores_uniform() {
        let mut f = filter();
        for _ in 0..5 {
            f.update(true);
        }
        f.reset();
        assert_eq!(f.b_near(), 0.5);
        assert_eq!(f.b_far(), 0.5);
    }

    #[test]
    fn threshold_is_strict() {
        // Exactly 0.5 is Searching: the rule is b_near > 0.5.
        let f = filter();
        assert_eq!(f.b_near(), 0.5);
        assert_eq!(f.mode(), BehaviorMode::Searching);
    }

    proptest! {
        #[test]
        fn belief_stays_normalized(
            nn in 0.0f64..=1.0,
            fn_ in 0.0f64..=1.0,
            see_near in 0.0f64..=1.0,
            see_far in 0.0f64..=1.0,
            evidence in proptest::collection::vec(any::<bool>(), 1..64),
        ) {
            let cfg = BeliefConfig {
                near_to_near: nn,
                near_to_far: 1.0 - nn,
                far_to_near: fn_,
                far_to_far: 1.0 - fn_,
                see_if_near: see_near,
                see_if_far: see_far,
            };
            prop_assume!(cfg.validate().is_ok());
            let mut f = BeliefFilter::new(cfg).unwrap();
            for saw in evidence {
                f.update(saw);
                let sum = f.b_near() + f.b_far();
                prop_assert!((sum - 1.0).abs() < 1e-9, "sum drifted to {sum}");
                prop_assert!(f.b_near() >= 0.0 && f.b_far() >= 0.0);
            }
        }
    }
}
