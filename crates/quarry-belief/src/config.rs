//! Validated HMM configuration.

use std::error::Error;
use std::fmt;

/// Tolerance for transition-row normalization checks.
const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Transition and emission probabilities for a [`BeliefFilter`].
///
/// The transition matrix rows (`near_to_*`, `far_to_*`) must each sum
/// to 1 within a small tolerance; every entry must be a probability.
/// Emissions give `P(see | state)`; the complementary
/// `P(not see | state)` is implied. Validation runs in
/// [`validate`](BeliefConfig::validate) — construction of a filter
/// rejects misconfigured probabilities outright rather than producing
/// degenerate beliefs later.
///
/// [`BeliefFilter`]: crate::BeliefFilter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeliefConfig {
    /// P(Near at t+1 | Near at t).
    pub near_to_near: f64,
    /// P(Far at t+1 | Near at t).
    pub near_to_far: f64,
    /// P(Near at t+1 | Far at t).
    pub far_to_near: f64,
    /// P(Far at t+1 | Far at t).
    pub far_to_far: f64,
    /// P(see | Near).
    pub see_if_near: f64,
    /// P(see | Far).
    pub see_if_far: f64,
}

impl Default for BeliefConfig {
    /// A mildly sticky dynamics model with an informative sensor:
    /// the target tends to stay where it is, and sightings are four
    /// times likelier when it is near.
    fn default() -> Self {
        Self {
            near_to_near: 0.7,
            near_to_far: 0.3,
            far_to_near: 0.4,
            far_to_far: 0.6,
            see_if_near: 0.8,
            see_if_far: 0.2,
        }
    }
}

impl BeliefConfig {
    /// Check every probability range and row-sum invariant.
    pub fn validate(&self) -> Result<(), BeliefConfigError> {
        let entries = [
            ("near_to_near", self.near_to_near),
            ("near_to_far", self.near_to_far),
            ("far_to_near", self.far_to_near),
            ("far_to_far", self.far_to_far),
            ("see_if_near", self.see_if_near),
            ("see_if_far", self.see_if_far),
        ];
        for (name, value) in entries {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(BeliefConfigError::OutOfRange { name, value });
            }
        }

        let near_row = self.near_to_near + self.near_to_far;
        if (near_row - 1.0).abs() > ROW_SUM_TOLERANCE {
            return Err(BeliefConfigError::RowSum {
                state: "Near",
                sum: near_row,
            });
        }
        let far_row = self.far_to_near + self.far_to_far;
        if (far_row - 1.0).abs() > ROW_SUM_TOLERANCE {
            return Err(BeliefConfigError::RowSum {
                state: "Far",
                sum: far_row,
            });
        }
        Ok(())
    }
}

/// Errors from [`BeliefConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BeliefConfigError {
    /// A probability is NaN, infinite, or outside `[0, 1]`.
    OutOfRange {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A transition row does not sum to 1.
    RowSum {
        /// Which row (`"Near"` or `"Far"`).
        state: &'static str,
        /// The actual row sum.
        sum: f64,
    },
}

impl fmt::Display for BeliefConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { name, value } => {
                write!(f, "{name} must be a probability in [0, 1], got {value}")
            }
            Self::RowSum { state, sum } => {
                write!(f, "transition row from {state} sums to {sum}, expected 1")
            }
        }
    }
}

impl Error for BeliefConfigError {}
