//! Agent configuration, validation, and error types.

use quarry_belief::{BeliefConfig, BeliefConfigError};
use std::error::Error;
use std::fmt;

/// Which goal-selection strategy a [`PursuitAgent`](crate::PursuitAgent)
/// runs.
///
/// All strategies share the same sensing, frontier, and planning core;
/// only the chase-goal decision differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolicyKind {
    /// Chase the last known target cell when `P(near) > 0.5`.
    #[default]
    BeliefThreshold,
    /// Chase the observed target cell exactly while it is visible.
    VisibilityFlag,
    /// Chase a cell extrapolated from the target's recent positions.
    TrajectoryExtrapolation,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeliefThreshold => write!(f, "belief-threshold"),
            Self::VisibilityFlag => write!(f, "visibility-flag"),
            Self::TrajectoryExtrapolation => write!(f, "trajectory-extrapolation"),
        }
    }
}

/// Complete configuration for constructing a
/// [`PursuitAgent`](crate::PursuitAgent).
///
/// Validated once at agent construction; all intervals are in seconds
/// of accumulated tick time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentConfig {
    /// Cadence of sensing passes (`discover`). Default: 1.0.
    pub sense_interval: f64,
    /// Cadence of mode re-evaluation and route recomputation.
    /// Default: 2.0.
    pub plan_interval: f64,
    /// Cadence of forced ground-truth target reveals. Default: 5.0.
    pub reveal_interval: f64,
    /// Distance threshold for the binary visibility observation.
    /// Default: 10.0.
    pub view_range: f64,
    /// HMM transition and emission probabilities.
    pub belief: BeliefConfig,
    /// Goal-selection strategy.
    pub policy: PolicyKind,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            sense_interval: 1.0,
            plan_interval: 2.0,
            reveal_interval: 5.0,
            view_range: 10.0,
            belief: BeliefConfig::default(),
            policy: PolicyKind::default(),
        }
    }
}

impl AgentConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("sense_interval", self.sense_interval),
            ("plan_interval", self.plan_interval),
            ("reveal_interval", self.reveal_interval),
        ];
        for (name, value) in intervals {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveInterval { name, value });
            }
        }
        if !self.view_range.is_finite() || self.view_range < 0.0 {
            return Err(ConfigError::InvalidViewRange {
                value: self.view_range,
            });
        }
        self.belief.validate()?;
        Ok(())
    }
}

/// Errors detected during [`AgentConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// An interval is NaN, infinite, zero, or negative.
    NonPositiveInterval {
        /// Name of the offending interval.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The view range is NaN, infinite, or negative.
    InvalidViewRange {
        /// The rejected value.
        value: f64,
    },
    /// The belief configuration failed validation.
    Belief(BeliefConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveInterval { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::InvalidViewRange { value } => {
                write!(f, "view_range must be finite and non-negative, got {value}")
            }
            Self::Belief(e) => write!(f, "belief: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Belief(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BeliefConfigError> for ConfigError {
    fn from(e: BeliefConfigError) -> Self {
        Self::Belief(e)
    }
}
