//! Per-tick pursuit agent orchestration for Quarry.
//!
//! A [`PursuitAgent`] owns one agent's entire mutable state — knowledge
//! map, dead-end memory, belief filter, current route — and advances it
//! from a single synchronous [`tick`](PursuitAgent::tick) call driven
//! by the host loop. Sensing, planning, and ground-truth target reveals
//! each run on their own configured cadence within that call.
//!
//! Collaborators are handed in at construction: the shared immutable
//! [`WorldGeometry`](quarry_maze::WorldGeometry) and, each tick, the
//! externally computed target observation. Nothing is looked up
//! dynamically.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod agent;
mod config;
mod policy;

pub use agent::{PursuitAgent, TargetObservation};
pub use config::{AgentConfig, ConfigError, PolicyKind};
pub use policy::{
    policy_for, BeliefThresholdPolicy, GoalDecision, GoalPolicy, PolicyInput,
    TrajectoryExtrapolationPolicy, VisibilityFlagPolicy,
};
