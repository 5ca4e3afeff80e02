//! Two-state hidden Markov belief filter for Quarry pursuit agents.
//!
//! The filter tracks a distribution over `{Near, Far}` hypotheses
//! about the pursued target. Each tick it marginalizes the previous
//! belief through a 2×2 transition model, then corrects against a
//! binary "target visible" observation using per-state emission
//! probabilities. Configuration is validated at construction; a
//! zero-probability observation at runtime resets the belief to
//! uniform instead of dividing by zero.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod filter;

pub use config::{BeliefConfig, BeliefConfigError};
pub use filter::BeliefFilter;
