//! Core types for the Quarry pursuit engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the integer grid coordinate used as the key type throughout the
//! workspace, the agent's per-cell knowledge state, and the discrete
//! behavior mode driven by the belief filter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cell;
mod state;

pub use cell::Cell;
pub use state::{BehaviorMode, CellState};
