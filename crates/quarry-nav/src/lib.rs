//! Graph search under partial information for Quarry.
//!
//! An agent never sees the whole maze at once: [`CellKnowledge`] grows
//! one sensing step at a time, [`DeadEndSet`] remembers cells proven
//! unproductive, [`find_frontier`] locates the nearest known cell that
//! still touches unexplored territory, and [`plan_route`] runs A* over
//! whatever subgraph is currently known to be clear.
//!
//! All searches visit neighbours in the fixed `+x, -x, +z, -z` order
//! and break priority ties by insertion sequence, so identical inputs
//! always produce identical results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod deadend;
mod error;
mod frontier;
mod knowledge;
mod planner;

pub use deadend::DeadEndSet;
pub use error::{EndpointFault, PlanError};
pub use frontier::find_frontier;
pub use knowledge::CellKnowledge;
pub use planner::{plan_route, Route};
