//! World geometry and maze topology generation for Quarry.
//!
//! [`WorldGeometry`] is the immutable wall/floor grid shared read-only
//! by every agent for the lifetime of a level. [`MazeGenerator`]
//! produces one from a random source using randomized Prim's algorithm
//! on the odd-coordinate lattice, guaranteeing a perfect maze: the
//! floor cells form a single connected, cycle-free component.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod generator;
mod geometry;

pub use error::GenError;
pub use generator::MazeGenerator;
pub use geometry::{Tile, WorldGeometry};
