//! Quarry: a partially-observed maze exploration and pursuit engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Quarry sub-crates. For most hosts, adding `quarry` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quarry::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use std::sync::Arc;
//!
//! // Generate a 9×9 perfect maze from a fixed seed.
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let maze = MazeGenerator::new(9, 9).unwrap().generate(&mut rng);
//!
//! // Spawn an agent and hand it one tick's view of the world.
//! let spawn = maze.floor_cells().next().unwrap();
//! let target = maze.furthest_floor_from(spawn);
//! let mut agent =
//!     PursuitAgent::new(Arc::new(maze), AgentConfig::default(), spawn).unwrap();
//!
//! agent.tick(
//!     1.0,
//!     spawn,
//!     &TargetObservation {
//!         cell: target,
//!         distance: 12.0,
//!         line_of_sight: false,
//!     },
//! );
//!
//! // The first sensing pass classified the spawn's surroundings.
//! assert!(agent.knowledge().known_count() >= 5);
//! assert_eq!(agent.mode(), BehaviorMode::Searching);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quarry-core` | Grid coordinates, cell states, behavior modes |
//! | [`maze`] | `quarry-maze` | World geometry and maze generation |
//! | [`nav`] | `quarry-nav` | Knowledge maps, frontier search, A* planning |
//! | [`belief`] | `quarry-belief` | Two-state HMM proximity filter |
//! | [`agent`] | `quarry-agent` | The ticked pursuit agent and goal policies |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid coordinates and discrete states (`quarry-core`).
///
/// [`types::Cell`] is the key type used throughout the workspace.
pub use quarry_core as types;

/// World geometry and maze generation (`quarry-maze`).
///
/// [`maze::WorldGeometry`] is the immutable wall/floor grid;
/// [`maze::MazeGenerator`] produces one with randomized Prim's
/// algorithm.
pub use quarry_maze as maze;

/// Navigation under partial information (`quarry-nav`).
///
/// [`nav::CellKnowledge`], [`nav::DeadEndSet`],
/// [`nav::find_frontier`], and [`nav::plan_route`].
pub use quarry_nav as nav;

/// Target-proximity belief filtering (`quarry-belief`).
///
/// [`belief::BeliefFilter`] runs the two-state forward HMM driven by
/// binary visibility evidence.
pub use quarry_belief as belief;

/// The ticked pursuit agent (`quarry-agent`).
///
/// [`agent::PursuitAgent`] composes sensing, belief tracking, goal
/// policies, and route planning; [`agent::policy_for`] instantiates
/// the goal-selection strategies.
pub use quarry_agent as agent;

/// Common imports for typical Quarry usage.
///
/// ```rust
/// use quarry::prelude::*;
/// ```
pub mod prelude {
    pub use quarry_agent::{
        AgentConfig, GoalDecision, GoalPolicy, PolicyKind, PursuitAgent, TargetObservation,
    };
    pub use quarry_belief::{BeliefConfig, BeliefFilter};
    pub use quarry_core::{BehaviorMode, Cell, CellState};
    pub use quarry_maze::{MazeGenerator, Tile, WorldGeometry};
    pub use quarry_nav::{find_frontier, plan_route, CellKnowledge, DeadEndSet, Route};
}
