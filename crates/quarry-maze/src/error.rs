//! Error types for geometry construction and maze generation.

use std::error::Error;
use std::fmt;

/// Errors from [`MazeGenerator`](crate::MazeGenerator) and
/// [`WorldGeometry`](crate::WorldGeometry) construction.
///
/// Generation constraints are checked before any level state is
/// created: dimensions that cannot host a valid odd-coordinate
/// interior cell fail fast rather than silently clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenError {
    /// A grid dimension is below the required minimum.
    DimensionTooSmall {
        /// Which dimension failed (`"width"` or `"height"`).
        name: &'static str,
        /// The configured value.
        value: i32,
        /// The minimum acceptable value.
        min: i32,
    },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionTooSmall { name, value, min } => {
                write!(f, "{name} is {value}, below the minimum of {min}")
            }
        }
    }
}

impl Error for GenError {}
