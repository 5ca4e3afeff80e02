//! Per-cell knowledge states and the agent behavior mode.

use std::fmt;

/// The agent's belief about one cell's traversability.
///
/// Cells start `Unknown` and are classified by sensing. Once a cell
/// leaves `Unknown` it never changes again: the underlying geometry is
/// static, so a classification is final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Never sensed.
    #[default]
    Unknown,
    /// Sensed and traversable.
    Clear,
    /// Sensed and occupied by a wall.
    Blocked,
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Clear => write!(f, "clear"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

/// Discrete behavior mode of a pursuit agent.
///
/// Selected each planning interval from the goal policy; the belief
/// threshold policy maps `P(near) > 0.5` to `Chasing` with no
/// hysteresis, so the mode may flip between consecutive evaluations
/// when the belief sits near the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BehaviorMode {
    /// Exploring toward the nearest frontier.
    #[default]
    Searching,
    /// Pursuing a concrete target cell.
    Chasing,
}

impl fmt::Display for BehaviorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Searching => write!(f, "searching"),
            Self::Chasing => write!(f, "chasing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(CellState::default(), CellState::Unknown);
        assert_eq!(BehaviorMode::default(), BehaviorMode::Searching);
    }

    #[test]
    fn display() {
        assert_eq!(CellState::Clear.to_string(), "clear");
        assert_eq!(BehaviorMode::Chasing.to_string(), "chasing");
    }
}
