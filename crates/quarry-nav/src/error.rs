//! Error types for route planning.

use quarry_core::Cell;
use std::error::Error;
use std::fmt;

/// Why a planning endpoint was rejected before the search started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointFault {
    /// The cell has never been sensed.
    Unknown,
    /// The cell is known to be a wall.
    Blocked,
    /// The cell has been marked a dead end.
    DeadEnd,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Blocked => write!(f, "blocked"),
            Self::DeadEnd => write!(f, "dead end"),
        }
    }
}

/// Errors from [`plan_route`](crate::plan_route).
///
/// Invalid endpoints are rejected before any search runs and are kept
/// distinct from open-set exhaustion: a caller retrying after more
/// discovery wants to know whether the inputs were bad or the known
/// subgraph simply does not reach the goal yet. Every variant is
/// recoverable — the caller falls back to frontier search or marks a
/// dead end, and callers that only want a route treat all of them as
/// an empty one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// The start cell is not a plannable endpoint.
    InvalidStart {
        /// The rejected cell.
        cell: Cell,
        /// Why it was rejected.
        fault: EndpointFault,
    },
    /// The goal cell is not a plannable endpoint.
    InvalidGoal {
        /// The rejected cell.
        cell: Cell,
        /// Why it was rejected.
        fault: EndpointFault,
    },
    /// The search exhausted the known subgraph without reaching the
    /// goal. More discovery may connect them later.
    Unreachable {
        /// Search origin.
        start: Cell,
        /// Unreached goal.
        goal: Cell,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart { cell, fault } => {
                write!(f, "start {cell} is {fault}")
            }
            Self::InvalidGoal { cell, fault } => {
                write!(f, "goal {cell} is {fault}")
            }
            Self::Unreachable { start, goal } => {
                write!(f, "no known path from {start} to {goal}")
            }
        }
    }
}

impl Error for PlanError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distinguishes_outcomes() {
        let invalid = PlanError::InvalidGoal {
            cell: Cell::new(2, 3),
            fault: EndpointFault::DeadEnd,
        };
        assert_eq!(invalid.to_string(), "goal (2, 3) is dead end");

        let unreachable = PlanError::Unreachable {
            start: Cell::new(0, 0),
            goal: Cell::new(5, 5),
        };
        assert!(unreachable.to_string().contains("no known path"));
    }
}
