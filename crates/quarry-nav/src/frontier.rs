//! Breadth-first frontier location over the known subgraph.

use crate::deadend::DeadEndSet;
use crate::knowledge::CellKnowledge;
use indexmap::IndexSet;
use quarry_core::Cell;
use std::collections::{HashSet, VecDeque};

/// Find the nearest frontier cell reachable from `origin`, or `None`.
///
/// A frontier is a known-clear, non-dead-end cell with at least one
/// `Unknown` axis-neighbour — somewhere the agent can stand and sense
/// new territory. The search is breadth-first from `origin`, expanding
/// only through clear, non-dead-end cells in the fixed
/// `+x, -x, +z, -z` order, so the result is the closest frontier by
/// edge count with deterministic tie-breaking. The origin itself wins
/// when it qualifies.
///
/// Returns `None` when no frontier exists (the reachable region is
/// fully explored) or when every frontier is disconnected from
/// `origin` in the known subgraph. Callers respond by marking the
/// origin a dead end.
pub fn find_frontier(
    knowledge: &CellKnowledge,
    dead_ends: &DeadEndSet,
    origin: Cell,
) -> Option<Cell> {
    let candidates: IndexSet<Cell> = knowledge
        .iter()
        .filter(|(cell, state)| {
            *state == quarry_core::CellState::Clear
                && !dead_ends.contains(*cell)
                && knowledge.has_unknown_neighbour(*cell)
        })
        .map(|(cell, _)| cell)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(origin);
    queue.push_back(origin);

    while let Some(cur) = queue.pop_front() {
        if candidates.contains(&cur) {
            return Some(cur);
        }
        for n in cur.neighbours() {
            if knowledge.is_clear(n) && !dead_ends.contains(n) && visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    None
}
