//! Deterministic A* over the known-clear subgraph.

use crate::deadend::DeadEndSet;
use crate::error::{EndpointFault, PlanError};
use crate::knowledge::CellKnowledge;
use quarry_core::{Cell, CellState};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// An ordered sequence of cells from start to goal inclusive.
///
/// Replaced wholesale on replanning and consumed waypoint-by-waypoint
/// by the movement layer.
pub type Route = Vec<Cell>;

/// Open-set entry: min f-cost first, ties broken by insertion
/// sequence so repeated searches expand nodes in the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    seq: u32,
    cell: Cell,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse so the smallest (f, seq)
        // pops first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn endpoint_fault(
    knowledge: &CellKnowledge,
    dead_ends: &DeadEndSet,
    cell: Cell,
) -> Option<EndpointFault> {
    if dead_ends.contains(cell) {
        return Some(EndpointFault::DeadEnd);
    }
    match knowledge.state(cell) {
        CellState::Unknown => Some(EndpointFault::Unknown),
        CellState::Blocked => Some(EndpointFault::Blocked),
        CellState::Clear => None,
    }
}

/// A* shortest path from `start` to `goal` over the cells currently
/// known `Clear` and not dead-ended.
///
/// Edge cost is uniformly 1; the heuristic is Manhattan distance,
/// admissible and consistent for unit-cost axis-aligned moves, so any
/// returned route is shortest in edge count *within the known
/// subgraph*. A cell not yet discovered is never traversed — the
/// search can under-reach relative to the true maze, and callers
/// re-attempt after more discovery. Each node closes at most once, so
/// the search terminates even though partial discovery can introduce
/// cycles the full maze does not have.
///
/// Both endpoints must be known `Clear` and not dead-ended;
/// otherwise [`PlanError::InvalidStart`]/[`PlanError::InvalidGoal`]
/// reports the fault before any search runs. Open-set exhaustion
/// yields [`PlanError::Unreachable`]. The successful route runs
/// start..goal inclusive.
pub fn plan_route(
    knowledge: &CellKnowledge,
    dead_ends: &DeadEndSet,
    start: Cell,
    goal: Cell,
) -> Result<Route, PlanError> {
    if let Some(fault) = endpoint_fault(knowledge, dead_ends, start) {
        return Err(PlanError::InvalidStart { cell: start, fault });
    }
    if let Some(fault) = endpoint_fault(knowledge, dead_ends, goal) {
        return Err(PlanError::InvalidGoal { cell: goal, fault });
    }

    let mut open = BinaryHeap::new();
    let mut g_cost: HashMap<Cell, u32> = HashMap::new();
    let mut parent: HashMap<Cell, Cell> = HashMap::new();
    let mut closed: HashSet<Cell> = HashSet::new();
    let mut seq: u32 = 0;

    g_cost.insert(start, 0);
    open.push(OpenEntry {
        f: start.manhattan(goal),
        seq,
        cell: start,
    });

    while let Some(OpenEntry { cell, .. }) = open.pop() {
        if !closed.insert(cell) {
            continue; // stale duplicate of an already-closed node
        }
        if cell == goal {
            return Ok(rebuild_route(&parent, start, goal));
        }
        let tentative = g_cost[&cell] + 1;
        for n in cell.neighbours() {
            if !knowledge.is_clear(n) || dead_ends.contains(n) || closed.contains(&n) {
                continue;
            }
            if g_cost.get(&n).map_or(true, |&known| tentative < known) {
                g_cost.insert(n, tentative);
                parent.insert(n, cell);
                seq += 1;
                open.push(OpenEntry {
                    f: tentative + n.manhattan(goal),
                    seq,
                    cell: n,
                });
            }
        }
    }
    Err(PlanError::Unreachable { start, goal })
}

fn rebuild_route(parent: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Route {
    let mut route = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = parent[&cur];
        route.push(cur);
    }
    route.reverse();
    route
}
