//! The agent's incrementally discovered cell classification.

use indexmap::IndexMap;
use quarry_core::{Cell, CellState};
use quarry_maze::WorldGeometry;

/// A per-agent, monotonically growing map from [`Cell`] to
/// [`CellState`].
///
/// Populated by [`discover`](CellKnowledge::discover), which models
/// bounded local perception: the agent only learns topology along and
/// around its own path, never the full maze at once. Classification is
/// write-once — the geometry is static, so once a cell leaves
/// `Unknown` it never changes again.
///
/// Backed by an [`IndexMap`] so iteration follows insertion order,
/// keeping frontier candidate collection deterministic across runs.
#[derive(Clone, Debug, Default)]
pub struct CellKnowledge {
    cells: IndexMap<Cell, CellState>,
}

impl CellKnowledge {
    /// Create an empty knowledge map: every cell is `Unknown`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded state of `cell`, `Unknown` when never sensed.
    pub fn state(&self, cell: Cell) -> CellState {
        self.cells.get(&cell).copied().unwrap_or(CellState::Unknown)
    }

    /// Whether `cell` is known to be traversable.
    pub fn is_clear(&self, cell: Cell) -> bool {
        self.state(cell) == CellState::Clear
    }

    /// Number of cells that have left `Unknown`.
    pub fn known_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing has been sensed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over known cells in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells.iter().map(|(c, s)| (*c, *s))
    }

    /// Whether any axis-neighbour of `cell` is still `Unknown`.
    ///
    /// A known-clear cell for which this holds is a frontier.
    pub fn has_unknown_neighbour(&self, cell: Cell) -> bool {
        cell.neighbours()
            .into_iter()
            .any(|n| self.state(n) == CellState::Unknown)
    }

    /// Record a cell the agent occupies as `Clear`.
    ///
    /// No effect when the cell is already known (write-once). Used at
    /// spawn, before the first sensing pass runs.
    pub fn mark_clear(&mut self, cell: Cell) {
        self.classify(cell, CellState::Clear);
    }

    /// One sensing pass centered on `center`.
    ///
    /// The center itself becomes `Clear` when unknown — the agent is
    /// standing on it. Each of the four axis-neighbours, when unknown,
    /// is classified by probing the straight segment between the two
    /// cell centers: crossing a wall (or leaving the grid) yields
    /// `Blocked`, otherwise `Clear`. Already-known cells are left
    /// untouched.
    pub fn discover(&mut self, center: Cell, geometry: &WorldGeometry) {
        self.classify(center, CellState::Clear);
        for n in center.neighbours() {
            if self.state(n) != CellState::Unknown {
                continue;
            }
            let state = if geometry.segment_blocked(center, n) {
                CellState::Blocked
            } else {
                CellState::Clear
            };
            self.classify(n, state);
        }
    }

    fn classify(&mut self, cell: Cell, state: CellState) {
        self.cells.entry(cell).or_insert(state);
    }
}
