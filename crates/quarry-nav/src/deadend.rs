//! Memory of cells proven unproductive.

use indexmap::IndexSet;
use quarry_core::Cell;

/// Cells the agent has proven unreachable or unproductive for its
/// current goals.
///
/// Both frontier search and route planning skip these cells. The set
/// grows monotonically within an episode and is never silently
/// cleared; a new episode starts with a new set.
#[derive(Clone, Debug, Default)]
pub struct DeadEndSet {
    cells: IndexSet<Cell>,
}

impl DeadEndSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `cell` as a dead end. Returns `true` when newly marked.
    pub fn mark(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Whether `cell` has been marked.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of marked cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been marked.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over marked cells in marking order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}
