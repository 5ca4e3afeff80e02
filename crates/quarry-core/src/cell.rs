//! The [`Cell`] grid coordinate.

use std::fmt;
use std::ops::{Add, Sub};

/// An integer 2D grid coordinate `(x, z)`.
///
/// Cells identify one unit of the maze lattice and are the key type for
/// every map and set in the workspace. Value equality, `Copy`, `Hash`,
/// and a total order (row-major: `z` then `x`) are all derived so cells
/// can be used in hash maps, ordered maps, and deterministic sorts alike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Position along the x axis.
    pub x: i32,
    /// Position along the z axis.
    pub z: i32,
}

impl Cell {
    /// Create a cell at `(x, z)`.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The four axis-neighbours in the fixed expansion order
    /// `+x, -x, +z, -z`.
    ///
    /// Every breadth-first and best-first search in the workspace visits
    /// neighbours in exactly this order so that tie-breaks, and therefore
    /// returned routes, are reproducible across runs.
    pub const fn neighbours(self) -> [Cell; 4] {
        [
            Cell::new(self.x + 1, self.z),
            Cell::new(self.x - 1, self.z),
            Cell::new(self.x, self.z + 1),
            Cell::new(self.x, self.z - 1),
        ]
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// Matches the graph geodesic for unit-cost 4-connected movement,
    /// which makes it an admissible and consistent A* heuristic.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.z.abs_diff(other.z)
    }

    /// Whether `other` is one of the four axis-neighbours.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn neighbour_order_is_fixed() {
        let c = Cell::new(3, -2);
        assert_eq!(
            c.neighbours(),
            [
                Cell::new(4, -2),
                Cell::new(2, -2),
                Cell::new(3, -1),
                Cell::new(3, -3),
            ]
        );
    }

    #[test]
    fn manhattan_basics() {
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(3, 4)), 7);
        assert_eq!(Cell::new(-2, 1).manhattan(Cell::new(2, -1)), 6);
        assert_eq!(Cell::new(5, 5).manhattan(Cell::new(5, 5)), 0);
    }

    #[test]
    fn adjacency() {
        let c = Cell::new(0, 0);
        for n in c.neighbours() {
            assert!(c.is_adjacent(n));
        }
        assert!(!c.is_adjacent(Cell::new(1, 1)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn display_format() {
        assert_eq!(Cell::new(7, -3).to_string(), "(7, -3)");
    }

    proptest! {
        #[test]
        fn manhattan_is_symmetric(
            ax in -100i32..100, az in -100i32..100,
            bx in -100i32..100, bz in -100i32..100,
        ) {
            let a = Cell::new(ax, az);
            let b = Cell::new(bx, bz);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
        }

        #[test]
        fn neighbours_are_all_at_distance_one(
            x in -100i32..100, z in -100i32..100,
        ) {
            let c = Cell::new(x, z);
            for n in c.neighbours() {
                prop_assert_eq!(c.manhattan(n), 1);
            }
        }
    }
}
