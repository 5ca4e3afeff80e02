//! Randomized spanning-tree maze generation.

use crate::error::GenError;
use crate::geometry::{Tile, WorldGeometry};
use quarry_core::Cell;
use rand::Rng;
use smallvec::SmallVec;

/// Generates perfect mazes with randomized Prim's algorithm on a
/// lattice where floor cells occupy odd coordinates and walls occupy
/// even coordinates.
///
/// Starting from a random odd interior cell, candidate walls are held
/// in a work list and removed uniformly at random; a wall is carved
/// exactly when it separates one visited cell from one unvisited cell.
/// Each carve admits exactly one new cell, so the carved passages form
/// a spanning tree over the odd-coordinate cells: every pair of floor
/// cells is connected by exactly one simple path, and the border stays
/// wall.
///
/// The generator draws from a caller-supplied [`Rng`]; seed a
/// deterministic generator (e.g. `ChaCha8Rng`) for reproducible levels.
#[derive(Clone, Copy, Debug)]
pub struct MazeGenerator {
    width: i32,
    height: i32,
}

impl MazeGenerator {
    /// Minimum dimension that still contains an odd interior coordinate.
    pub const MIN_DIM: i32 = 3;

    /// Create a generator for a `width * height` grid.
    ///
    /// Returns `Err(GenError::DimensionTooSmall)` when either dimension
    /// cannot host a valid odd-coordinate interior cell. The check runs
    /// here, before any level state exists.
    pub fn new(width: i32, height: i32) -> Result<Self, GenError> {
        if width < Self::MIN_DIM {
            return Err(GenError::DimensionTooSmall {
                name: "width",
                value: width,
                min: Self::MIN_DIM,
            });
        }
        if height < Self::MIN_DIM {
            return Err(GenError::DimensionTooSmall {
                name: "height",
                value: height,
                min: Self::MIN_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Configured grid width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Configured grid height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Generate a maze, consuming randomness from `rng`.
    pub fn generate(&self, rng: &mut impl Rng) -> WorldGeometry {
        let w = self.width;
        let h = self.height;
        let cell_count = (w as usize) * (h as usize);
        let mut tiles = vec![Tile::Wall; cell_count];
        let mut visited = vec![false; cell_count];
        let index = |c: Cell| (c.z as usize) * (w as usize) + (c.x as usize);

        // Random interior start, snapped down to odd coordinates.
        let mut sx = rng.gen_range(1..w - 1);
        let mut sz = rng.gen_range(1..h - 1);
        if sx % 2 == 0 {
            sx -= 1;
        }
        if sz % 2 == 0 {
            sz -= 1;
        }
        let start = Cell::new(sx, sz);
        visited[index(start)] = true;
        tiles[index(start)] = Tile::Floor;

        let mut walls: Vec<Cell> = Vec::new();
        walls.extend(self.candidate_walls(start));

        while !walls.is_empty() {
            let pick = rng.gen_range(0..walls.len());
            let wall = walls.swap_remove(pick);

            let sides = self.wall_sides(wall);
            if sides.len() != 2 {
                continue;
            }
            let (a, b) = (sides[0], sides[1]);
            if visited[index(a)] == visited[index(b)] {
                continue;
            }
            let fresh = if visited[index(a)] { b } else { a };

            tiles[index(wall)] = Tile::Floor;
            visited[index(fresh)] = true;
            tiles[index(fresh)] = Tile::Floor;
            walls.extend(self.candidate_walls(fresh));
        }

        WorldGeometry::from_tiles(w, h, tiles)
    }

    /// Candidate walls around an odd cell: the adjacent cell in each
    /// axis direction whose far side (two steps away) is still strictly
    /// interior, so border walls are never enqueued.
    fn candidate_walls(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        let mut out = SmallVec::new();
        if cell.x - 2 > 0 {
            out.push(Cell::new(cell.x - 1, cell.z));
        }
        if cell.x + 2 < self.width - 1 {
            out.push(Cell::new(cell.x + 1, cell.z));
        }
        if cell.z - 2 > 0 {
            out.push(Cell::new(cell.x, cell.z - 1));
        }
        if cell.z + 2 < self.height - 1 {
            out.push(Cell::new(cell.x, cell.z + 1));
        }
        out
    }

    /// The two lattice cells a wall separates, determined by parity:
    /// a wall between two odd cells is even on exactly one axis, and
    /// its candidates lie one step further along that axis.
    fn wall_sides(&self, wall: Cell) -> SmallVec<[Cell; 2]> {
        let mut out = SmallVec::new();
        if wall.x % 2 == 1 {
            if wall.z - 1 >= 0 {
                out.push(Cell::new(wall.x, wall.z - 1));
            }
            if wall.z + 1 < self.height {
                out.push(Cell::new(wall.x, wall.z + 1));
            }
        } else if wall.z % 2 == 1 {
            if wall.x - 1 >= 0 {
                out.push(Cell::new(wall.x - 1, wall.z));
            }
            if wall.x + 1 < self.width {
                out.push(Cell::new(wall.x + 1, wall.z));
            }
        }
        out
    }
}
