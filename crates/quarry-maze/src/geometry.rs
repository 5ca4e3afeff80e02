//! The immutable wall/floor grid.

use crate::error::GenError;
use quarry_core::Cell;
use rand::Rng;
use std::collections::VecDeque;

/// One tile of the world grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    /// Impassable.
    Wall,
    /// Traversable.
    Floor,
}

/// An immutable W×H grid of [`Tile`]s.
///
/// Produced once at level start (normally by
/// [`MazeGenerator`](crate::MazeGenerator)) and never mutated; share it
/// read-only across agents via `Arc`. All out-of-bounds queries answer
/// `Wall`, so callers never need separate bounds handling.
#[derive(Clone, Debug)]
pub struct WorldGeometry {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl WorldGeometry {
    /// Build a geometry by evaluating `tile_at` for every cell in
    /// row-major order.
    ///
    /// Returns `Err(GenError::DimensionTooSmall)` if either dimension
    /// is below 1. Primarily useful for tests and hand-authored levels;
    /// generated levels come from [`MazeGenerator`](crate::MazeGenerator).
    pub fn from_fn(
        width: i32,
        height: i32,
        mut tile_at: impl FnMut(Cell) -> Tile,
    ) -> Result<Self, GenError> {
        if width < 1 {
            return Err(GenError::DimensionTooSmall {
                name: "width",
                value: width,
                min: 1,
            });
        }
        if height < 1 {
            return Err(GenError::DimensionTooSmall {
                name: "height",
                value: height,
                min: 1,
            });
        }
        let mut tiles = Vec::with_capacity((width as usize) * (height as usize));
        for z in 0..height {
            for x in 0..width {
                tiles.push(tile_at(Cell::new(x, z)));
            }
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Internal constructor for the generator: `tiles` is row-major and
    /// already sized `width * height`.
    pub(crate) fn from_tiles(width: i32, height: i32, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Grid width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `cell` lies within the grid bounds.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.z >= 0 && cell.z < self.height
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.z as usize) * (self.width as usize) + (cell.x as usize)
    }

    /// The tile at `cell`, or `None` when out of bounds.
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        if self.in_bounds(cell) {
            Some(self.tiles[self.index(cell)])
        } else {
            None
        }
    }

    /// Whether `cell` is a wall. Out-of-bounds cells count as walls.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.tile(cell) != Some(Tile::Floor)
    }

    /// Whether `cell` is an in-bounds floor tile.
    pub fn is_floor(&self, cell: Cell) -> bool {
        self.tile(cell) == Some(Tile::Floor)
    }

    /// Iterate over every floor cell in row-major order.
    pub fn floor_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Tile::Floor)
            .map(move |(i, _)| {
                Cell::new((i as i32) % width, (i as i32) / width)
            })
    }

    /// Number of floor cells.
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Floor).count()
    }

    /// Whether the straight axis-aligned segment between the centers of
    /// `from` and `to` crosses a wall.
    ///
    /// This is the grid equivalent of the raycast the agent's sensor
    /// performs between two cell centers: every cell strictly after
    /// `from` up to and including `to` is checked. Segments that are
    /// not axis-aligned are reported blocked — the sensor only ever
    /// probes along an axis.
    pub fn segment_blocked(&self, from: Cell, to: Cell) -> bool {
        if from == to {
            return self.is_wall(from);
        }
        if from.x != to.x && from.z != to.z {
            return true;
        }
        let step = Cell::new((to.x - from.x).signum(), (to.z - from.z).signum());
        let mut cur = from;
        while cur != to {
            cur = cur + step;
            if self.is_wall(cur) {
                return true;
            }
        }
        false
    }

    /// Pick a uniformly random floor cell by rejection sampling, or
    /// `None` when the geometry has no floor at all.
    pub fn random_floor_cell(&self, rng: &mut impl Rng) -> Option<Cell> {
        if self.floor_count() == 0 {
            return None;
        }
        loop {
            let cell = Cell::new(
                rng.gen_range(0..self.width),
                rng.gen_range(0..self.height),
            );
            if self.is_floor(cell) {
                return Some(cell);
            }
        }
    }

    /// The floor cell at maximal breadth-first distance from `start`,
    /// used for placing the level exit as far from the spawn as the
    /// maze allows.
    ///
    /// Returns `start` itself when `start` is not a floor cell or is
    /// disconnected from every other floor.
    pub fn furthest_floor_from(&self, start: Cell) -> Cell {
        if !self.is_floor(start) {
            return start;
        }
        let mut dist = vec![-1i32; self.tiles.len()];
        let mut queue = VecDeque::new();
        dist[self.index(start)] = 0;
        queue.push_back(start);

        let mut furthest = start;
        let mut max_dist = 0;
        while let Some(cur) = queue.pop_front() {
            let d = dist[self.index(cur)];
            if d > max_dist {
                max_dist = d;
                furthest = cur;
            }
            for n in cur.neighbours() {
                if self.is_floor(n) && dist[self.index(n)] < 0 {
                    dist[self.index(n)] = d + 1;
                    queue.push_back(n);
                }
            }
        }
        furthest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// 5×3 strip: walls on the border, floor corridor in the middle row.
    fn corridor() -> WorldGeometry {
        WorldGeometry::from_fn(5, 3, |c| {
            if c.z == 1 && c.x >= 1 && c.x <= 3 {
                Tile::Floor
            } else {
                Tile::Wall
            }
        })
        .unwrap()
    }

    #[test]
    fn from_fn_rejects_degenerate_dims() {
        assert!(matches!(
            WorldGeometry::from_fn(0, 3, |_| Tile::Wall),
            Err(GenError::DimensionTooSmall { name: "width", .. })
        ));
        assert!(matches!(
            WorldGeometry::from_fn(3, -1, |_| Tile::Wall),
            Err(GenError::DimensionTooSmall { name: "height", .. })
        ));
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let g = corridor();
        assert!(g.is_wall(Cell::new(-1, 1)));
        assert!(g.is_wall(Cell::new(5, 1)));
        assert!(g.tile(Cell::new(0, 3)).is_none());
        assert!(!g.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn floor_queries() {
        let g = corridor();
        assert!(g.is_floor(Cell::new(2, 1)));
        assert!(!g.is_floor(Cell::new(2, 0)));
        assert_eq!(g.floor_count(), 3);
        let floors: Vec<Cell> = g.floor_cells().collect();
        assert_eq!(
            floors,
            vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)]
        );
    }

    #[test]
    fn segment_blocked_along_corridor() {
        let g = corridor();
        assert!(!g.segment_blocked(Cell::new(1, 1), Cell::new(3, 1)));
        assert!(g.segment_blocked(Cell::new(1, 1), Cell::new(1, 0)));
        // Out of bounds counts as wall.
        assert!(g.segment_blocked(Cell::new(1, 1), Cell::new(-1, 1)));
        // Diagonal probes are conservatively blocked.
        assert!(g.segment_blocked(Cell::new(1, 1), Cell::new(2, 2)));
    }

    #[test]
    fn random_floor_cell_only_returns_floors() {
        let g = corridor();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let cell = g.random_floor_cell(&mut rng).unwrap();
            assert!(g.is_floor(cell));
        }
    }

    #[test]
    fn random_floor_cell_none_when_all_walls() {
        let g = WorldGeometry::from_fn(4, 4, |_| Tile::Wall).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(g.random_floor_cell(&mut rng), None);
    }

    #[test]
    fn furthest_floor_in_corridor() {
        let g = corridor();
        assert_eq!(g.furthest_floor_from(Cell::new(1, 1)), Cell::new(3, 1));
        assert_eq!(g.furthest_floor_from(Cell::new(3, 1)), Cell::new(1, 1));
        // Non-floor start is returned unchanged.
        assert_eq!(g.furthest_floor_from(Cell::new(0, 0)), Cell::new(0, 0));
    }
}
