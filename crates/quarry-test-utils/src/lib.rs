//! Test fixtures for Quarry development.
//!
//! Provides ASCII-authored geometries and pre-discovered knowledge
//! maps so tests can describe a level visually instead of assembling
//! tiles by hand.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use quarry_core::Cell;
use quarry_maze::{Tile, WorldGeometry};
use quarry_nav::CellKnowledge;

/// Build a geometry from an ASCII map: `#` is wall, `.` is floor.
///
/// Rows are z-lines top to bottom starting at `z = 0`; leading and
/// trailing blank lines are ignored, surrounding whitespace per line
/// is trimmed. Panics on empty or ragged input — fixtures are
/// authored by hand and should fail loudly.
///
/// ```
/// use quarry_test_utils::geometry_from_ascii;
///
/// let g = geometry_from_ascii("#####\n#...#\n#####");
/// assert_eq!(g.floor_count(), 3);
/// ```
pub fn geometry_from_ascii(map: &str) -> WorldGeometry {
    let rows: Vec<&str> = map
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!rows.is_empty(), "ASCII map has no rows");
    let width = rows[0].len();
    for (z, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            width,
            "ASCII map row {z} has width {} but row 0 has {width}",
            row.len()
        );
    }

    WorldGeometry::from_fn(width as i32, rows.len() as i32, |c| {
        match rows[c.z as usize].as_bytes()[c.x as usize] {
            b'#' => Tile::Wall,
            b'.' => Tile::Floor,
            other => panic!("unexpected map byte {:?} at {c}", other as char),
        }
    })
    .expect("ASCII map dimensions are positive")
}

/// A knowledge map with every floor cell fully sensed, as if the agent
/// had walked the entire level.
pub fn fully_known(geometry: &WorldGeometry) -> CellKnowledge {
    let mut knowledge = CellKnowledge::new();
    for cell in geometry.floor_cells() {
        knowledge.discover(cell, geometry);
    }
    knowledge
}

/// All floor cells of `geometry`, row-major.
pub fn floors(geometry: &WorldGeometry) -> Vec<Cell> {
    geometry.floor_cells().collect()
}
