//! Tile module - polyomino shapes and their transforms
//!
//! A tile is a set of integer cell offsets kept in normalized form: the
//! smallest x and smallest y are 0, there are no duplicates, and cells are
//! sorted lexicographically. Every transform renormalizes, so two tiles can
//! be compared cell by cell.
//!
//! Quarter turns map `(x, y) -> (y, -x)` and mirroring maps `(x, y) -> (-x, y)`.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Translate `cells` so both minimums are 0, then sort and dedupe
///
/// Idempotent; an empty slice stays empty.
pub fn normalize(cells: &mut Vec<Point>) {
    let Some(min_x) = cells.iter().map(|&(x, _)| x).min() else {
        return;
    };
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);

    for cell in cells.iter_mut() {
        cell.0 -= min_x;
        cell.1 -= min_y;
    }
    cells.sort_unstable();
    cells.dedup();
}

#[inline]
fn rotate_cells(cells: &mut Vec<Point>) {
    for cell in cells.iter_mut() {
        *cell = (cell.1, -cell.0);
    }
    normalize(cells);
}

#[inline]
fn flip_cells(cells: &mut Vec<Point>) {
    for cell in cells.iter_mut() {
        cell.0 = -cell.0;
    }
    normalize(cells);
}

/// A named shape
///
/// Deserialization goes through [`Tile::new`], so decoded tiles are
/// normalized; a record without cells is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TileRecord")]
pub struct Tile {
    id: String,
    color: String,
    cells: Vec<Point>,
}

/// Wire form of a [`Tile`] before normalization
#[derive(Deserialize)]
struct TileRecord {
    id: String,
    #[serde(default)]
    color: String,
    cells: Vec<Point>,
}

impl TryFrom<TileRecord> for Tile {
    type Error = &'static str;

    fn try_from(record: TileRecord) -> Result<Self, Self::Error> {
        if record.cells.is_empty() {
            return Err("tile has no cells");
        }
        Ok(Tile::new(record.id, record.cells).with_color(record.color))
    }
}

impl Tile {
    /// Create a tile; `cells` are normalized on the way in
    pub fn new(id: impl Into<String>, cells: Vec<Point>) -> Self {
        let mut cells = cells;
        normalize(&mut cells);
        Self {
            id: id.into(),
            color: String::new(),
            cells,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Normalized cells
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rotate a quarter turn in place
    pub fn rotate(&mut self) {
        rotate_cells(&mut self.cells);
    }

    /// Mirror horizontally in place
    pub fn flip(&mut self) {
        flip_cells(&mut self.cells);
    }

    /// A rotated copy
    pub fn rotated(&self) -> Self {
        let mut tile = self.clone();
        tile.rotate();
        tile
    }

    /// A mirrored copy
    pub fn flipped(&self) -> Self {
        let mut tile = self.clone();
        tile.flip();
        tile
    }

    /// Absolute cells the tile would cover at `(origin_x, origin_y)`
    ///
    /// The mirror is applied first, then `rotations` quarter turns (taken
    /// modulo 4, negative counts included). For chiral shapes the order
    /// matters: mirroring after rotating gives a different shape.
    pub fn footprint(&self, origin_x: i32, origin_y: i32, rotations: i32, flipped: bool) -> Vec<Point> {
        let mut pts = self.cells.clone();
        if flipped {
            flip_cells(&mut pts);
        }
        for _ in 0..rotations.rem_euclid(4) {
            rotate_cells(&mut pts);
        }
        for pt in pts.iter_mut() {
            pt.0 += origin_x;
            pt.1 += origin_y;
        }
        pts
    }

    /// Same cell sequence, ignoring id and color
    ///
    /// Only translation is factored out; a rotated copy of a shape is a
    /// different shape here.
    pub fn shape_equals(&self, other: &Tile) -> bool {
        self.cells.len() == other.cells.len() && self.cells == other.cells
    }

    /// Bounding box `(width, height)`, `(0, 0)` when empty
    pub fn box_limit(&self) -> (i32, i32) {
        if self.cells.is_empty() {
            return (0, 0);
        }
        let max_x = self.cells.iter().map(|&(x, _)| x).max().unwrap_or(0);
        let max_y = self.cells.iter().map(|&(_, y)| y).max().unwrap_or(0);
        (max_x + 1, max_y + 1)
    }
}
