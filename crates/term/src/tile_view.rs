//! Tile views: a tile in its own bounding box, or placed on a grid.

use std::fmt::Write;

use crate::core::Tile;

/// Fill character for covered cells
pub const DEFAULT_FILL: char = '#';

const EMPTY: char = '.';

/// Columns kept between tiles in [`draw_window`]
const WINDOW_GAP: usize = 2;

/// The tile's bounding box as rows of `.` and `fill`
///
/// An empty tile yields no rows.
pub fn tile_rows(tile: &Tile, fill: char) -> Vec<String> {
    let (w, h) = tile.box_limit();
    let (w, h) = (w.max(0) as usize, h.max(0) as usize);
    let mut grid = vec![vec![EMPTY; w]; h];
    for &(x, y) in tile.cells() {
        if let Some(cell) = grid.get_mut(y as usize).and_then(|row| row.get_mut(x as usize)) {
            *cell = fill;
        }
    }
    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// `id (WxH)` header followed by the tile's rows
pub fn draw_tile(tile: &Tile, fill: char) -> String {
    let rows = tile_rows(tile, fill);
    if rows.is_empty() {
        return "(empty)\n".to_owned();
    }
    let (w, h) = tile.box_limit();
    let mut out = String::new();
    let _ = writeln!(out, "{} ({w}x{h})", tile.id());
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// A `width x height` grid with the transformed tile drawn at the origin
///
/// Cells falling outside the grid are clipped.
#[allow(clippy::too_many_arguments)]
pub fn draw_footprint(
    tile: &Tile,
    origin_x: i32,
    origin_y: i32,
    rotations: i32,
    flipped: bool,
    width: usize,
    height: usize,
    fill: char,
) -> String {
    let mut grid = vec![vec![EMPTY; width]; height];
    for (x, y) in tile.footprint(origin_x, origin_y, rotations, flipped) {
        if x < 0 || y < 0 {
            continue;
        }
        if let Some(cell) = grid.get_mut(y as usize).and_then(|row| row.get_mut(x as usize)) {
            *cell = fill;
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} @({origin_x},{origin_y}) rot={} flip={}",
        tile.id(),
        rotations.rem_euclid(4),
        u8::from(flipped)
    );
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Current tile, then the upcoming tiles side by side
pub fn draw_window(current: &Tile, next: &[&Tile], fill: char) -> String {
    let mut out = String::from("Current tile:\n\n");
    for row in tile_rows(current, fill) {
        let _ = writeln!(out, "    {row}");
    }

    out.push_str("\nNext tiles:\n\n");
    let blocks: Vec<Vec<String>> = next.iter().map(|t| tile_rows(t, fill)).collect();
    for line in hstack(&blocks, WINDOW_GAP) {
        let _ = writeln!(out, "    {}", line.trim_end());
    }
    out
}

/// Lay blocks out left to right, bottom rows padded with spaces
fn hstack(blocks: &[Vec<String>], gap: usize) -> Vec<String> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks
        .iter()
        .map(|b| b.iter().map(|r| r.chars().count()).max().unwrap_or(0))
        .collect();

    (0..height)
        .map(|y| {
            let mut line = String::new();
            for (i, block) in blocks.iter().enumerate() {
                if i > 0 {
                    line.push_str(&" ".repeat(gap));
                }
                let row = block.get(y).map(String::as_str).unwrap_or("");
                let _ = write!(line, "{row:<width$}", width = widths[i]);
            }
            line
        })
        .collect()
}
