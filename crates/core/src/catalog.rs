//! Tile catalog - the reference list of named shapes
//!
//! The catalog file is JSON:
//!
//! ```json
//! { "tiles": [ { "id": "T1", "cells": [[0, 0], [1, 0], [1, 1]] } ] }
//! ```
//!
//! Records without a string `id` or an array `cells` are skipped, as are
//! cell entries that are not a pair of integers. A record left with no
//! usable cells is skipped too, so every loaded tile is non-empty.

use std::path::Path;

use serde_json::Value;

use crate::error::CatalogError;
use crate::tile::Tile;
use crate::types::Point;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
}

impl TileCatalog {
    /// Build a catalog from already constructed tiles
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(text)?;
        let records = root
            .get("tiles")
            .and_then(Value::as_array)
            .ok_or(CatalogError::MissingTiles)?;

        let mut tiles = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match parse_record(record) {
                Some(tile) => tiles.push(tile),
                None => log::warn!("skipping malformed catalog record #{index}"),
            }
        }
        log::debug!("loaded {} tiles from {} records", tiles.len(), records.len());
        Ok(Self { tiles })
    }

    /// Read and parse a catalog file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn all(&self) -> &[Tile] {
        &self.tiles
    }

    /// First tile with the given id
    pub fn by_id(&self, id: &str) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Drop tiles whose shape equals an earlier tile's, keeping the first
    pub fn deduplicate_by_shape(&mut self) {
        let mut unique: Vec<Tile> = Vec::with_capacity(self.tiles.len());
        for tile in self.tiles.drain(..) {
            if !unique.iter().any(|u| u.shape_equals(&tile)) {
                unique.push(tile);
            }
        }
        self.tiles = unique;
    }
}

fn parse_record(record: &Value) -> Option<Tile> {
    let id = record.get("id")?.as_str()?;
    let raw_cells = record.get("cells")?.as_array()?;

    let cells: Vec<Point> = raw_cells.iter().filter_map(parse_cell).collect();
    if cells.is_empty() {
        return None;
    }
    Some(Tile::new(id, cells))
}

fn parse_cell(cell: &Value) -> Option<Point> {
    match cell.as_array()?.as_slice() {
        [x, y] => {
            let x = i32::try_from(x.as_i64()?).ok()?;
            let y = i32::try_from(y.as_i64()?).ok()?;
            Some((x, y))
        }
        _ => None,
    }
}
