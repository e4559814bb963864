//! Owned copies of board state
//!
//! A [`BoardSnapshot`] is detached from the live board, so renderers and
//! scoring can keep it past the current turn.

use serde::Serialize;

use crate::board::OwnerGrid;
use crate::types::{BonusKind, CellMark, PlayerId, Point};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSnapshot {
    width: usize,
    height: usize,
    marks: Vec<CellMark>,
    owners: Vec<PlayerId>,
    /// Ascending position order
    bonuses: Vec<(Point, BonusKind)>,
}

impl BoardSnapshot {
    /// Grids must hold `width * height` cells; only the board builds these.
    pub(crate) fn new(
        width: usize,
        height: usize,
        marks: Vec<CellMark>,
        owners: Vec<PlayerId>,
        bonuses: Vec<(Point, BonusKind)>,
    ) -> Self {
        Self {
            width,
            height,
            marks,
            owners,
            bonuses,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cell marks
    pub fn marks(&self) -> &[CellMark] {
        &self.marks
    }

    /// Row-major owners
    pub fn owners(&self) -> &[PlayerId] {
        &self.owners
    }

    pub fn bonuses(&self) -> &[(Point, BonusKind)] {
        &self.bonuses
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn mark(&self, x: usize, y: usize) -> Option<CellMark> {
        self.index(x, y).map(|i| self.marks[i])
    }

    pub fn owner(&self, x: usize, y: usize) -> Option<PlayerId> {
        self.index(x, y).map(|i| self.owners[i])
    }

    pub fn bonus_at(&self, x: usize, y: usize) -> Option<BonusKind> {
        let pos = (i32::try_from(x).ok()?, i32::try_from(y).ok()?);
        self.bonuses
            .binary_search_by(|(p, _)| p.cmp(&pos))
            .ok()
            .map(|i| self.bonuses[i].1)
    }

    pub fn owner_grid(&self) -> OwnerGrid<'_> {
        OwnerGrid::from_parts(self.width, self.height, &self.owners)
    }
}
