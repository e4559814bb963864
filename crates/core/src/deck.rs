//! Deck module - the draw pile
//!
//! The deck keeps two collections: the catalog (immutable reference set) and
//! the pile (current draw order). The first tiles of the pile form the window
//! a player may exchange against.
//!
//! Shuffles use a seeded [`SmallRng`], so a given seed always yields the same
//! draw order.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::catalog::TileCatalog;
use crate::error::DeckError;
use crate::tile::Tile;
use crate::types::{ExhaustionPolicy, WINDOW_SIZE};

#[derive(Debug, Clone)]
pub struct TileDeck {
    /// Reference copy of every tile
    catalog: Vec<Tile>,
    /// Current draw order, front is next
    pile: VecDeque<Tile>,
    policy: ExhaustionPolicy,
    rng: SmallRng,
}

impl TileDeck {
    /// Create an empty, uninitialized deck
    pub fn new(policy: ExhaustionPolicy) -> Self {
        Self {
            catalog: Vec::new(),
            pile: VecDeque::new(),
            policy,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Load the deck from a catalog
    ///
    /// Returns false, leaving the deck untouched, when the catalog is empty.
    /// `seed` of `None` reseeds from entropy.
    pub fn init_from(&mut self, catalog: &TileCatalog, shuffle: bool, seed: Option<u64>) -> bool {
        if catalog.is_empty() {
            return false;
        }
        self.catalog = catalog.all().to_vec();
        self.rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut tiles = self.catalog.clone();
        if shuffle {
            tiles.shuffle(&mut self.rng);
        }
        self.pile = tiles.into();
        true
    }

    /// True once `init_from` has succeeded
    pub fn is_initialized(&self) -> bool {
        !self.catalog.is_empty()
    }

    pub fn policy(&self) -> ExhaustionPolicy {
        self.policy
    }

    /// The reference tiles
    pub fn catalog(&self) -> &[Tile] {
        &self.catalog
    }

    /// Refill the pile from the catalog and shuffle it
    fn reshuffle(&mut self) {
        let mut tiles = self.catalog.clone();
        tiles.shuffle(&mut self.rng);
        self.pile = tiles.into();
        log::debug!("deck reshuffled, {} tiles", self.pile.len());
    }

    /// Remove and return the next tile
    ///
    /// With [`ExhaustionPolicy::Reshuffle`] the pile is refilled as soon as it
    /// empties, so the window stays populated.
    pub fn draw(&mut self) -> Result<Tile, DeckError> {
        if !self.is_initialized() {
            return Err(DeckError::Uninitialized);
        }
        if self.pile.is_empty() {
            match self.policy {
                ExhaustionPolicy::Reshuffle => self.reshuffle(),
                ExhaustionPolicy::Fail => return Err(DeckError::Exhausted),
            }
        }

        let tile = self.pile.pop_front().ok_or(DeckError::Exhausted)?;
        if self.pile.is_empty() && self.policy == ExhaustionPolicy::Reshuffle {
            self.reshuffle();
        }
        Ok(tile)
    }

    /// Up to `count` tiles from the front, without removing them
    pub fn peek(&self, count: usize) -> Vec<&Tile> {
        self.pile.iter().take(count).collect()
    }

    /// The exchange window. Stack-only.
    pub fn window(&self) -> ArrayVec<&Tile, WINDOW_SIZE> {
        self.pile.iter().take(WINDOW_SIZE).collect()
    }

    /// Ids of the next `count` tiles
    pub fn next_tile_ids(&self, count: usize) -> Vec<&str> {
        self.pile.iter().take(count).map(Tile::id).collect()
    }

    /// Swap the held tile into the window at `index`
    ///
    /// The tile put back is the catalog's canonical copy of `current_id`, so
    /// any rotation or flip applied to the held copy is lost. Returns the tile
    /// that was at `index`, or `None` when `index` is outside the window or
    /// the id is unknown.
    pub fn exchange_with_window(&mut self, index: usize, current_id: &str) -> Option<Tile> {
        if index >= WINDOW_SIZE || index >= self.pile.len() {
            return None;
        }
        let canonical = self.catalog.iter().find(|t| t.id() == current_id)?.clone();
        let slot = self.pile.get_mut(index)?;
        Some(std::mem::replace(slot, canonical))
    }

    /// Tiles left in the pile
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }
}

impl Default for TileDeck {
    fn default() -> Self {
        Self::new(ExhaustionPolicy::Reshuffle)
    }
}
