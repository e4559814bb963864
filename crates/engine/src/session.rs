//! Game session - the turn driver
//!
//! Owns the board, the deck and every player's bookkeeping for the lifetime
//! of one game. Callers feed it decisions (where to seed, rotate, exchange,
//! where to place); it enforces whose turn it is and what is allowed in the
//! current phase. No I/O happens here.
//!
//! Phase order: `Seeding -> Playing -> FinalPurchase -> Finished`.
//!
//! - **Seeding**: every player, in seat order, claims one starting cell.
//! - **Playing**: `rounds` rounds. A turn draws a tile, optionally rotates,
//!   flips or exchanges it, then places it or skips. A captured stone must be
//!   placed before the owner's next draw.
//! - **FinalPurchase**: each player may trade coupons for single cells, then
//!   passes.
//! - **Finished**: scores are final and a winner exists.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::SessionConfig;
use crate::core::{compute_scores_for, leader, Board, ScoreRecord, SetupError, Tile, TileCatalog, TileDeck};
use crate::error::{SessionError, TurnError};
use crate::player::{PlayerProfile, PlayerState};
use crate::types::{CaptureEvent, PlayerId, Point, MAX_PLAYERS, MIN_PLAYERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Seeding,
    Playing,
    FinalPurchase,
    Finished,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    deck: TileDeck,
    /// Indexed by `id - 1`
    players: Vec<PlayerState>,
    /// Seat order
    turn_order: Vec<PlayerId>,
    /// Index into `turn_order`
    seat: usize,
    /// 1-based
    round: u32,
    phase: Phase,
    held: Option<Tile>,
}

impl GameSession {
    /// Set up a game for the given players
    ///
    /// Ids are handed out 1, 2, ... in profile order; the seating order is
    /// then shuffled if the config asks for it. The player count is checked
    /// before the board is allocated.
    pub fn new(config: SessionConfig, catalog: &TileCatalog, profiles: Vec<PlayerProfile>) -> Result<Self, SessionError> {
        let count = profiles.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::InvalidPlayerCount(count).into());
        }

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut next_id: PlayerId = 1;
        let players: Vec<PlayerState> = profiles
            .into_iter()
            .map(|profile| {
                let id = next_id;
                next_id += 1;
                PlayerState::new(id, profile)
            })
            .collect();

        let mut turn_order: Vec<PlayerId> = players.iter().map(PlayerState::id).collect();
        if config.shuffle_turn_order {
            turn_order.shuffle(&mut rng);
        }

        let mut board = Board::for_players(count)?;
        board.place_bonuses(count, &mut rng)?;

        let mut deck = TileDeck::new(config.exhaustion);
        let deck_seed: u64 = rng.gen();
        if !deck.init_from(catalog, config.shuffle_deck, Some(deck_seed)) {
            return Err(SessionError::EmptyCatalog);
        }

        log::info!(
            "session ready: {count} players on {}x{}, {} tiles, {} rounds",
            board.width(),
            board.height(),
            catalog.len(),
            config.rounds
        );

        Ok(Self {
            config,
            board,
            deck,
            players,
            turn_order,
            seat: 0,
            round: 1,
            phase: Phase::Seeding,
            held: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Read-only board view
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn deck(&self) -> &TileDeck {
        &self.deck
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.get(usize::from(id).checked_sub(1)?)
    }

    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// Whose move it is
    pub fn current_player(&self) -> PlayerId {
        self.turn_order[self.seat]
    }

    pub fn current_player_state(&self) -> &PlayerState {
        &self.players[self.slot(self.current_player())]
    }

    /// The tile drawn this turn, with any rotation or flip applied
    pub fn held(&self) -> Option<&Tile> {
        self.held.as_ref()
    }

    fn slot(&self, id: PlayerId) -> usize {
        usize::from(id) - 1
    }

    fn current_mut(&mut self) -> &mut PlayerState {
        let slot = self.slot(self.current_player());
        &mut self.players[slot]
    }

    fn require(&self, phase: Phase) -> Result<(), TurnError> {
        if self.phase != phase {
            return Err(TurnError::WrongPhase(self.phase));
        }
        Ok(())
    }

    // ---------------------------------------------------------------- seeding

    /// Claim the current player's starting cell
    pub fn place_seed(&mut self, x: i32, y: i32) -> Result<(), TurnError> {
        self.require(Phase::Seeding)?;
        let player = self.current_player();
        if !self.board.place_seed(x, y, player) {
            return Err(TurnError::InvalidPlacement);
        }
        log::debug!("player {player} seeded at ({x}, {y})");

        self.seat += 1;
        if self.seat == self.turn_order.len() {
            self.seat = 0;
            self.phase = if self.config.rounds == 0 {
                Phase::FinalPurchase
            } else {
                Phase::Playing
            };
            log::info!("all starting cells placed, entering {:?}", self.phase);
        }
        Ok(())
    }

    // ---------------------------------------------------------------- turns

    /// Draw the tile for this turn
    ///
    /// Refused while a captured stone is waiting to be placed.
    pub fn begin_turn(&mut self) -> Result<&Tile, SessionError> {
        self.require(Phase::Playing)?;
        if self.held.is_some() {
            return Err(TurnError::TileAlreadyHeld.into());
        }
        if self.current_player_state().stone_pending() {
            return Err(TurnError::StonePending.into());
        }

        let mut tile = self.deck.draw()?;
        tile.set_color(self.current_player_state().color());
        Ok(&*self.held.insert(tile))
    }

    /// Place the current player's captured stone
    ///
    /// Allowed in the regular rounds and the final phase.
    pub fn place_stone(&mut self, x: i32, y: i32) -> Result<(), TurnError> {
        if !matches!(self.phase, Phase::Playing | Phase::FinalPurchase) {
            return Err(TurnError::WrongPhase(self.phase));
        }
        if !self.current_player_state().stone_pending() {
            return Err(TurnError::NoStone);
        }
        if !self.board.place_obstacle(x, y) {
            return Err(TurnError::InvalidPlacement);
        }
        self.current_mut().clear_stone();
        Ok(())
    }

    fn held_mut(&mut self) -> Result<&mut Tile, TurnError> {
        self.require(Phase::Playing)?;
        self.held.as_mut().ok_or(TurnError::NoTileHeld)
    }

    pub fn rotate_held(&mut self) -> Result<&Tile, TurnError> {
        let tile = self.held_mut()?;
        tile.rotate();
        Ok(&*tile)
    }

    pub fn flip_held(&mut self) -> Result<&Tile, TurnError> {
        let tile = self.held_mut()?;
        tile.flip();
        Ok(&*tile)
    }

    /// Swap the held tile for the window tile at `index`, spending a coupon
    ///
    /// The canonical form of the held tile goes back into the window.
    pub fn exchange_held(&mut self, index: usize) -> Result<&Tile, TurnError> {
        let id = self.held_mut()?.id().to_owned();
        if self.current_player_state().exchange_coupons() == 0 {
            return Err(TurnError::NoCoupon);
        }
        let mut tile = self
            .deck
            .exchange_with_window(index, &id)
            .ok_or(TurnError::ExchangeFailed)?;

        let player = self.current_mut();
        player.use_exchange_coupon();
        tile.set_color(player.color());
        log::debug!("player {} exchanged {id} for {}", player.id(), tile.id());
        Ok(&*self.held.insert(tile))
    }

    /// Cells the held tile would cover with its origin at `(x, y)`
    pub fn held_footprint(&self, x: i32, y: i32) -> Option<Vec<Point>> {
        self.held.as_ref().map(|t| t.footprint(x, y, 0, false))
    }

    /// Whether the held tile fits at `(x, y)`
    pub fn can_place_held(&self, x: i32, y: i32) -> bool {
        self.held_footprint(x, y)
            .is_some_and(|pts| self.board.can_place_footprint(&pts, self.current_player()))
    }

    /// Place the held tile and end the turn
    ///
    /// On a rule violation the tile stays in hand and the turn continues.
    pub fn place_held(&mut self, x: i32, y: i32) -> Result<Vec<CaptureEvent>, TurnError> {
        let points = self.held_mut()?.footprint(x, y, 0, false);
        let player = self.current_player();
        if !self.board.place_footprint(&points, player) {
            return Err(TurnError::InvalidPlacement);
        }
        self.held = None;
        let events = self.apply_captures();
        self.end_turn();
        Ok(events)
    }

    /// Give up this turn; a held tile is discarded
    ///
    /// A pending stone must be placed first. When no free cell is left for
    /// it the stone is forfeited instead.
    pub fn skip_turn(&mut self) -> Result<(), TurnError> {
        self.require(Phase::Playing)?;
        if self.current_player_state().stone_pending() {
            if self.board.has_free_cell() {
                return Err(TurnError::StonePending);
            }
            let player = self.current_mut();
            player.clear_stone();
            log::debug!("player {} forfeits a stone, board is full", player.id());
        }
        self.held = None;
        self.end_turn();
        Ok(())
    }

    fn apply_captures(&mut self) -> Vec<CaptureEvent> {
        let player = self.current_player();
        let events = self.board.check_bonus_capture(player);
        let state = self.current_mut();
        for event in &events {
            state.apply_capture(event);
        }
        events
    }

    fn end_turn(&mut self) {
        self.seat += 1;
        if self.seat < self.turn_order.len() {
            return;
        }
        self.seat = 0;
        if self.round >= self.config.rounds {
            self.phase = Phase::FinalPurchase;
            log::info!("round {} complete, entering final purchase", self.round);
        } else {
            self.round += 1;
            log::debug!("round {} begins", self.round);
        }
    }

    // ---------------------------------------------------------------- final phase

    /// Buy one extra cell for a coupon
    ///
    /// The usual placement rules apply. May be repeated while coupons last.
    pub fn buy_single_cell(&mut self, x: i32, y: i32) -> Result<Vec<CaptureEvent>, TurnError> {
        self.require(Phase::FinalPurchase)?;
        if self.current_player_state().exchange_coupons() == 0 {
            return Err(TurnError::NoCoupon);
        }
        let player = self.current_player();
        if !self.board.place_footprint(&[(x, y)], player) {
            return Err(TurnError::InvalidPlacement);
        }
        self.current_mut().use_exchange_coupon();
        Ok(self.apply_captures())
    }

    /// Done buying; after the last player the game finishes
    pub fn pass(&mut self) -> Result<(), TurnError> {
        self.require(Phase::FinalPurchase)?;
        self.seat += 1;
        if self.seat == self.turn_order.len() {
            self.seat = 0;
            self.phase = Phase::Finished;
            log::info!("game finished");
        }
        Ok(())
    }

    // ---------------------------------------------------------------- scoring

    /// Ranking over every player, best first
    ///
    /// Fully tied players keep seat order.
    pub fn scores(&self) -> Vec<ScoreRecord> {
        compute_scores_for(self.board.owner_grid(), &self.turn_order)
    }

    /// The winner, once the game is finished
    pub fn winner(&self) -> Option<&PlayerState> {
        if self.phase != Phase::Finished {
            return None;
        }
        let scores = self.scores();
        let best = leader(&scores)?;
        self.player(best.player_id)
    }
}
