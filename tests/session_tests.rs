//! Session tests - full turn flow through the public API

use tile_claim::core::{Tile, TileCatalog};
use tile_claim::engine::{GameSession, Phase, PlayerProfile, SessionConfig, SessionError, TurnError};
use tile_claim::types::{BonusKind, CaptureEvent, CellMark, ExhaustionPolicy, Point};

fn mono_catalog() -> TileCatalog {
    TileCatalog::from_tiles(vec![Tile::new("mono", vec![(0, 0)])])
}

fn mixed_catalog() -> TileCatalog {
    TileCatalog::from_tiles(vec![
        Tile::new("mono", vec![(0, 0)]),
        Tile::new("domino", vec![(0, 0), (1, 0)]),
    ])
}

fn config(rounds: u32, seed: u64) -> SessionConfig {
    SessionConfig {
        rounds,
        shuffle_deck: false,
        shuffle_turn_order: false,
        seed: Some(seed),
        exhaustion: ExhaustionPolicy::Reshuffle,
    }
}

fn two_players(catalog: &TileCatalog, rounds: u32) -> GameSession {
    let players = vec![PlayerProfile::new("Ada", "red"), PlayerProfile::new("Bo", "blue")];
    GameSession::new(config(rounds, 17), catalog, players).unwrap()
}

fn bonus_position(session: &GameSession, kind: BonusKind) -> Point {
    session
        .board()
        .bonuses()
        .iter()
        .find(|&(_, &k)| k == kind)
        .map(|(&p, _)| p)
        .unwrap()
}

fn far_corner((x, y): Point) -> Point {
    (if x < 10 { 19 } else { 0 }, if y < 10 { 19 } else { 0 })
}

/// Player 1 places one mono per round at each cell while player 2 skips.
/// Returns the captures of the last placement.
fn claim_cells(session: &mut GameSession, cells: &[Point]) -> Vec<CaptureEvent> {
    let mut last = Vec::new();
    for &(x, y) in cells {
        assert_eq!(session.current_player(), 1);
        session.begin_turn().unwrap();
        last = session.place_held(x, y).unwrap();
        session.skip_turn().unwrap();
    }
    last
}

/// Seed player 1 next to a bonus of `kind` and surround it
fn capture(kind: BonusKind) -> (GameSession, Point, Vec<CaptureEvent>) {
    let mut session = two_players(&mono_catalog(), 9);
    let (bx, by) = bonus_position(&session, kind);
    let (cx, cy) = far_corner((bx, by));
    session.place_seed(bx, by - 1).unwrap();
    session.place_seed(cx, cy).unwrap();

    let ring = [
        (bx - 1, by - 1),
        (bx - 1, by),
        (bx - 1, by + 1),
        (bx, by + 1),
        (bx + 1, by - 1),
        (bx + 1, by),
    ];
    let (before, last) = ring.split_at(ring.len() - 1);
    assert!(claim_cells(&mut session, before).is_empty());
    let events = claim_cells(&mut session, last);
    (session, (bx, by), events)
}

fn first_free(session: &GameSession) -> Point {
    (0..20)
        .flat_map(|y| (0..20).map(move |x| (x, y)))
        .find(|&(x, y)| session.board().is_free(x, y))
        .unwrap()
}

#[test]
fn test_seeding_in_seat_order() {
    let mut session = two_players(&mono_catalog(), 9);
    assert_eq!(session.turn_order(), &[1, 2]);
    assert_eq!(session.phase(), Phase::Seeding);

    session.place_seed(0, 0).unwrap();
    assert_eq!(session.current_player(), 2);
    // Taken cell: player 2 must try again.
    assert_eq!(session.place_seed(0, 0), Err(TurnError::InvalidPlacement));
    assert_eq!(session.current_player(), 2);
    session.place_seed(19, 19).unwrap();

    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.round(), 1);
    assert_eq!(session.current_player(), 1);
    assert_eq!(session.board().owner(19, 19), Some(2));
}

#[test]
fn test_drawn_tile_takes_player_color() {
    let mut session = two_players(&mono_catalog(), 9);
    session.place_seed(0, 0).unwrap();
    session.place_seed(19, 19).unwrap();

    assert_eq!(session.begin_turn().unwrap().color(), "red");
    assert_eq!(
        session.begin_turn().unwrap_err(),
        SessionError::Turn(TurnError::TileAlreadyHeld)
    );
}

#[test]
fn test_invalid_placement_keeps_turn() {
    let mut session = two_players(&mono_catalog(), 9);
    session.place_seed(0, 0).unwrap();
    session.place_seed(19, 19).unwrap();

    session.begin_turn().unwrap();
    assert_eq!(session.place_held(5, 0), Err(TurnError::InvalidPlacement));
    assert!(session.held().is_some());
    assert_eq!(session.current_player(), 1);

    assert!(session.place_held(1, 0).unwrap().is_empty());
    assert!(session.held().is_none());
    assert_eq!(session.current_player(), 2);
}

#[test]
fn test_rotate_and_flip_held() {
    let mut session = two_players(&mixed_catalog(), 9);
    session.place_seed(0, 0).unwrap();
    session.place_seed(19, 19).unwrap();

    // Unshuffled: mono first, then the domino.
    session.begin_turn().unwrap();
    session.place_held(1, 0).unwrap();
    session.skip_turn().unwrap();

    assert_eq!(session.begin_turn().unwrap().id(), "domino");
    assert_eq!(session.rotate_held().unwrap().cells(), &[(0, 0), (0, 1)]);
    assert_eq!(session.flip_held().unwrap().cells(), &[(0, 0), (0, 1)]);
    assert_eq!(session.held_footprint(0, 1), Some(vec![(0, 1), (0, 2)]));
    assert!(session.can_place_held(0, 1));
    session.place_held(0, 1).unwrap();
    assert_eq!(session.board().owned_count(1), 4);
}

#[test]
fn test_exchange_spends_coupon() {
    let mut session = two_players(&mixed_catalog(), 9);
    session.place_seed(0, 0).unwrap();
    session.place_seed(19, 19).unwrap();

    assert_eq!(session.exchange_held(0), Err(TurnError::NoTileHeld));
    assert_eq!(session.begin_turn().unwrap().id(), "mono");
    assert_eq!(session.exchange_held(9), Err(TurnError::ExchangeFailed));
    assert_eq!(session.current_player_state().exchange_coupons(), 1);

    let swapped = session.exchange_held(0).unwrap();
    assert_eq!(swapped.id(), "domino");
    assert_eq!(swapped.color(), "red");
    assert_eq!(session.current_player_state().exchange_coupons(), 0);
    assert_eq!(session.deck().next_tile_ids(1), vec!["mono"]);
    assert_eq!(session.exchange_held(0), Err(TurnError::NoCoupon));
}

#[test]
fn test_skip_discards_held_tile() {
    let mut session = two_players(&mono_catalog(), 9);
    session.place_seed(0, 0).unwrap();
    session.place_seed(19, 19).unwrap();

    session.begin_turn().unwrap();
    session.skip_turn().unwrap();
    assert!(session.held().is_none());
    assert_eq!(session.current_player(), 2);
    assert_eq!(session.board().owned_count(1), 1);
}

#[test]
fn test_exchange_bonus_capture_grants_coupon() {
    let (session, pos, events) = capture(BonusKind::Exchange);
    assert_eq!(
        events,
        vec![CaptureEvent {
            kind: BonusKind::Exchange,
            position: pos
        }]
    );
    assert_eq!(session.board().owner(pos.0, pos.1), Some(1));
    assert_eq!(session.board().bonus_at(pos.0, pos.1), None);
    assert_eq!(session.player(1).map(|p| p.exchange_coupons()), Some(2));
}

#[test]
fn test_steal_bonus_capture_sets_entitlement() {
    let (session, _, events) = capture(BonusKind::Steal);
    assert_eq!(events.len(), 1);
    let player = session.player(1).unwrap();
    assert!(player.steal_available());
    assert!(!player.stone_pending());
}

#[test]
fn test_captured_stone_must_be_placed_before_drawing() {
    let (mut session, _, events) = capture(BonusKind::Stone);
    assert_eq!(events[0].kind, BonusKind::Stone);
    assert_eq!(session.round(), 7);
    assert!(session.current_player_state().stone_pending());

    assert_eq!(
        session.begin_turn().unwrap_err(),
        SessionError::Turn(TurnError::StonePending)
    );

    let (x, y) = first_free(&session);
    session.place_stone(x, y).unwrap();
    assert_eq!(session.board().mark(x, y), Some(CellMark::Obstacle));
    assert!(!session.current_player_state().stone_pending());
    assert_eq!(session.place_stone(x, y), Err(TurnError::NoStone));
    assert!(session.begin_turn().is_ok());
}

#[test]
fn test_final_purchase_and_winner() {
    let mut session = two_players(&mono_catalog(), 1);
    session.place_seed(0, 0).unwrap();
    session.place_seed(19, 19).unwrap();

    session.begin_turn().unwrap();
    session.place_held(1, 0).unwrap();
    session.skip_turn().unwrap();
    assert_eq!(session.phase(), Phase::FinalPurchase);
    assert_eq!(
        session.begin_turn().unwrap_err(),
        SessionError::Turn(TurnError::WrongPhase(Phase::FinalPurchase))
    );

    assert_eq!(session.buy_single_cell(5, 5), Err(TurnError::InvalidPlacement));
    assert!(session.buy_single_cell(0, 1).unwrap().is_empty());
    assert_eq!(session.buy_single_cell(1, 1), Err(TurnError::NoCoupon));
    assert!(session.winner().is_none());
    session.pass().unwrap();

    assert_eq!(session.current_player(), 2);
    session.pass().unwrap();
    assert_eq!(session.phase(), Phase::Finished);

    let scores = session.scores();
    assert_eq!(scores[0].player_id, 1);
    assert_eq!(scores[0].cell_count, 3);
    assert_eq!(scores[1].cell_count, 1);
    assert_eq!(session.winner().map(|p| p.name()), Some("Ada"));
    assert_eq!(session.pass(), Err(TurnError::WrongPhase(Phase::Finished)));
}

#[test]
fn test_zero_rounds_skip_to_final_purchase() {
    let mut session = two_players(&mono_catalog(), 0);
    session.place_seed(0, 0).unwrap();
    session.place_seed(19, 19).unwrap();
    assert_eq!(session.phase(), Phase::FinalPurchase);
}

#[test]
fn test_config_from_json() {
    let config: SessionConfig =
        serde_json::from_str(r#"{ "rounds": 2, "shuffle_turn_order": false, "seed": 5 }"#).unwrap();
    let players = vec![PlayerProfile::new("Ada", "red"), PlayerProfile::new("Bo", "blue")];
    let session = GameSession::new(config, &mono_catalog(), players).unwrap();
    assert_eq!(session.config().rounds, 2);
    assert_eq!(session.turn_order(), &[1, 2]);
}

#[test]
fn test_pending_stone_blocks_skipping() {
    let (mut session, _, events) = capture(BonusKind::Stone);
    assert_eq!(events[0].kind, BonusKind::Stone);

    assert_eq!(session.skip_turn(), Err(TurnError::StonePending));
    assert_eq!(session.current_player(), 1);
    assert!(session.current_player_state().stone_pending());

    let (x, y) = first_free(&session);
    session.place_stone(x, y).unwrap();
    session.skip_turn().unwrap();
    assert_eq!(session.current_player(), 2);
}
