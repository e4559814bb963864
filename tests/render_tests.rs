//! Render tests - text views built from live game state

use tile_claim::core::{Board, Tile, TileCatalog, TileDeck};
use tile_claim::term::{column_label, draw_board, draw_window, parse_column, DEFAULT_FILL};
use tile_claim::types::{BonusKind, ExhaustionPolicy};

#[test]
fn test_board_view_dimensions() {
    let board = Board::for_players(5).unwrap();
    let out = draw_board(&board.snapshot());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 31);
    assert!(lines[0].trim_end().ends_with("AD"));
    assert!(lines[30].starts_with("29"));
}

#[test]
fn test_board_view_shows_bonus_and_owner() {
    let mut board = Board::with_size(4, 4);
    assert!(board.place_bonus_at(1, 1, BonusKind::Exchange));
    assert!(board.place_seed(2, 1, 9));
    let out = draw_board(&board.snapshot());
    assert_eq!(out.lines().nth(2), Some("1 . E 9 ."));
}

#[test]
fn test_window_view_from_deck() {
    let catalog = TileCatalog::from_tiles(vec![
        Tile::new("mono", vec![(0, 0)]),
        Tile::new("I2", vec![(0, 0), (1, 0)]),
        Tile::new("I3", vec![(0, 0), (1, 0), (2, 0)]),
    ]);
    let mut deck = TileDeck::new(ExhaustionPolicy::Fail);
    assert!(deck.init_from(&catalog, false, None));
    let current = deck.draw().unwrap();
    let out = draw_window(&current, &deck.peek(5), DEFAULT_FILL);
    assert!(out.contains("\n    ##  ###\n"));
}

#[test]
fn test_column_letters_cover_large_board() {
    let labels: Vec<String> = (24..30).map(column_label).collect();
    assert_eq!(labels, vec!["Y", "Z", "AA", "AB", "AC", "AD"]);
    assert_eq!(parse_column("ad"), Some(29));
}
