//! Catalog preview (default binary).
//!
//! Loads a tile catalog and prints the first few tiles, the first tile's
//! footprints under every transform, the opening deck window and an empty
//! two-player board.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tile_claim::core::{Board, TileCatalog, TileDeck};
use tile_claim::term::{draw_board, draw_footprint, draw_tile, draw_window, DEFAULT_FILL};
use tile_claim::types::{ExhaustionPolicy, MIN_PLAYERS, WINDOW_SIZE};

const PREVIEW_TILES: usize = 3;
const PREVIEW_GRID: usize = 10;
const PREVIEW_ORIGIN: (i32, i32) = (3, 3);

#[derive(Parser, Debug)]
#[command(name = "tile-claim-preview")]
#[command(about = "Preview a tile catalog, the opening deck window and an empty board", long_about = None)]
struct Args {
    /// Path to the catalog JSON file
    catalog: PathBuf,

    /// Drop tiles whose shape repeats an earlier tile
    #[arg(long)]
    dedupe: bool,

    /// Deck shuffle seed; entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn load_summary(loaded: usize, kept: usize, dedupe: bool) -> String {
    if dedupe {
        format!("Loaded tiles: {loaded} ({kept} distinct shapes kept)")
    } else {
        format!("Loaded tiles: {loaded}")
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut catalog = TileCatalog::load_from_file(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;
    let loaded = catalog.len();
    if args.dedupe {
        catalog.deduplicate_by_shape();
    }
    println!("{}\n", load_summary(loaded, catalog.len(), args.dedupe));

    for tile in catalog.all().iter().take(PREVIEW_TILES) {
        println!("{}", draw_tile(tile, DEFAULT_FILL));
    }

    if let Some(first) = catalog.all().first() {
        let (ox, oy) = PREVIEW_ORIGIN;
        let transforms = (0..4).map(|r| (r, false)).chain(std::iter::once((0, true)));
        for (rotations, flipped) in transforms {
            let grid = draw_footprint(first, ox, oy, rotations, flipped, PREVIEW_GRID, PREVIEW_GRID, DEFAULT_FILL);
            println!("{grid}");
        }
    }

    let mut deck = TileDeck::new(ExhaustionPolicy::Reshuffle);
    if !deck.init_from(&catalog, true, args.seed) {
        bail!("catalog {} has no usable tiles", args.catalog.display());
    }
    let current = deck.draw()?;
    let next = deck.peek(WINDOW_SIZE);
    print!("{}", draw_window(&current, &next, DEFAULT_FILL));

    let board = Board::for_players(MIN_PLAYERS)?;
    println!();
    print!("{}", draw_board(&board.snapshot()));
    Ok(())
}
