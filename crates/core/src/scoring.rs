//! Scoring module - endgame ranking
//!
//! A player's score is the side of the largest solid square of cells they
//! own, with total owned cells as the tie-break. The square is found with the
//! classic dynamic program
//!
//! `dp[y][x] = 1 + min(dp[y-1][x], dp[y][x-1], dp[y-1][x-1])`
//!
//! over the player's cells (1 on the first row or column); cells the player
//! does not own have `dp = 0`.

use serde::Serialize;

use crate::board::OwnerGrid;
use crate::types::{PlayerId, NO_OWNER};

/// Final result for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreRecord {
    pub player_id: PlayerId,
    pub cell_count: u32,
    pub max_square: u32,
}

/// Score a single player in one pass over the grid
pub fn score_player(grid: OwnerGrid<'_>, player: PlayerId) -> ScoreRecord {
    let width = grid.width();
    let cells = grid.cells();

    // Only the previous row is needed.
    let mut prev = vec![0u32; width];
    let mut row = vec![0u32; width];
    let mut cell_count = 0u32;
    let mut max_square = 0u32;

    for y in 0..grid.height() {
        for x in 0..width {
            row[x] = if cells[y * width + x] == player {
                cell_count += 1;
                if x > 0 && y > 0 {
                    1 + prev[x].min(row[x - 1]).min(prev[x - 1])
                } else {
                    1
                }
            } else {
                0
            };
            max_square = max_square.max(row[x]);
        }
        std::mem::swap(&mut prev, &mut row);
    }

    ScoreRecord {
        player_id: player,
        cell_count,
        max_square,
    }
}

/// Sort best first: larger square, then more cells
///
/// The sort is stable, so fully tied players keep their input order.
pub fn rank(scores: &mut [ScoreRecord]) {
    scores.sort_by(|a, b| {
        b.max_square
            .cmp(&a.max_square)
            .then_with(|| b.cell_count.cmp(&a.cell_count))
    });
}

/// Ranked scores for every player that owns at least one cell
///
/// Players are discovered in ascending id order.
pub fn compute_scores(grid: OwnerGrid<'_>) -> Vec<ScoreRecord> {
    let mut present = [false; PlayerId::MAX as usize + 1];
    for &owner in grid.cells() {
        present[owner as usize] = true;
    }
    let players: Vec<PlayerId> = (0..=PlayerId::MAX)
        .filter(|&p| p != NO_OWNER && present[p as usize])
        .collect();
    compute_scores_for(grid, &players)
}

/// Ranked scores for the listed players, including those with no cells
pub fn compute_scores_for(grid: OwnerGrid<'_>, players: &[PlayerId]) -> Vec<ScoreRecord> {
    let mut scores: Vec<ScoreRecord> = players.iter().map(|&p| score_player(grid, p)).collect();
    rank(&mut scores);
    scores
}

/// The winner of a ranked list
pub fn leader(scores: &[ScoreRecord]) -> Option<&ScoreRecord> {
    scores.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_rows(rows: &[&[PlayerId]]) -> (usize, usize, Vec<PlayerId>) {
        let width = rows[0].len();
        let cells = rows.iter().flat_map(|r| r.iter().copied()).collect();
        (width, rows.len(), cells)
    }

    #[test]
    fn test_square_dp() {
        let (w, h, cells) = grid_from_rows(&[
            &[1, 1, 1, 0],
            &[1, 1, 1, 2],
            &[1, 1, 0, 2],
            &[0, 1, 2, 2],
        ]);
        let grid = OwnerGrid::new(w, h, &cells).unwrap();

        let one = score_player(grid, 1);
        assert_eq!(one.cell_count, 9);
        assert_eq!(one.max_square, 2);

        let two = score_player(grid, 2);
        assert_eq!(two.cell_count, 4);
        assert_eq!(two.max_square, 1);
    }

    #[test]
    fn test_ranking_tie_break_on_cells() {
        let (w, h, cells) = grid_from_rows(&[
            &[1, 1, 0, 2, 2],
            &[1, 1, 0, 2, 2],
            &[1, 0, 0, 0, 0],
            &[0, 0, 0, 3, 0],
        ]);
        let grid = OwnerGrid::new(w, h, &cells).unwrap();
        let scores = compute_scores(grid);
        let order: Vec<PlayerId> = scores.iter().map(|s| s.player_id).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(leader(&scores).map(|s| s.player_id), Some(1));
    }

    #[test]
    fn test_listed_player_without_cells() {
        let cells: Vec<PlayerId> = vec![1, 1, 0, 0];
        let grid = OwnerGrid::new(2, 2, &cells).unwrap();
        let scores = compute_scores_for(grid, &[2, 1]);
        assert_eq!(scores[0].player_id, 1);
        assert_eq!(
            scores[1],
            ScoreRecord {
                player_id: 2,
                cell_count: 0,
                max_square: 0
            }
        );
    }

    #[test]
    fn test_leader_of_empty_list() {
        assert!(leader(&[]).is_none());
    }
}
