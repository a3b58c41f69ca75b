//! Positional evaluation: sliding 4-cell windows plus a center-column bonus.
//!
//! Scores are side-relative: `score_position(board, p)` is what the position
//! is worth to `p`, and the same board scored for the opponent is not simply
//! the negation (the three-opponent block penalty is asymmetric on purpose,
//! to bias the search toward blocking).

use crate::game::{Board, Cell, Player, CENTER_COL, COLS, ROWS, WIN_LENGTH};

/// Value of each own piece in the center column.
const CENTER_BONUS: i32 = 3;

/// Score a single window of four cells for `player`.
///
/// Four in a row +100, three with an open cell +10, two with two open +2.
/// Three opponent pieces with an open cell score -80: deliberately heavier
/// than the player's own +10 so an urgent block dominates building a threat.
pub fn score_window(window: &[Cell; WIN_LENGTH], player: Player) -> i32 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();

    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for &cell in window {
        if cell == own_cell {
            own += 1;
        } else if cell == opp_cell {
            opp += 1;
        } else {
            empty += 1;
        }
    }

    let mut score = 0;
    if own == 4 {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 10;
    } else if own == 2 && empty == 2 {
        score += 2;
    }
    if opp == 3 && empty == 1 {
        score -= 80;
    }
    score
}

/// Sum of [`score_window`] over every horizontal, vertical and diagonal
/// window on the board.
pub fn score_windows(board: &Board, player: Player) -> i32 {
    let mut score = 0;

    // Horizontal
    for row in 0..ROWS {
        for col in 0..COLS - 3 {
            let window = [
                board.get(row, col),
                board.get(row, col + 1),
                board.get(row, col + 2),
                board.get(row, col + 3),
            ];
            score += score_window(&window, player);
        }
    }

    // Vertical
    for row in 0..ROWS - 3 {
        for col in 0..COLS {
            let window = [
                board.get(row, col),
                board.get(row + 1, col),
                board.get(row + 2, col),
                board.get(row + 3, col),
            ];
            score += score_window(&window, player);
        }
    }

    // Diagonal (top-left to bottom-right)
    for row in 0..ROWS - 3 {
        for col in 0..COLS - 3 {
            let window = [
                board.get(row, col),
                board.get(row + 1, col + 1),
                board.get(row + 2, col + 2),
                board.get(row + 3, col + 3),
            ];
            score += score_window(&window, player);
        }
    }

    // Diagonal (bottom-left to top-right)
    for row in 3..ROWS {
        for col in 0..COLS - 3 {
            let window = [
                board.get(row, col),
                board.get(row - 1, col + 1),
                board.get(row - 2, col + 2),
                board.get(row - 3, col + 3),
            ];
            score += score_window(&window, player);
        }
    }

    score
}

/// Full positional score for `player`: own window sum minus the opponent's,
/// plus the center-column bonus. This is the leaf value the search uses at
/// its depth cutoff.
pub fn score_position(board: &Board, player: Player) -> i32 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();

    let mut score = score_windows(board, player) - score_windows(board, player.other());

    for row in 0..ROWS {
        let cell = board.get(row, CENTER_COL);
        if cell == own_cell {
            score += CENTER_BONUS;
        } else if cell == opp_cell {
            score -= CENTER_BONUS;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_scoring_table() {
        use Cell::{Empty as E, Red as R, Yellow as Y};
        assert_eq!(score_window(&[R, R, R, R], Player::Red), 100);
        assert_eq!(score_window(&[R, R, R, E], Player::Red), 10);
        assert_eq!(score_window(&[R, E, R, E], Player::Red), 2);
        assert_eq!(score_window(&[Y, Y, Y, E], Player::Red), -80);
        // Mixed windows with no scoring shape are neutral
        assert_eq!(score_window(&[R, Y, R, E], Player::Red), 0);
        assert_eq!(score_window(&[E, E, E, E], Player::Red), 0);
        // One own piece is not a threat yet
        assert_eq!(score_window(&[R, E, E, E], Player::Red), 0);
    }

    #[test]
    fn empty_board_is_zero_for_both_sides() {
        let board = Board::new();
        assert_eq!(score_position(&board, Player::Red), 0);
        assert_eq!(score_position(&board, Player::Yellow), 0);
    }

    #[test]
    fn center_preference() {
        let mut board_center = Board::new();
        board_center.drop_piece(CENTER_COL, Cell::Red).unwrap();
        let mut board_edge = Board::new();
        board_edge.drop_piece(0, Cell::Red).unwrap();

        let center = score_position(&board_center, Player::Red);
        let edge = score_position(&board_edge, Player::Red);
        assert!(
            center > edge,
            "Center ({center}) should score higher than edge ({edge})"
        );
        // And symmetrically worse for the opponent
        assert!(score_position(&board_center, Player::Yellow) < 0);
    }

    #[test]
    fn three_in_a_row_scores_high() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        let score = score_position(&board, Player::Red);
        assert!(score > 0, "3-in-a-row should favor Red, got {score}");

        // For Yellow the same threat is an urgent negative
        let opp_score = score_position(&board, Player::Yellow);
        assert!(opp_score < -50, "unblocked threat should alarm Yellow, got {opp_score}");
    }

    #[test]
    fn window_count_matches_geometry() {
        // 69 windows total: 6*4 horizontal + 3*7 vertical + 2*12 diagonal.
        // A board of a single color scores 100 per window for that side.
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert_eq!(score_windows(&board, Player::Red), 69 * 100);
        assert_eq!(score_windows(&board, Player::Yellow), 0);
    }
}
