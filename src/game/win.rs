//! Win and draw detection.
//!
//! `check_winner` scans outward from a single origin cell, so the normal
//! game loop calls it once per move with the landing coordinates. The search
//! engine, which does not track a last move through the recursion, uses the
//! full-board `find_winner` scan instead.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

/// Number of connected cells required to win.
pub const WIN_LENGTH: usize = 4;

/// The four line axes: horizontal, vertical, diagonal, anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A completed line: the winning side and exactly four coordinates in
/// connection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub player: Player,
    pub cells: [(usize, usize); WIN_LENGTH],
}

fn in_bounds(row: isize, col: isize) -> bool {
    row >= 0 && row < ROWS as isize && col >= 0 && col < COLS as isize
}

/// Check whether the piece at `(row, col)` completes a line for `player`.
///
/// Walks both directions along each axis from the origin, counting
/// consecutive cells of the player's color. The first axis reaching
/// [`WIN_LENGTH`] wins; the returned cells are the first four of the line in
/// connection order. The origin must be the most recently placed piece for
/// the result to be meaningful as a game outcome.
pub fn check_winner(board: &Board, row: usize, col: usize, player: Player) -> Option<WinLine> {
    let target = player.to_cell();

    for (delta_row, delta_col) in DIRECTIONS {
        let mut line = vec![(row, col)];

        // Positive direction, appended after the origin
        for i in 1..WIN_LENGTH as isize {
            let r = row as isize + i * delta_row;
            let c = col as isize + i * delta_col;
            if in_bounds(r, c) && board.get(r as usize, c as usize) == target {
                line.push((r as usize, c as usize));
            } else {
                break;
            }
        }

        // Negative direction, prepended so the line stays in connection order
        for i in 1..WIN_LENGTH as isize {
            let r = row as isize - i * delta_row;
            let c = col as isize - i * delta_col;
            if in_bounds(r, c) && board.get(r as usize, c as usize) == target {
                line.insert(0, (r as usize, c as usize));
            } else {
                break;
            }
        }

        if line.len() >= WIN_LENGTH {
            let mut cells = [(0, 0); WIN_LENGTH];
            cells.copy_from_slice(&line[..WIN_LENGTH]);
            return Some(WinLine { player, cells });
        }
    }

    None
}

/// Find a winner anywhere on the board, with no last-move hint: runs the
/// single-origin check at every occupied cell.
pub fn find_winner(board: &Board) -> Option<WinLine> {
    for row in 0..ROWS {
        for col in 0..COLS {
            let player = match board.get(row, col) {
                Cell::Red => Player::Red,
                Cell::Yellow => Player::Yellow,
                Cell::Empty => continue,
            };
            if let Some(win) = check_winner(board, row, col, player) {
                return Some(win);
            }
        }
    }
    None
}

/// A full top row means every column is full. Only meaningful once
/// [`check_winner`] has come up empty: a win on the filling move still
/// takes precedence over the draw.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }

        let win = check_winner(&board, 5, 2, Player::Red).expect("horizontal win");
        assert_eq!(win.player, Player::Red);
        assert_eq!(win.cells, [(5, 0), (5, 1), (5, 2), (5, 3)]);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }

        let win = check_winner(&board, 2, 3, Player::Yellow).expect("vertical win");
        assert_eq!(win.player, Player::Yellow);
        // Vertical axis is (1,0): connection order runs top to bottom
        assert_eq!(win.cells, [(2, 3), (3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Staircase: red at (5,0), (4,1), (3,2), (2,3)
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();

        let win = check_winner(&board, row, 3, Player::Red).expect("diagonal win");
        assert_eq!(win.cells, [(2, 3), (3, 2), (4, 1), (5, 0)]);
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Staircase mirrored: red at (5,6), (4,5), (3,4), (2,3)
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();

        assert!(check_winner(&board, row, 3, Player::Red).is_some());
    }

    #[test]
    fn test_detects_from_any_origin() {
        let mut board = Board::new();
        for col in 2..6 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }

        // The same line must be found no matter which of its cells is
        // presented as the last move.
        for col in 2..6 {
            let win = check_winner(&board, 5, col, Player::Yellow)
                .unwrap_or_else(|| panic!("no win detected from origin column {col}"));
            assert_eq!(win.cells, [(5, 2), (5, 3), (5, 4), (5, 5)]);
        }
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        for col in 0..3 {
            assert!(check_winner(&board, 5, col, Player::Red).is_none());
        }
    }

    #[test]
    fn test_no_win_when_line_blocked() {
        let mut board = Board::new();
        // Red red red YELLOW red: never four consecutive
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        assert!(check_winner(&board, 5, 2, Player::Red).is_none());
        assert!(find_winner(&board).is_none());
    }

    #[test]
    fn test_five_in_a_row_truncates_to_four() {
        let mut board = Board::new();
        for col in 1..6 {
            board.drop_piece(col, Cell::Red).unwrap();
        }

        // Origin in the middle: line runs from the leftmost connected cell
        let win = check_winner(&board, 5, 3, Player::Red).expect("win");
        assert_eq!(win.cells, [(5, 1), (5, 2), (5, 3), (5, 4)]);
    }

    #[test]
    fn test_find_winner_full_scan() {
        let mut board = Board::new();
        assert!(find_winner(&board).is_none());

        for _ in 0..4 {
            board.drop_piece(6, Cell::Yellow).unwrap();
        }
        let win = find_winner(&board).expect("scan should find the vertical line");
        assert_eq!(win.player, Player::Yellow);
    }

    #[test]
    fn test_win_on_board_filling_move_takes_precedence() {
        // Fill everything except the top of column 6, then let Yellow's
        // final drop complete a vertical four while filling the board.
        let mut board = Board::new();
        for col in 0..COLS - 1 {
            for row in 0..ROWS {
                let cell = if (row + col) % 2 == 0 { Cell::Red } else { Cell::Yellow };
                board.drop_piece(col, cell).unwrap();
            }
        }
        for cell in [Cell::Red, Cell::Red, Cell::Yellow, Cell::Yellow, Cell::Yellow] {
            board.drop_piece(6, cell).unwrap();
        }

        let (full, row) = board.with_piece(6, Cell::Yellow).unwrap();
        assert!(check_draw(&full), "board is completely full");
        let win = check_winner(&full, row, 6, Player::Yellow)
            .expect("the filling move still wins");
        assert_eq!(win.cells, [(0, 6), (1, 6), (2, 6), (3, 6)]);
    }

    #[test]
    fn test_check_draw_only_when_top_row_full() {
        let mut board = Board::new();
        assert!(!check_draw(&board));

        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(check_draw(&board));
    }
}
