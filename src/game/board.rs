use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// The column the positional heuristic favors.
pub const CENTER_COL: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The playing grid. Row 0 is the top (last to fill), row `ROWS - 1` the
/// bottom. Within a column, occupied cells always form a contiguous block
/// starting at the bottom.
///
/// `Board` is a plain value: the search engine copies it freely to explore
/// hypothetical moves without touching the caller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns that can still accept a piece, in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Drop a piece without mutating `self`: returns the resulting board
    /// snapshot and the landing row. This is the form the search engine uses
    /// to simulate moves.
    pub fn with_piece(&self, col: usize, cell: Cell) -> Result<(Board, usize), MoveError> {
        let mut next = *self;
        let row = next.drop_piece(col, cell)?;
        Ok((next, row))
    }

    /// Check if the board is completely full. Pieces stack bottom-up, so a
    /// full top row implies a full board.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.cells[0][col] != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
