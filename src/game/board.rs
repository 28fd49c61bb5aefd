use crate::error::BoardError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    Computer,
}

impl Cell {
    /// Symbol used in saved games and the headless board printout.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Player => 'X',
            Cell::Computer => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '_' => Some(Cell::Empty),
            'X' => Some(Cell::Player),
            'O' => Some(Cell::Computer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    /// Build a board from a full grid, row 0 first.
    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Clear every cell back to empty
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        Self::check_bounds(row, col)?;
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Unchecked read for scanners that only walk in-bounds coordinates.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= ROWS || col >= COLS {
            return Err(BoardError::OutOfBounds { row, column: col });
        }
        Ok(())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a token dropped into `col` would land on, if the column has room.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// True if `(row, col)` is the next cell gravity would fill in its column.
    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        self.landing_row(col) == Some(row)
    }

    /// Columns that can still take a token, left to right.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// True if no token sits above an empty cell.
    pub fn is_settled(&self) -> bool {
        (0..COLS).all(|col| {
            (1..ROWS).all(|row| {
                self.cells[row - 1][col] == Cell::Empty || self.cells[row][col] != Cell::Empty
            })
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    /// Parse a board drawn with `_`, `X` and `O`, top row first.
    #[cfg(test)]
    pub(crate) fn from_diagram(rows: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(symbols.len(), COLS, "row {row} must have {COLS} cells");
            for (col, &symbol) in symbols.iter().enumerate() {
                board.cells[row][col] = Cell::from_symbol(symbol).expect("valid symbol");
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
