use super::board::{Board, COLS};
use super::side::Side;
use crate::error::MoveError;

/// The cell a drop actually filled. Gravity picks the row, so front ends use
/// this to redraw a single cell instead of rescanning the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub side: Side,
}

/// Drop a token for `side` into `column`, returning where it landed.
///
/// Columns are taken as signed integers so that out-of-range input from a
/// front end (including negatives) is reported as [`MoveError::IllegalColumn`]
/// rather than wrapped. On error the board is unchanged.
pub fn drop(board: &mut Board, column: i64, side: Side) -> Result<Placement, MoveError> {
    let column = validate_column(column)?;

    // Scan up from the bottom row for the first empty cell
    let row = board
        .landing_row(column)
        .ok_or(MoveError::FullColumn(column))?;
    board
        .set(row, column, side.to_cell())
        .unwrap_or_else(|e| unreachable!("landing row must be in bounds: {e}"));

    Ok(Placement { row, column, side })
}

/// Map a requested column onto a board index.
pub fn validate_column(column: i64) -> Result<usize, MoveError> {
    if (0..COLS as i64).contains(&column) {
        Ok(column as usize)
    } else {
        Err(MoveError::IllegalColumn(column))
    }
}
