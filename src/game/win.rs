use super::board::{Board, Cell, COLS, ROWS};
use super::side::Side;
use super::state::GameOutcome;

/// Number of same-side tokens in a line that wins the game.
pub const CONNECT: usize = 4;

/// Line directions as (row step, column step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Straight down a column.
    Vertical,
    /// Left to right along a row.
    Horizontal,
    /// Top-left to bottom-right, `\`.
    DiagonalDown,
    /// Bottom-left to top-right, `/`.
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// Cell `steps` steps from `(row, col)` along `direction`, if on the board.
fn offset(row: usize, col: usize, direction: Direction, steps: usize) -> Option<(usize, usize)> {
    let (dr, dc) = direction.step();
    let r = row as isize + dr * steps as isize;
    let c = col as isize + dc * steps as isize;
    if (0..ROWS as isize).contains(&r) && (0..COLS as isize).contains(&c) {
        Some((r as usize, c as usize))
    } else {
        None
    }
}

/// True if `len` cells starting at `(row, col)` along `direction` all hold
/// `cell`. Runs that would leave the board never match.
pub(crate) fn is_run(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    len: usize,
    cell: Cell,
) -> bool {
    (0..len).all(|i| match offset(row, col, direction, i) {
        Some((r, c)) => board.at(r, c) == cell,
        None => false,
    })
}

/// Check whether `side` has four in a row anywhere on the board.
pub fn has_four_in_a_row(board: &Board, side: Side) -> bool {
    let cell = side.to_cell();
    Direction::ALL.iter().any(|&direction| {
        (0..ROWS).any(|row| {
            (0..COLS).any(|col| is_run(board, row, col, direction, CONNECT, cell))
        })
    })
}

/// Check if the board is completely full
pub fn is_board_full(board: &Board) -> bool {
    (0..COLS).all(|col| board.is_column_full(col))
}

/// Classify the board. Both sides are checked on every call.
pub fn outcome(board: &Board) -> GameOutcome {
    if has_four_in_a_row(board, Side::Player) {
        GameOutcome::PlayerWin
    } else if has_four_in_a_row(board, Side::Computer) {
        GameOutcome::ComputerWin
    } else if is_board_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
