use serde::{Deserialize, Serialize};

use crate::error::SaveError;
use crate::game::{Board, Cell, GameState, COLS, ROWS};

pub const SAVE_FORMAT_VERSION: u32 = 1;

/// On-disk form of a game: the grid as six strings of seven symbols, top row
/// first, `_` empty, `X` player, `O` computer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: u32,
    #[serde(default)]
    pub saved_at: u64,
    pub rows: Vec<String>,
}

impl SavedGame {
    pub fn from_state(state: &GameState, saved_at: u64) -> Self {
        let rows = state
            .board()
            .cells()
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();

        SavedGame {
            version: SAVE_FORMAT_VERSION,
            saved_at,
            rows,
        }
    }

    /// Parse the grid back into a board, checking shape and symbols.
    pub fn to_board(&self) -> Result<Board, SaveError> {
        if self.version != SAVE_FORMAT_VERSION {
            return Err(SaveError::Format(format!(
                "unsupported version {} (expected {})",
                self.version, SAVE_FORMAT_VERSION
            )));
        }
        if self.rows.len() != ROWS {
            return Err(SaveError::Format(format!(
                "expected {} rows, found {}",
                ROWS,
                self.rows.len()
            )));
        }

        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, line) in self.rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != COLS {
                return Err(SaveError::Format(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    symbols.len(),
                    COLS
                )));
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                cells[row][col] = Cell::from_symbol(symbol).ok_or_else(|| {
                    SaveError::Format(format!("unknown symbol {symbol:?} at ({row}, {col})"))
                })?;
            }
        }

        Ok(Board::from_cells(cells))
    }

    /// Rebuild the game. Only positions reachable by play are accepted.
    pub fn to_state(&self) -> Result<GameState, SaveError> {
        let board = self.to_board()?;
        if !board.is_settled() {
            return Err(SaveError::Format(
                "a token is floating above an empty cell".into(),
            ));
        }
        GameState::from_board(board).ok_or_else(|| {
            SaveError::Format("token counts do not match alternating turns".into())
        })
    }
}
