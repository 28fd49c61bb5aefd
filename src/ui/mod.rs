//! Front ends: an interactive terminal UI and a line-based headless mode.

mod app;
mod game_view;
pub mod headless;

pub use app::App;

use crate::error::MoveError;
use crate::game::{GameOutcome, COLS};

/// User-facing text for a rejected move. Columns are shown 1-based.
pub fn describe_error(err: &MoveError) -> String {
    match err {
        MoveError::IllegalColumn(_) => format!("Pick a column from 1 to {}", COLS),
        MoveError::FullColumn(col) => format!("Column {} is full!", col + 1),
        MoveError::GameOver => "Game over! Press N for a new game.".to_string(),
        MoveError::OutOfTurn(side) => format!("Waiting for {} to move", side.name()),
    }
}

/// Status line once a game has finished.
pub fn outcome_message(outcome: GameOutcome) -> String {
    format!("{} Press N for a new game.", outcome.describe())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_error_uses_display_columns() {
        assert_eq!(describe_error(&MoveError::FullColumn(0)), "Column 1 is full!");
        assert_eq!(
            describe_error(&MoveError::IllegalColumn(-1)),
            "Pick a column from 1 to 7"
        );
    }

    #[test]
    fn test_outcome_message() {
        assert_eq!(
            outcome_message(GameOutcome::Draw),
            "It's a draw! Press N for a new game."
        );
    }
}
