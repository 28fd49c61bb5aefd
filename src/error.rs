use std::path::PathBuf;

use crate::game::Side;

/// Raw cell access outside the 6x7 grid. Callers pre-validate, so hitting this
/// is a bug rather than bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },
}

/// Rejected moves. The game state is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} does not exist, pick a column between 0 and 6")]
    IllegalColumn(i64),

    #[error("column {0} is full")]
    FullColumn(usize),

    #[error("the game is over")]
    GameOver,

    #[error("waiting for {} to move", .0.name())]
    OutOfTurn(Side),
}

/// Errors that can occur while saving or restoring a game.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to read saved game from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write saved game to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse saved game from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid saved game: {0}")]
    Format(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::IllegalColumn(7).to_string(),
            "column 7 does not exist, pick a column between 0 and 6"
        );
        assert_eq!(MoveError::FullColumn(2).to_string(), "column 2 is full");
        assert_eq!(
            MoveError::OutOfTurn(Side::Computer).to_string(),
            "waiting for Computer to move"
        );
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OutOfBounds { row: 6, column: 0 };
        assert_eq!(err.to_string(), "cell (6, 0) is outside the board");
    }

    #[test]
    fn test_save_error_display() {
        let err = SaveError::Format("expected 6 rows, found 5".to_string());
        assert_eq!(
            err.to_string(),
            "invalid saved game: expected 6 rows, found 5"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.tick_rate_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.tick_rate_ms must be > 0"
        );
    }
}
