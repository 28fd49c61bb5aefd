use tracing::warn;

use crate::ai::{HeuristicOpponent, Opponent};
use crate::error::{BoardError, MoveError, SaveError};
use crate::game::{Cell, GameOutcome, GameState, Side, Turn};
use crate::save::SavedGame;

/// A player move together with the computer's reply. `computer` is `None`
/// when the player's move ended the game or the opponent could not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Turn,
    pub computer: Option<Turn>,
}

impl Round {
    /// Outcome after the last move of the round.
    pub fn outcome(&self) -> GameOutcome {
        self.computer.unwrap_or(self.player).outcome
    }
}

/// One human-vs-computer session. This is what front ends talk to.
pub struct Engine {
    state: GameState,
    opponent: Box<dyn Opponent>,
}

impl Engine {
    pub fn new(opponent: Box<dyn Opponent>) -> Self {
        Self::with_state(GameState::initial(), opponent)
    }

    /// Engine with the heuristic opponent, seeded when `seed` is given.
    pub fn heuristic(seed: Option<u64>) -> Self {
        let opponent = match seed {
            Some(seed) => HeuristicOpponent::with_seed(seed),
            None => HeuristicOpponent::new(),
        };
        Self::new(Box::new(opponent))
    }

    pub fn with_state(state: GameState, opponent: Box<dyn Opponent>) -> Self {
        Engine { state, opponent }
    }

    /// Rebuild a session from a saved game.
    pub fn restore(saved: &SavedGame, opponent: Box<dyn Opponent>) -> Result<Self, SaveError> {
        Ok(Self::with_state(saved.to_state()?, opponent))
    }

    /// Export the full game for the persistence layer.
    pub fn snapshot(&self, saved_at: u64) -> SavedGame {
        SavedGame::from_state(&self.state, saved_at)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome()
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        self.state.cell_at(row, column)
    }

    /// Clear the board and hand the first move to the player.
    pub fn new_game(&mut self) {
        self.state.reset();
    }

    pub fn player_move(&mut self, column: i64) -> Result<Turn, MoveError> {
        self.state.apply_player_move(column).inspect_err(|e| {
            warn!(column, error = %e, "player move rejected");
        })
    }

    /// Let the computer move. Only valid while the game is in progress and
    /// the player has just moved.
    pub fn computer_move(&mut self) -> Result<Turn, MoveError> {
        self.state.apply_computer_turn(self.opponent.as_mut())
    }

    /// Let the computer catch up if a restored game was left on its turn.
    pub fn resume(&mut self) -> Result<Option<Turn>, MoveError> {
        if self.state.is_terminal() || self.state.side_to_move() != Side::Computer {
            return Ok(None);
        }
        self.computer_move().map(Some)
    }

    /// Play `column` for the player and, unless that ended the game, the
    /// computer's reply. Only a rejected player move is an error. If the
    /// opponent's reply is rejected the game stays on the computer's turn
    /// and [`Engine::resume`] can retry it.
    pub fn play_round(&mut self, column: i64) -> Result<Round, MoveError> {
        let player = self.player_move(column)?;
        let computer = if player.outcome.is_terminal() {
            None
        } else {
            self.computer_move()
                .inspect_err(|e| warn!(error = %e, "computer move rejected"))
                .ok()
        };
        Ok(Round { player, computer })
    }
}
