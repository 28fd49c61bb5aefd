use tracing::{debug, info};

use super::board::{Board, Cell};
use super::moves::{self, Placement};
use super::side::Side;
use super::win;
use crate::ai::Opponent;
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    PlayerWin,
    ComputerWin,
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Message shown to the human when the game ends.
    pub fn describe(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "Game in progress",
            GameOutcome::PlayerWin => "You win!",
            GameOutcome::ComputerWin => "Computer wins!",
            GameOutcome::Draw => "It's a draw!",
        }
    }
}

/// What a single accepted move did: the filled cell and the game's outcome
/// right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub placement: Placement,
    pub outcome: GameOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    outcome: GameOutcome,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            side_to_move: Side::Player, // Player starts
            outcome: GameOutcome::InProgress,
        }
    }

    /// Rebuild a game from a board, e.g. one read back from a save file.
    ///
    /// Returns `None` if the token counts cannot come from alternating play
    /// with the player moving first.
    pub fn from_board(board: Board) -> Option<Self> {
        let player = board.count(Cell::Player);
        let computer = board.count(Cell::Computer);
        let side_to_move = if player == computer {
            Side::Player
        } else if player == computer + 1 {
            Side::Computer
        } else {
            return None;
        };

        Some(GameState {
            board,
            side_to_move,
            outcome: win::outcome(&board),
        })
    }

    /// Side whose move the game is waiting for
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only cell access for renderers
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        self.board.get(row, column)
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Clear the board and start over with the player to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.side_to_move = Side::Player;
        self.outcome = GameOutcome::InProgress;
    }

    /// Drop a player token. A winning move ends the game before the computer
    /// gets a turn.
    pub fn apply_player_move(&mut self, column: i64) -> Result<Turn, MoveError> {
        self.apply(column, Side::Player)
    }

    /// Let `opponent` pick a column for the computer and play it.
    pub fn apply_computer_turn<O>(&mut self, opponent: &mut O) -> Result<Turn, MoveError>
    where
        O: Opponent + ?Sized,
    {
        self.ensure_turn(Side::Computer)?;
        let column = opponent.choose_column(&self.board);
        debug!(opponent = opponent.name(), column, "computer chose column");
        self.apply(column as i64, Side::Computer)
    }

    fn ensure_turn(&self, side: Side) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.side_to_move != side {
            return Err(MoveError::OutOfTurn(self.side_to_move));
        }
        Ok(())
    }

    fn apply(&mut self, column: i64, side: Side) -> Result<Turn, MoveError> {
        self.ensure_turn(side)?;

        let placement = moves::drop(&mut self.board, column, side)?;
        debug!(
            side = side.name(),
            row = placement.row,
            column = placement.column,
            "token placed"
        );

        self.outcome = win::outcome(&self.board);
        self.side_to_move = side.other();
        if self.outcome.is_terminal() {
            info!(outcome = ?self.outcome, "game over");
        }

        Ok(Turn {
            placement,
            outcome: self.outcome,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::HeuristicOpponent;
    use crate::game::{COLS, ROWS};

    /// Opponent that always answers with a fixed column.
    struct Fixed(usize);

    impl Opponent for Fixed {
        fn choose_column(&mut self, _board: &Board) -> usize {
            self.0
        }

        fn name(&self) -> &str {
            "Fixed"
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.side_to_move(), Side::Player);
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.board().open_columns().len(), COLS);
    }

    #[test]
    fn test_apply_player_move() {
        let mut state = GameState::initial();
        let turn = state.apply_player_move(3).unwrap();

        assert_eq!(turn.placement.row, ROWS - 1);
        assert_eq!(turn.placement.column, 3);
        assert_eq!(turn.outcome, GameOutcome::InProgress);
        assert_eq!(state.side_to_move(), Side::Computer);
        assert_eq!(state.cell_at(5, 3), Ok(Cell::Player));
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::initial();
        state.apply_player_move(0).unwrap();
        assert_eq!(
            state.apply_player_move(1),
            Err(MoveError::OutOfTurn(Side::Computer))
        );

        state.apply_computer_turn(&mut Fixed(6)).unwrap();
        assert_eq!(
            state.apply_computer_turn(&mut Fixed(6)),
            Err(MoveError::OutOfTurn(Side::Player))
        );
        assert_eq!(state.cell_at(5, 6), Ok(Cell::Computer));
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut state = GameState::initial();
        let before = state;
        assert_eq!(state.apply_player_move(-1), Err(MoveError::IllegalColumn(-1)));
        assert_eq!(state.apply_player_move(7), Err(MoveError::IllegalColumn(7)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_player_wins_on_bottom_row_and_computer_never_moves() {
        let mut state = GameState::initial();
        let mut computer = Fixed(6);
        let mut last = None;

        for col in 0..4 {
            let turn = state.apply_player_move(col).unwrap();
            last = Some(turn.outcome);
            if turn.outcome == GameOutcome::InProgress {
                // Computer stacks harmlessly in column 6
                state.apply_computer_turn(&mut computer).unwrap();
            }
        }

        assert_eq!(last, Some(GameOutcome::PlayerWin));
        assert_eq!(state.outcome(), GameOutcome::PlayerWin);
        assert_eq!(state.board().count(Cell::Computer), 3);
        assert_eq!(
            state.apply_computer_turn(&mut computer),
            Err(MoveError::GameOver)
        );
        assert_eq!(state.apply_player_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_computer_win() {
        let mut state = GameState::initial();
        let mut computer = Fixed(0);
        for col in [2, 3, 2] {
            state.apply_player_move(col).unwrap();
            state.apply_computer_turn(&mut computer).unwrap();
        }
        state.apply_player_move(4).unwrap();
        let turn = state.apply_computer_turn(&mut computer).unwrap();
        assert_eq!(turn.outcome, GameOutcome::ComputerWin);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_draw() {
        let full = Board::from_diagram([
            "XXOOXXO",
            "OOXXOOX",
            "XXOOXXO",
            "OOXXOOX",
            "XXOOXXO",
            "OOXXOOX",
        ]);
        // Take one computer token off the top so the last move fills the board
        let mut cells = *full.cells();
        cells[0][6] = Cell::Empty;
        let mut state = GameState::from_board(Board::from_cells(cells)).unwrap();
        assert_eq!(state.side_to_move(), Side::Computer);

        let turn = state.apply_computer_turn(&mut Fixed(6)).unwrap();
        assert_eq!(turn.outcome, GameOutcome::Draw);
        assert_eq!(state.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn test_from_board_rejects_unbalanced_counts() {
        let board = Board::from_diagram([
            "_______",
            "_______",
            "_______",
            "_______",
            "_______",
            "XX_____",
        ]);
        assert!(GameState::from_board(board).is_none());
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::initial();
        state.apply_player_move(2).unwrap();
        state.reset();
        assert_eq!(state, GameState::initial());
        assert!(!win::is_board_full(state.board()));
        assert!(!win::has_four_in_a_row(state.board(), Side::Player));
        assert!(!win::has_four_in_a_row(state.board(), Side::Computer));
    }

    #[test]
    fn test_heuristic_game_always_terminates() {
        let mut opponent = HeuristicOpponent::with_seed(11);
        let mut state = GameState::initial();
        let mut col = 0;

        while !state.is_terminal() {
            match state.apply_player_move(col % COLS as i64) {
                Ok(turn) if !turn.outcome.is_terminal() => {
                    state.apply_computer_turn(&mut opponent).unwrap();
                }
                Ok(_) | Err(MoveError::FullColumn(_)) => {}
                Err(e) => panic!("unexpected error: {e}"),
            }
            col += 1;
        }
        assert!(state.is_terminal());
    }
}
