use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::opponent::Opponent;
use crate::game::Board;

/// Uniformly random column among the ones that are not full.
pub(crate) fn random_open_column<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let open = board.open_columns();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

/// An opponent that selects uniformly at random from open columns.
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new() -> Self {
        RandomOpponent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomOpponent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose_column(&mut self, board: &Board) -> usize {
        random_open_column(board, &mut self.rng).expect("No open columns available")
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Side, COLS, ROWS};

    #[test]
    fn test_random_opponent_selects_open_column() {
        let mut opponent = RandomOpponent::new();
        let board = Board::from_diagram([
            "X_O_X_O",
            "O_X_O_X",
            "X_O_X_O",
            "O_X_O_X",
            "X_O_X_O",
            "O_X_O_X",
        ]);

        for _ in 0..100 {
            let col = opponent.choose_column(&board);
            assert!(!board.is_column_full(col), "column {} is full", col);
        }
    }

    #[test]
    fn test_random_open_column_on_full_board() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new();
        for col in 0..COLS {
            for i in 0..ROWS {
                let side = if i % 2 == 0 { Side::Player } else { Side::Computer };
                crate::game::moves::drop(&mut board, col as i64, side).unwrap();
            }
        }
        assert_eq!(random_open_column(&board, &mut rng), None);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomOpponent::with_seed(42);
        let mut b = RandomOpponent::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.choose_column(&board), b.choose_column(&board));
        }
    }

    #[test]
    fn test_random_opponent_plays_full_game() {
        let mut opponent = RandomOpponent::with_seed(3);
        let mut player = RandomOpponent::with_seed(4);
        let mut state = GameState::initial();

        while !state.is_terminal() {
            let col = player.choose_column(state.board());
            let turn = state.apply_player_move(col as i64).unwrap();
            if !turn.outcome.is_terminal() {
                state.apply_computer_turn(&mut opponent).unwrap();
            }
        }

        assert!(state.is_terminal());
    }

    #[test]
    fn test_random_opponent_name() {
        let opponent = RandomOpponent::new();
        assert_eq!(opponent.name(), "Random");
    }
}
