//! The computer's move selection: extend or block any three-in-a-row that
//! can be reached this turn, otherwise play a random open column.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::opponent::Opponent;
use super::random::random_open_column;
use crate::game::win::{is_run, Direction};
use crate::game::{Board, Side, COLS, ROWS};

/// Length of a run worth reacting to.
const RUN: usize = 3;

/// A playable cell that would turn a three-in-a-row into four.
///
/// When `owner` is the computer, playing it wins; when it is the player,
/// playing it blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    pub row: usize,
    pub column: usize,
    pub owner: Side,
    pub direction: Direction,
}

/// Find every immediately playable cell that extends a horizontal or vertical
/// run of three, for both sides.
///
/// Each horizontal run is checked on both ends independently, so a run
/// touching the board edge is handled by the same code as one in the middle.
pub fn find_threats(board: &Board) -> Vec<Threat> {
    let mut threats = Vec::new();

    for owner in [Side::Player, Side::Computer] {
        let cell = owner.to_cell();

        // Row runs: look one cell past each end
        for row in 0..ROWS {
            for col in 0..=COLS - RUN {
                if !is_run(board, row, col, Direction::Horizontal, RUN, cell) {
                    continue;
                }
                let ends = [col.checked_sub(1), Some(col + RUN)];
                for column in ends.into_iter().flatten() {
                    if board.is_playable(row, column) {
                        threats.push(Threat {
                            row,
                            column,
                            owner,
                            direction: Direction::Horizontal,
                        });
                    }
                }
            }
        }

        // Column runs: only the cell directly above the top token can extend
        for col in 0..COLS {
            for top in 1..=ROWS - RUN {
                if is_run(board, top, col, Direction::Vertical, RUN, cell)
                    && board.is_playable(top - 1, col)
                {
                    threats.push(Threat {
                        row: top - 1,
                        column: col,
                        owner,
                        direction: Direction::Vertical,
                    });
                }
            }
        }
    }

    threats
}

/// Distinct columns that answer at least one threat, left to right.
pub fn threat_columns(board: &Board) -> Vec<usize> {
    let mut columns: Vec<usize> = find_threats(board).iter().map(|t| t.column).collect();
    columns.sort_unstable();
    columns.dedup();
    columns
}

/// Computer opponent that completes or blocks threes and otherwise plays at
/// random.
///
/// Both token kinds are scanned the same way: a reachable extension of either
/// side's three is played, which wins for the computer's own runs and blocks
/// the player's. When several columns qualify one is picked uniformly at
/// random; with none, any open column is picked uniformly at random.
pub struct HeuristicOpponent {
    rng: StdRng,
}

impl HeuristicOpponent {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic opponent for tests and reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        HeuristicOpponent { rng }
    }
}

impl Default for HeuristicOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for HeuristicOpponent {
    fn choose_column(&mut self, board: &Board) -> usize {
        let candidates = threat_columns(board);
        if !candidates.is_empty() {
            let column = candidates[self.rng.random_range(0..candidates.len())];
            debug!(?candidates, column, "answering three-in-a-row");
            return column;
        }

        random_open_column(board, &mut self.rng).expect("No open columns available")
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
