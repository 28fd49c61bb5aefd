//! Computer opponents: the three-in-a-row heuristic and its random fallback.

pub mod heuristic;
mod opponent;
mod random;

pub use heuristic::{HeuristicOpponent, Threat};
pub use opponent::Opponent;
pub use random::RandomOpponent;
