//! Save-on-exit / restore-on-startup of an unfinished game.

mod format;
mod manager;

pub use format::{SavedGame, SAVE_FORMAT_VERSION};
pub use manager::{SaveConfig, SaveManager};
