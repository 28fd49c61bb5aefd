//! # Connect Four
//!
//! Connect Four against a heuristic computer opponent. The computer completes
//! or blocks any three-in-a-row it can reach and otherwise plays at random.
//! Play happens in a terminal UI built with Ratatui, or line by line in
//! headless mode; an unfinished game is saved on exit and restored on start.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, gravity drops, win detection, turn order
//! - [`ai`] — Opponent trait, three-in-a-row heuristic, random fallback
//! - [`engine`] — The session API front ends call into
//! - [`save`] — Saved-game format and save/restore/discard
//! - [`ui`] — Terminal UI and headless runner
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod save;
pub mod ui;
