use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::warn;

use super::{describe_error, outcome_message};
use crate::engine::Engine;
use crate::error::SaveError;
use crate::game::{GameOutcome, Placement, COLS};
use crate::save::SaveManager;

pub struct App {
    engine: Engine,
    saves: SaveManager,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    last_moves: Vec<Placement>,
    tick_rate: Duration,
}

impl App {
    pub fn new(engine: Engine, saves: SaveManager, start_column: usize, tick_rate: Duration) -> Self {
        App {
            engine,
            saves,
            selected_column: start_column.min(COLS - 1),
            should_quit: false,
            message: None,
            last_moves: Vec::new(),
            tick_rate,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Show a one-off message, e.g. that a saved game was restored.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Save an unfinished game, or clear the save if the game is over.
    pub fn shutdown(&self) -> Result<bool, SaveError> {
        self.saves.save(self.engine.state())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column as i64);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as i64 - '1' as i64;
                if column < COLS as i64 {
                    self.selected_column = column as usize;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('n') | KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    fn new_game(&mut self) {
        self.engine.new_game();
        self.last_moves.clear();
        if let Err(e) = self.saves.discard() {
            warn!(error = %e, "could not remove saved game");
        }
        self.message = Some("New game started!".to_string());
    }

    /// Drop the player's token, then let the computer answer
    fn drop_piece(&mut self, column: i64) {
        match self.engine.play_round(column) {
            Ok(round) => {
                self.last_moves = std::iter::once(round.player)
                    .chain(round.computer)
                    .map(|turn| turn.placement)
                    .collect();

                let outcome = round.outcome();
                if outcome != GameOutcome::InProgress {
                    self.message = Some(outcome_message(outcome));
                    if let Err(e) = self.saves.discard() {
                        warn!(error = %e, "could not remove saved game");
                    }
                }
            }
            Err(e) => {
                self.message = Some(describe_error(&e));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.last_moves,
            &self.message,
        );
    }
}
