//! Line-based play over stdin/stdout, for scripts and terminals without
//! raw mode. Each line is a column number (1-7), `new`, or `quit`.

use std::io::{self, BufRead, Write};

use tracing::warn;

use super::{describe_error, outcome_message};
use crate::engine::Engine;
use crate::game::{Board, COLS, ROWS};
use crate::save::SaveManager;

/// Draw the board as text, top row first, with 1-based column numbers below.
pub fn render_text(board: &Board) -> String {
    let mut out = String::new();
    for row in board.cells().iter().take(ROWS) {
        let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    let numbers: Vec<String> = (1..=COLS).map(|c| c.to_string()).collect();
    out.push_str(&numbers.join(" "));
    out.push('\n');
    out
}

enum Command {
    Drop(i64),
    NewGame,
    Quit,
    Unknown,
}

fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "n" | "new" => Command::NewGame,
        other => match other.parse::<i64>() {
            Ok(n) => Command::Drop(n.saturating_sub(1)),
            Err(_) => Command::Unknown,
        },
    })
}

/// Run until `quit` or end of input. Saving on exit is left to the caller.
pub fn run<R: BufRead, W: Write>(
    engine: &mut Engine,
    saves: &SaveManager,
    input: R,
    mut output: W,
) -> io::Result<()> {
    write!(output, "{}", render_text(engine.state().board()))?;
    prompt(engine, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::NewGame => {
                engine.new_game();
                discard(saves);
                writeln!(output, "New game started!")?;
            }
            Command::Unknown => {
                writeln!(output, "Enter a column from 1 to {}, 'new' or 'quit'", COLS)?;
                continue;
            }
            Command::Drop(column) => match engine.play_round(column) {
                Ok(round) => {
                    if let Some(reply) = round.computer {
                        writeln!(output, "Computer plays {}", reply.placement.column + 1)?;
                    }
                    if round.outcome().is_terminal() {
                        write!(output, "{}", render_text(engine.state().board()))?;
                        writeln!(output, "{}", outcome_message(round.outcome()))?;
                        discard(saves);
                        continue;
                    }
                }
                Err(e) => {
                    writeln!(output, "{}", describe_error(&e))?;
                    continue;
                }
            },
        }

        write!(output, "{}", render_text(engine.state().board()))?;
        prompt(engine, &mut output)?;
    }

    output.flush()
}

fn prompt<W: Write>(engine: &Engine, output: &mut W) -> io::Result<()> {
    if !engine.state().is_terminal() {
        writeln!(output, "Your move (1-{}):", COLS)?;
    }
    Ok(())
}

fn discard(saves: &SaveManager) {
    if let Err(e) = saves.discard() {
        warn!(error = %e, "could not remove saved game");
    }
}
