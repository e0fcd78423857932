//! Terminal front-end: command parsing, text and JSON renderers, and the
//! read-eval loop that feeds typed commands to a `GameController`.

#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::warn;

use crate::{
    board::{Board, Cell},
    common::Position,
    config::{HEIGHT, WIDTH},
    controller::GameController,
    game::Status,
    player::PlayerId,
    renderer::{Event, Renderer},
};

/// A parsed line of user input. Columns are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Drop(usize),
    Hover(usize),
    Unhover(usize),
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  1-7 | drop N     drop a piece into column N
  hover N | h N    preview where a piece would land in column N
  unhover N | u N  clear the preview for column N
  reset | r        start a new game
  help | ?         show this help
  quit | q         leave";

fn parse_column(input: Option<&str>) -> Result<usize, String> {
    let text = input.ok_or_else(|| format!("Missing column number - must be 1-{}", WIDTH))?;
    let column: usize = text
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 1-{}", text, WIDTH))?;
    if column == 0 || column > WIDTH {
        return Err(format!("Column {} out of bounds - must be 1-{}", column, WIDTH));
    }
    Ok(column - 1)
}

/// Parse one line of input. A bare number is a drop.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let word = parts.next().ok_or_else(|| "Empty input".to_string())?;
    let command = match word.to_ascii_lowercase().as_str() {
        "reset" | "r" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        "drop" | "d" => Command::Drop(parse_column(parts.next())?),
        "hover" | "h" => Command::Hover(parse_column(parts.next())?),
        "unhover" | "u" => Command::Unhover(parse_column(parts.next())?),
        _ => Command::Drop(parse_column(Some(word))?),
    };
    if let Some(extra) = parts.next() {
        return Err(format!("Unexpected '{}' after command", extra));
    }
    Ok(command)
}

/// Draw the board with a column header. `ghost` marks a previewed drop with
/// the lowercase piece symbol.
pub fn render_frame(board: &Board, ghost: Option<(Position, PlayerId)>) -> String {
    let border = "═".repeat(2 * WIDTH + 1);
    let mut frame = String::new();
    frame.push_str(&format!("    ╔{}╗\n", border));
    frame.push_str("    ║");
    for column in 0..WIDTH {
        frame.push_str(&format!(" {}", column + 1));
    }
    frame.push_str(" ║\n");
    frame.push_str(&format!("    ╠{}╣\n", border));
    for row in 0..HEIGHT {
        frame.push_str("    ║");
        for column in 0..WIDTH {
            let ch = match ghost {
                Some(((r, c), player)) if r == row && c == column => {
                    player.symbol().to_ascii_lowercase()
                }
                _ => match board.cell(row, column) {
                    Ok(Cell::Occupied(player)) => player.symbol(),
                    _ => '.',
                },
            };
            frame.push(' ');
            frame.push(ch);
        }
        frame.push_str(" ║\n");
    }
    frame.push_str(&format!("    ╚{}╝", border));
    frame
}

/// Writer wrapper that keeps the first I/O error instead of panicking,
/// since renderer callbacks cannot return errors.
struct Sink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Sink<W> {
    fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn write_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = f(&mut self.out).and_then(|()| self.out.flush()) {
            self.error = Some(e);
        }
    }
}

/// A renderer writing to an output stream, which may fail.
pub trait WriteRenderer: Renderer {
    /// First write error since the last call, if any.
    fn take_error(&mut self) -> Option<io::Error>;
}

/// Renderer drawing the board as text after every change.
pub struct TerminalRenderer<W: Write> {
    sink: Sink<W>,
    board: Board,
    ghost: Option<(Position, PlayerId)>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            sink: Sink::new(out),
            board: Board::new(),
            ghost: None,
        }
    }

    /// The board as this renderer has been told about it.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_inner(self) -> W {
        self.sink.out
    }

    fn draw(&mut self) {
        let frame = render_frame(&self.board, self.ghost);
        self.sink.write_with(|out| writeln!(out, "{}", frame));
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn on_piece_dropped(&mut self, row: usize, column: usize, player: PlayerId) {
        match self.board.drop_piece(column, player) {
            Ok(landed) if landed == row => {}
            Ok(landed) => warn!("renderer board out of sync: expected row {}, got {}", row, landed),
            Err(e) => warn!("renderer board out of sync: {}", e),
        }
        self.ghost = None;
        self.draw();
        self.sink.write_with(|out| {
            writeln!(out, "{} ({}) dropped into column {}.", player, player.symbol(), column + 1)
        });
    }

    fn on_hover_column(&mut self, column: usize, target_row: Option<usize>, player: PlayerId) {
        match target_row {
            Some(row) => {
                self.ghost = Some(((row, column), player));
                self.draw();
            }
            None => {
                self.ghost = None;
                self.sink
                    .write_with(|out| writeln!(out, "Column {} is full.", column + 1));
            }
        }
    }

    fn on_hover_end(&mut self, column: usize) {
        if matches!(self.ghost, Some(((_, ghost_col), _)) if ghost_col == column) {
            self.ghost = None;
            self.draw();
        }
    }

    fn on_game_over(&mut self, status: Status) {
        let message = match status {
            Status::Won(player) => format!("🏆  {} won!  🏆", player),
            Status::Tied => "It's a Tie!".to_string(),
            Status::InProgress => return,
        };
        self.sink.write_with(|out| writeln!(out, "\n{}\n", message));
    }

    fn on_reset(&mut self) {
        self.board = Board::new();
        self.ghost = None;
        self.sink.write_with(|out| writeln!(out, "New game."));
        self.draw();
    }
}

impl<W: Write> WriteRenderer for TerminalRenderer<W> {
    fn take_error(&mut self) -> Option<io::Error> {
        self.sink.error.take()
    }
}

/// Renderer writing each notification as one line of JSON.
pub struct JsonRenderer<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            sink: Sink::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn on_event(&mut self, event: Event) {
        self.sink.write_with(|out| {
            serde_json::to_writer(&mut *out, &event)?;
            writeln!(out)
        });
    }
}

impl<W: Write> WriteRenderer for JsonRenderer<W> {
    fn take_error(&mut self) -> Option<io::Error> {
        self.sink.error.take()
    }
}

/// Forward a game command to the controller. `Help` and `Quit` are handled
/// by the caller and do nothing here.
pub fn dispatch_command<R: Renderer>(controller: &mut GameController<R>, command: Command) {
    match command {
        Command::Drop(column) => {
            controller.column_selected(column);
        }
        Command::Hover(column) => controller.hover_column(column),
        Command::Unhover(column) => controller.hover_end(column),
        Command::Reset => controller.reset(),
        Command::Help | Command::Quit => {}
    }
}

fn prompt<R: Renderer, N: Write>(
    controller: &GameController<R>,
    notices: &mut N,
) -> io::Result<()> {
    let state = controller.state();
    if state.is_over() {
        writeln!(notices, "Game over. Type 'reset' to play again or 'quit' to leave.")?;
    } else {
        let player = state.current_player();
        write!(notices, "{} ({}), choose a column [1-{}]: ", player, player.symbol(), WIDTH)?;
    }
    notices.flush()
}

/// Run one interactive session: start a new game, then apply each input line
/// until `quit` or end of input. Help text, parse errors and prompts go to
/// `notices`; the renderer owns everything else.
pub fn run_session<R, I, N>(
    controller: &mut GameController<R>,
    mut input: I,
    notices: &mut N,
) -> anyhow::Result<()>
where
    R: WriteRenderer,
    I: BufRead,
    N: Write,
{
    controller.reset();
    if let Some(err) = controller.renderer_mut().take_error() {
        return Err(err).context("failed to write game output");
    }
    prompt(controller, notices).context("failed to write prompt")?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).context("failed to read input")? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and fail to parse like any typo.
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(notices, "{}", HELP)?,
            Ok(command) => dispatch_command(controller, command),
            Err(msg) => writeln!(notices, "{}", msg)?,
        }
        if let Some(err) = controller.renderer_mut().take_error() {
            return Err(err).context("failed to write game output");
        }
        prompt(controller, notices).context("failed to write prompt")?;
    }
    Ok(())
}
