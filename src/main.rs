use std::io;

use clap::Parser;
use connect_four::{init_logging, run_session, GameController, JsonRenderer, TerminalRenderer};

#[derive(Parser)]
#[command(author, version, about = "Two-player Connect Four in the terminal", long_about = None)]
struct Cli {
    /// Emit notifications as JSON lines on stdout instead of drawing the board.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let input = io::stdin().lock();

    if cli.json {
        let mut controller = GameController::new(JsonRenderer::new(io::stdout()));
        run_session(&mut controller, input, &mut io::stderr())
    } else {
        let mut controller = GameController::new(TerminalRenderer::new(io::stdout()));
        run_session(&mut controller, input, &mut io::stdout())
    }
}
