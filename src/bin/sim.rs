use clap::Parser;
use connect_four::{GameController, PlayerId, Renderer, Status};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Play random legal games through the controller and report the outcomes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to play.
    games: usize,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Default)]
struct Tally {
    player1_wins: usize,
    player2_wins: usize,
    ties: usize,
    moves: usize,
}

impl Renderer for Tally {
    fn on_piece_dropped(&mut self, _row: usize, _column: usize, _player: PlayerId) {
        self.moves += 1;
    }

    fn on_game_over(&mut self, status: Status) {
        match status {
            Status::Won(PlayerId::Player1) => self.player1_wins += 1,
            Status::Won(PlayerId::Player2) => self.player2_wins += 1,
            Status::Tied => self.ties += 1,
            Status::InProgress => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    connect_four::init_logging();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut controller = GameController::new(Tally::default());
    for game in 0..args.games {
        if game > 0 {
            controller.reset();
        }
        while !controller.state().is_over() {
            let legal: Vec<usize> = controller.state().legal_columns().collect();
            let column = legal[rng.random_range(0..legal.len())];
            if controller.column_selected(column).is_none() {
                anyhow::bail!("legal column {} was refused", column);
            }
        }
    }

    let tally = controller.into_renderer();
    let average_moves = if args.games == 0 {
        0.0
    } else {
        tally.moves as f64 / args.games as f64
    };
    let result = json!({
        "games": args.games,
        "player1_wins": tally.player1_wins,
        "player2_wins": tally.player2_wins,
        "ties": tally.ties,
        "average_moves": average_moves,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
