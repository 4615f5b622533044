use std::{env, error::Error};

use minefield::{Difficulty, GameParams, MineField, Outcome, Pos};
use rand::Rng;
use tracing::{info, warn};

/// Board configuration from the environment: either a named difficulty or
/// custom dimensions, falling back to the beginner board.
fn read_params() -> GameParams {
    if let Ok(name) = env::var("MINEFIELD_DIFFICULTY") {
        for difficulty in Difficulty::ALL {
            if name.eq_ignore_ascii_case(difficulty.name()) {
                info!("Using {} difficulty", difficulty.name());
                return difficulty.into();
            }
        }
        warn!("Unknown difficulty '{}', using custom parameters", name);
    }

    let defaults = GameParams::default();
    GameParams {
        width: env::var("MINEFIELD_WIDTH")
            .unwrap_or_else(|_| defaults.width.to_string())
            .parse()
            .unwrap_or(defaults.width),
        height: env::var("MINEFIELD_HEIGHT")
            .unwrap_or_else(|_| defaults.height.to_string())
            .parse()
            .unwrap_or(defaults.height),
        bombs: env::var("MINEFIELD_BOMBS")
            .unwrap_or_else(|_| defaults.bombs.to_string())
            .parse()
            .unwrap_or(defaults.bombs),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    info!("🧨 Starting minefield demo game");

    let params = read_params();
    let mut field = MineField::new(params)?;
    println!("{}", serde_json::to_string(&field.board_view())?);

    let mut rng = rand::rng();
    let mut moves = 0usize;

    // Random self-play: every action and its diff go to stdout as one JSON
    // line, the way a rendering frontend would consume them.
    let outcome = loop {
        if moves >= 10_000 {
            break Outcome::Continue;
        }
        moves += 1;

        let pos = Pos {
            x: rng.random_range(0..field.width()),
            y: rng.random_range(0..field.height()),
        };

        // Mostly uncover, with the occasional marker to exercise the cycle.
        let outcome = if rng.random_ratio(1, 8) {
            let result = field.flag_at(pos);
            println!("{}", serde_json::to_string(&result)?);
            result.outcome
        } else {
            let result = field.uncover_at(pos);
            println!("{}", serde_json::to_string(&result)?);
            result.outcome
        };

        field.tick();

        if outcome != Outcome::Continue {
            break outcome;
        }
    };

    match outcome {
        Outcome::Won => info!(
            "🎉 Won after {} moves and {} seconds",
            moves,
            field.elapsed_seconds()
        ),
        Outcome::Lost => info!(
            "💥 Lost after {} moves and {} seconds",
            moves,
            field.elapsed_seconds()
        ),
        Outcome::Continue => warn!("Demo stopped after {} moves without finishing", moves),
    }

    Ok(())
}
