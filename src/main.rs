use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use lib_2048::{
    ai::{Ai, GreedyAi, RandomAi},
    max_tile, Session, SessionConfig,
};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Random,
    Greedy,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Play headless games of 2048 with a simple move policy")]
struct Cli {
    /// TOML file with session settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for tile spawns and the random policy (omit for entropy)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Number of games to play back to back
    #[arg(long, value_name = "N", default_value_t = 1)]
    games: u32,

    #[arg(long, value_enum, default_value_t = Policy::Greedy)]
    policy: Policy,

    /// Board side length, overriding the config file
    #[arg(long, value_name = "N")]
    size: Option<usize>,

    /// Undo depth, overriding the config file
    #[arg(long, value_name = "N")]
    undo_depth: Option<usize>,

    /// Stop a game after this many accepted moves
    #[arg(long, value_name = "N")]
    max_moves: Option<u64>,
}

fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SessionConfig::from_toml_str(&contents)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SessionConfig::default(),
    };

    if let Some(size) = cli.size {
        config.size = size;
    }
    if let Some(undo_depth) = cli.undo_depth {
        config.undo_depth = undo_depth;
    }

    config.validate()?;

    Ok(config)
}

fn play_game(
    mut session: Session<ChaCha8Rng>,
    ai: &mut dyn Ai,
    max_moves: Option<u64>,
) -> (Session<ChaCha8Rng>, u64) {
    let mut moves = 0;

    while max_moves.map_or(true, |max| moves < max) {
        let Some(direction) = ai.get_next_move(session.board()) else {
            break;
        };

        let (next, report) = session.play(direction);
        if report.is_none() {
            warn!("policy chose {direction}, which changes nothing");
            break;
        }

        session = next;
        moves += 1;
    }

    (session, moves)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut ai: Box<dyn Ai> = match cli.policy {
        Policy::Random => Box::new(RandomAi::new(ChaCha8Rng::from_rng(&mut rng)?)),
        Policy::Greedy => Box::new(GreedyAi),
    };

    let mut best_score = 0;

    for game in 1..=cli.games {
        let session = Session::new(config.clone(), ChaCha8Rng::from_rng(&mut rng)?)?
            .with_best_score(best_score);

        let (session, moves) = play_game(session, ai.as_mut(), cli.max_moves);
        best_score = session.best_score();

        info!(
            "game {game}: {:?} after {moves} moves, score {}, max tile {}, best {}",
            session.status(),
            session.score(),
            max_tile(session.board()),
            best_score
        );
        info!("final board:\n{}", session.board());
    }

    Ok(())
}
