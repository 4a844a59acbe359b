use clap::{Parser, ValueEnum};
use env_logger::Env;
use othello_engine::agent::ai::{AIConfig, AIType, Difficulty};
use othello_engine::game_repr::{Color, GameError, Result};
use othello_engine::orchestrator::{play_series, GameConfig, Orchestrator};

/// Side that moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum First {
    Black,
    White,
}

impl From<First> for Color {
    fn from(first: First) -> Self {
        match first {
            First::Black => Color::Black,
            First::White => Color::White,
        }
    }
}

/// Play Othello between humans and computer players.
#[derive(Parser)]
#[command(author, version, about = "Othello with minimax, heuristic and random players")]
struct Cli {
    /// Board rows (even, 4 to 18)
    #[arg(long, default_value_t = 8)]
    rows: usize,

    /// Board columns (even, 4 to 18)
    #[arg(long, default_value_t = 8)]
    cols: usize,

    /// Side that moves first
    #[arg(long, value_enum, default_value_t = First::Black)]
    first: First,

    /// Black player: random, heuristic, minimax or human
    #[arg(long, default_value = "human", value_parser = AIType::from_name)]
    black: AIType,

    /// White player: random, heuristic, minimax or human
    #[arg(long, default_value = "minimax", value_parser = AIType::from_name)]
    white: AIType,

    /// Minimax strength: easy, medium, hard or expert
    #[arg(short, long, default_value = "hard", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// Seed for the random and heuristic players
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of games; more than one plays a parallel series
    #[arg(short, long, default_value_t = 1)]
    games: u32,
}

fn parse_difficulty(name: &str) -> std::result::Result<Difficulty, String> {
    Difficulty::from_name(name).ok_or_else(|| format!("unknown difficulty '{name}'"))
}

fn player_config(ai_type: AIType, difficulty: Difficulty, seed: Option<u64>) -> AIConfig {
    AIConfig {
        ai_type,
        difficulty,
        seed,
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GameConfig {
        rows: cli.rows,
        cols: cli.cols,
        first_turn: cli.first.into(),
    };
    let black = player_config(cli.black, cli.difficulty, cli.seed);
    let white = player_config(cli.white, cli.difficulty, cli.seed.map(|s| s.wrapping_add(1)));

    if cli.games > 1 {
        let stats = play_series(&config, black, white, cli.games, cli.seed)?;
        println!("{stats}");
        return Ok(());
    }

    let summary = Orchestrator::new(&config, black.create_player(), white.create_player())?.play();
    println!("{}", summary.final_position);
    println!(
        "{} (Black {} - White {})",
        summary.result, summary.scores.0, summary.scores.1
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        let code = match e {
            GameError::InvalidDimensions { .. } | GameError::InvalidPlayer(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
