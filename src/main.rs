use anyhow::{Context, Result};
use canvas_snake::game::{Difficulty, FoodSpawner, GameConfig, GameLoop, HighScore};
use canvas_snake::modes::PlayMode;
use canvas_snake::render::Theme;
use canvas_snake::store::JsonFileStore;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Starting difficulty (tick speed)
    #[arg(long, default_value = "medium")]
    difficulty: Level,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,

    /// File the high score is kept in
    #[arg(long, default_value = ".snake_high_score.json")]
    high_score_file: PathBuf,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Level {
    /// 150ms per tick
    Easy,
    /// 75ms per tick
    Medium,
    /// 40ms per tick
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

/// Send tracing output to a file; the terminal belongs to the game
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canvas_snake=info,snake=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let store = JsonFileStore::open(&cli.high_score_file).with_context(|| {
        format!("Failed to open high score file: {:?}", cli.high_score_file)
    })?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = GameConfig::default();
    let game = GameLoop::new(
        config.clone(),
        cli.difficulty.into(),
        Theme::from_dark(cli.dark),
        FoodSpawner::new(config.grid.unit, rng),
        HighScore::load(Box::new(store)),
    );

    tracing::info!(seed = ?cli.seed, dark = cli.dark, "Starting snake");

    let mut play_mode = PlayMode::new(game);
    play_mode.run().await?;

    Ok(())
}
