use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_replay::games;
use chess_replay::replay::{
    AutoplayScheduler, GameDefinition, ReplayEngine, DEFAULT_AUTOPLAY_INTERVAL,
};
use chess_replay::ui;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SampleGame {
    Immortal,
    Amateur,
}

#[derive(Parser, Debug)]
#[command(name = "chess-replay", about = "Step through annotated chess games in the terminal")]
struct Args {
    /// Bundled game to view
    #[arg(long, value_enum, default_value = "immortal")]
    game: SampleGame,

    /// Load a game definition from a JSON file instead of a bundled game
    #[arg(long, conflicts_with = "game")]
    file: Option<PathBuf>,

    /// Autoplay interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_AUTOPLAY_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    /// Start in autoplay
    #[arg(long)]
    autoplay: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let game = load_game(&args).context("loading game definition")?;
    info!(
        "[VIEWER] \"{}\", {} plies, autoplay every {}ms",
        game.title,
        game.moves.len(),
        args.interval_ms
    );

    let engine = ReplayEngine::new(game);
    let scheduler = AutoplayScheduler::new(Duration::from_millis(args.interval_ms));
    ui::run(engine, scheduler, args.autoplay).context("viewer session failed")?;
    Ok(())
}

fn load_game(args: &Args) -> anyhow::Result<GameDefinition> {
    if let Some(path) = &args.file {
        return Ok(GameDefinition::load(path)?);
    }
    let game = match args.game {
        SampleGame::Immortal => games::immortal_game()?,
        SampleGame::Amateur => games::amateur_game()?,
    };
    Ok(game)
}
