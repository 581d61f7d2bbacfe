//! The Box Girl
//!
//! Main entry point for the game.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bg_cli::{App, Theme};
use bg_core::world::GameOptions;
use bg_core::{GameRng, GameState};

/// Escape a mansion haunted by the Box Girl
#[derive(Parser, Debug)]
#[command(name = "boxgirl")]
#[command(author, version, about = "The Box Girl - escape the mansion!", long_about = None)]
struct Args {
    /// Seed for a reproducible mansion and pursuer
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON file with rule overrides
    #[arg(short = 'o', long = "options")]
    options: Option<PathBuf>,

    /// Print the mansion layout before the first turn
    #[arg(short = 'm', long = "show-map")]
    show_map: bool,

    /// Never color the output
    #[arg(long = "no-color")]
    no_color: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = match &args.options {
        Some(path) => GameOptions::load(path).map_err(|err| {
            error!(error = %err, path = %path.display(), "options rejected");
            io::Error::new(io::ErrorKind::InvalidInput, err)
        })?,
        None => GameOptions::default(),
    };

    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), "starting game");

    let stdout = io::stdout();
    let theme = if args.no_color {
        Theme::plain()
    } else {
        Theme::detect(stdout.is_terminal())
    };

    let mut app = App::new(GameState::with_options(rng, options), theme).with_map(args.show_map);
    let result = app.run(io::stdin().lock(), stdout.lock())?;
    info!(?result, turns = app.game().state().turns, "session finished");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
