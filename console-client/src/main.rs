mod config;
mod game_loop;
mod input;
mod timings;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::games::tictactoe::{FirstPlayerMode, TicTacToeGameState};
use common::{log, logger};

use config::{Config, get_config_manager};
use game_loop::{LoopOptions, run_game};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax AI")]
struct Args {
    /// Config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Who opens the game: ai, human or random
    #[arg(long)]
    first_player: Option<FirstPlayerMode>,

    #[arg(long)]
    no_timings: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(first_player) = self.first_player {
            config.first_player = first_player;
        }
        if self.no_timings {
            config.show_timings = false;
        }
        if self.verbose {
            config.verbose = true;
        }
        if self.use_log_prefix {
            config.use_log_prefix = true;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config_manager = get_config_manager(args.config.clone());

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        println!("Default config written");
        return Ok(());
    }

    let mut config = config_manager.get_config()?;
    args.apply_overrides(&mut config);

    let prefix = if config.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.verbose);

    let mut rng = rand::rng();
    let mut state = TicTacToeGameState::with_first_player(config.first_player, &mut rng);
    log!(
        "Starting game, first player mode {:?}, {} moves first",
        config.first_player,
        state.current_mark
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_game(
        &mut state,
        LoopOptions::from(&config),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;
    log!(
        "Session over: {:?}, AI {:?} total, player {:?} total",
        summary.outcome,
        summary.timings.ai_total,
        summary.timings.player_total
    );

    Ok(())
}
