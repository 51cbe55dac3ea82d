mod card;
mod cli;
mod config;
mod console;
mod deck;
mod enums;
mod error;
mod events;
mod game;
mod hand;
mod input;
mod picker;
mod player;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::GameConfig;
use crate::console::{ConsoleView, StdinInput};
use crate::game::Game;

fn main() {
    let cli = Cli::parse();

    // stdout belongs to the game; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from(cli);
    info!(?config, "starting session");

    let [player1, player2] = config.build_players();
    let mut game = Game::new(player1, player2);
    let outcome = game.run(&mut StdinInput, &mut ConsoleView);

    info!(winner = outcome.winner(), turns = game.turn_counter(), "session finished");
}
