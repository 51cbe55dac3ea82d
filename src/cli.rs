//! Command-line interface.

use clap::Parser;

use crate::card::Card;
use crate::config::{GameConfig, STARTING_HEALTH};

/// Two-player mana duel played at the terminal
#[derive(Parser, Debug)]
#[command(name = "mana_duel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed for deck draws; omit for a fresh game every time
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting health of both players
    #[arg(
        long,
        default_value_t = STARTING_HEALTH,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    pub health: i32,

    /// Name of the player who moves first
    #[arg(long, default_value = "player1")]
    pub player_one: String,

    /// Name of the player who moves second
    #[arg(long, default_value = "player2")]
    pub player_two: String,

    /// Card values both decks start with, comma separated
    #[arg(long, value_delimiter = ',')]
    pub deck: Option<Vec<u8>>,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        let defaults = GameConfig::default();
        GameConfig {
            player_names: [cli.player_one, cli.player_two],
            starting_health: cli.health,
            deck: cli
                .deck
                .map(|values| values.into_iter().map(Card).collect())
                .unwrap_or(defaults.deck),
            seed: cli.seed,
            ..defaults
        }
    }
}
