//! Plain-text terminal front end: stdin for moves, stdout for everything else.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::events::{EventSink, GameEvent};
use crate::input::InputSource;

pub const PROMPT: &str = "Enter card index to play (-1 to end turn): ";

/// Asks the human at the keyboard for a move.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn next_line(&mut self) -> Option<String> {
        print!("{}", PROMPT);
        io::stdout().flush().ok();

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line);
        println!();
        match read {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                warn!(%err, "could not read from stdin");
                None
            }
        }
    }
}

/// Prints every event as a line (or three) of text.
pub struct ConsoleView;

impl ConsoleView {
    pub fn describe(event: &GameEvent) -> String {
        match event {
            GameEvent::GameStarted => "GAME START".to_owned(),
            GameEvent::TurnStarted { player, .. } => format!("{}'s turn!", player),
            GameEvent::BurnDamage { damage, .. } => format!(
                "You tried to draw with no cards in your deck! Applying {} burn damage",
                damage
            ),
            GameEvent::Status {
                active,
                active_health,
                passive,
                passive_health,
            } => format!(
                "{} health: {} {} health: {}",
                active, active_health, passive, passive_health
            ),
            GameEvent::Stats { stats, .. } => stats.to_string(),
            GameEvent::Rejected(err) => err.to_string(),
            GameEvent::CardPlayed {
                player,
                target,
                damage,
            } => format!("{} hits {} for {}", player, target, damage),
            GameEvent::PlayerDied { player } => format!("{} Is Dead!", player),
            GameEvent::Winner { player } => format!("{} WINS!", player),
            GameEvent::SetupFailed(err) => err.to_string(),
            GameEvent::GameOver => "GAME OVER".to_owned(),
        }
    }
}

impl EventSink for ConsoleView {
    fn emit(&mut self, event: GameEvent) {
        println!("{}", ConsoleView::describe(&event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::error::GameError;
    use crate::player::PlayerStats;

    #[test]
    fn status_line_names_both_players() {
        let event = GameEvent::Status {
            active: "player1".to_owned(),
            active_health: 30,
            passive: "player2".to_owned(),
            passive_health: 27,
        };
        assert_eq!(
            ConsoleView::describe(&event),
            "player1 health: 30 player2 health: 27"
        );
    }

    #[test]
    fn win_is_announced() {
        let died = GameEvent::PlayerDied {
            player: "player2".to_owned(),
        };
        let won = GameEvent::Winner {
            player: "player1".to_owned(),
        };
        assert_eq!(ConsoleView::describe(&died), "player2 Is Dead!");
        assert_eq!(ConsoleView::describe(&won), "player1 WINS!");
    }

    #[test]
    fn stats_and_errors_use_their_display() {
        let stats = GameEvent::Stats {
            player: "p".to_owned(),
            stats: PlayerStats {
                health: 5,
                mana: 1,
                hand: vec![Card(0)],
            },
        };
        assert_eq!(
            ConsoleView::describe(&stats),
            "Current Health 5\nCurrent Mana 1\nCurrent Hand [0]"
        );

        let setup = GameEvent::SetupFailed(GameError::SetupFailed {
            player: "p".to_owned(),
        });
        assert_eq!(
            ConsoleView::describe(&setup),
            "cannot start game with inadequate sized deck for p"
        );
    }
}
