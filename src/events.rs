//! What the game tells the outside world while it runs.

use crate::error::GameError;
use crate::player::PlayerStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    TurnStarted { player: String, turn: u32, mana: i32 },
    /// The active player had nothing left to draw.
    BurnDamage { player: String, damage: i32 },
    Status {
        active: String,
        active_health: i32,
        passive: String,
        passive_health: i32,
    },
    Stats { player: String, stats: PlayerStats },
    /// A line of input or a play that did not go through.
    Rejected(GameError),
    CardPlayed { player: String, target: String, damage: i32 },
    PlayerDied { player: String },
    Winner { player: String },
    SetupFailed(GameError),
    GameOver,
}

pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Records everything; handy for replaying a session in tests.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}
