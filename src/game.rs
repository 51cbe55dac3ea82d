use tracing::{debug, info, instrument, warn};

use crate::enums::{GameOutcome, Move, TurnOutcome};
use crate::error::GameError;
use crate::events::{EventSink, GameEvent};
use crate::input::InputSource;
use crate::player::{Player, PlayerStats};

pub const MANA_CAP: i32 = 10;
pub const BURN_DAMAGE: i32 = 1;
pub const OPENING_DRAWS: usize = 3;

/// What the turn loop needs from a player.
pub trait Combatant {
    fn id(&self) -> &str;

    fn health(&self) -> i32;

    fn is_dead(&self) -> bool {
        self.health() <= 0
    }

    fn apply_damage(&mut self, damage: i32);

    fn set_mana(&mut self, mana: i32);

    fn draw(&mut self) -> Result<(), GameError>;

    fn play_card(&mut self, index: i64) -> Result<i32, GameError>;

    fn stats(&self) -> PlayerStats;
}

impl Combatant for Player {
    fn id(&self) -> &str {
        Player::id(self)
    }

    fn health(&self) -> i32 {
        Player::health(self)
    }

    fn is_dead(&self) -> bool {
        Player::is_dead(self)
    }

    fn apply_damage(&mut self, damage: i32) {
        Player::apply_damage(self, damage)
    }

    fn set_mana(&mut self, mana: i32) {
        Player::set_mana(self, mana)
    }

    fn draw(&mut self) -> Result<(), GameError> {
        Player::draw(self).map(|_| ())
    }

    fn play_card(&mut self, index: i64) -> Result<i32, GameError> {
        Player::play_card(self, index)
    }

    fn stats(&self) -> PlayerStats {
        Player::stats(self)
    }
}

/// One player-turn: `(turn, active, passive, input, events)`.
pub type TurnFn = fn(
    u32,
    &mut dyn Combatant,
    &mut dyn Combatant,
    &mut dyn InputSource,
    &mut dyn EventSink,
) -> TurnOutcome;

/// The counter advances once per player-turn, so each player only sees every
/// other value.
pub fn mana_for_turn(turn: u32) -> i32 {
    i32::try_from(turn).unwrap_or(i32::MAX).min(MANA_CAP)
}

/// The standard turn: refill mana, draw (or burn), then play cards until the
/// active player ends the turn or the opponent dies.
pub fn play_turn(
    turn: u32,
    active: &mut dyn Combatant,
    passive: &mut dyn Combatant,
    input: &mut dyn InputSource,
    events: &mut dyn EventSink,
) -> TurnOutcome {
    let mana = mana_for_turn(turn);
    events.emit(GameEvent::TurnStarted {
        player: active.id().to_owned(),
        turn,
        mana,
    });
    active.set_mana(mana);

    if let Err(err) = active.draw() {
        debug!(player = active.id(), %err, "burning");
        events.emit(GameEvent::BurnDamage {
            player: active.id().to_owned(),
            damage: BURN_DAMAGE,
        });
        active.apply_damage(BURN_DAMAGE);
    }

    loop {
        events.emit(GameEvent::Status {
            active: active.id().to_owned(),
            active_health: active.health(),
            passive: passive.id().to_owned(),
            passive_health: passive.health(),
        });
        events.emit(GameEvent::Stats {
            player: active.id().to_owned(),
            stats: active.stats(),
        });

        let Some(line) = input.next_line() else {
            warn!(player = active.id(), turn, "input closed mid-turn");
            return TurnOutcome::InputClosed;
        };

        let index = match line.parse::<Move>() {
            Ok(Move::EndTurn) => return TurnOutcome::Continue,
            Ok(Move::Play(index)) => index,
            Err(err) => {
                events.emit(GameEvent::Rejected(err));
                continue;
            }
        };

        let damage = match active.play_card(index) {
            Ok(damage) => damage,
            Err(err) => {
                events.emit(GameEvent::Rejected(err));
                continue;
            }
        };

        passive.apply_damage(damage);
        events.emit(GameEvent::CardPlayed {
            player: active.id().to_owned(),
            target: passive.id().to_owned(),
            damage,
        });

        if passive.is_dead() {
            events.emit(GameEvent::PlayerDied {
                player: passive.id().to_owned(),
            });
            events.emit(GameEvent::Winner {
                player: active.id().to_owned(),
            });
            return TurnOutcome::Won;
        }
    }
}

/// A duel between two players. Player one moves first.
pub struct Game<P> {
    players: [P; 2],
    player_to_move: usize,
    turn_counter: u32,
    turn: TurnFn,
}

impl<P: Combatant> Game<P> {
    pub fn new(player1: P, player2: P) -> Self {
        Game::with_turn(player1, player2, play_turn)
    }

    pub fn with_turn(player1: P, player2: P, turn: TurnFn) -> Self {
        Game {
            players: [player1, player2],
            player_to_move: 0,
            turn_counter: 0,
            turn,
        }
    }

    #[cfg(test)]
    pub fn players(&self) -> &[P; 2] {
        &self.players
    }

    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    /// `(active, passive)` for the turn about to be played, or just played if
    /// it ended the game.
    pub fn roles(&self) -> (&P, &P) {
        let [first, second] = &self.players;
        if self.player_to_move == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Interleaved opening draws: one, two, one, two...
    pub fn deal_opening_hands(&mut self) -> Result<(), GameError> {
        for _ in 0..OPENING_DRAWS {
            for player in &mut self.players {
                player.draw().map_err(|_| GameError::SetupFailed {
                    player: player.id().to_owned(),
                })?;
            }
        }
        Ok(())
    }

    /// Plays one turn. Roles swap unless the turn ended the session.
    pub fn advance(
        &mut self,
        input: &mut dyn InputSource,
        events: &mut dyn EventSink,
    ) -> TurnOutcome {
        self.turn_counter += 1;
        let [first, second] = &mut self.players;
        let (active, passive) = if self.player_to_move == 0 {
            (first, second)
        } else {
            (second, first)
        };
        let outcome = (self.turn)(self.turn_counter, active, passive, input, events);
        if outcome == TurnOutcome::Continue {
            self.player_to_move = 1 - self.player_to_move;
        }
        outcome
    }

    #[instrument(skip_all)]
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        events: &mut dyn EventSink,
    ) -> GameOutcome {
        events.emit(GameEvent::GameStarted);
        if let Err(err) = self.deal_opening_hands() {
            warn!(%err, "setup failed");
            events.emit(GameEvent::SetupFailed(err));
            return GameOutcome::SetupFailed;
        }

        let outcome = loop {
            match self.advance(input, events) {
                TurnOutcome::Continue => {}
                TurnOutcome::Won => {
                    let (winner, loser) = self.roles();
                    break GameOutcome::Won {
                        winner: winner.id().to_owned(),
                        loser: loser.id().to_owned(),
                    };
                }
                TurnOutcome::InputClosed => {
                    break GameOutcome::Abandoned {
                        turn: self.turn_counter,
                    };
                }
            }
        };

        info!(?outcome, turns = self.turn_counter, "game over");
        events.emit(GameEvent::GameOver);
        outcome
    }
}
