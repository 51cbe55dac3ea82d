use derive_more::{Display, Error};

/// Everything that can go wrong while setting up or playing a duel.
///
/// Only [`GameError::SetupFailed`] ends a session. The rest are reported to
/// the active player, who is asked for another move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("no cards in deck")]
    NoCardsInDeck,

    #[display("illegal index {index}: hand holds {len} cards")]
    IndexOutOfRange { index: i64, len: usize },

    #[display("not enough mana: card costs {cost}, {available} available")]
    NotEnoughMana { cost: i32, available: i32 },

    #[display("invalid integer {input:?}")]
    InvalidInput { input: String },

    #[display("cannot start game with inadequate sized deck for {player}")]
    SetupFailed { player: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = GameError::NotEnoughMana { cost: 3, available: 0 };
        assert_eq!(err.to_string(), "not enough mana: card costs 3, 0 available");

        let err = GameError::IndexOutOfRange { index: -7, len: 2 };
        assert_eq!(err.to_string(), "illegal index -7: hand holds 2 cards");

        let err = GameError::InvalidInput { input: "x".to_owned() };
        assert_eq!(err.to_string(), "invalid integer \"x\"");
    }
}
