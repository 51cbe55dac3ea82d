use std::str::FromStr;

use crate::error::GameError;

/// Typing this ends the turn.
pub const END_TURN: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Raw hand index as typed; the hand decides whether it is in range.
    Play(i64),
    EndTurn,
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let number: i64 = input.trim().parse().map_err(|_| GameError::InvalidInput {
            input: input.trim().to_owned(),
        })?;
        if number == END_TURN {
            return Ok(Move::EndTurn);
        }
        Ok(Move::Play(number))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The active player ended the turn; roles swap.
    Continue,
    /// The passive player died.
    Won,
    /// The input source has nothing more to say.
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won { winner: String, loser: String },
    SetupFailed,
    Abandoned { turn: u32 },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            GameOutcome::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indices_and_end_turn() {
        assert_eq!("0".parse::<Move>(), Ok(Move::Play(0)));
        assert_eq!(" 4\r\n".parse::<Move>(), Ok(Move::Play(4)));
        assert_eq!("+2".parse::<Move>(), Ok(Move::Play(2)));
        assert_eq!("-1".parse::<Move>(), Ok(Move::EndTurn));
    }

    #[test]
    fn other_negatives_are_left_to_the_hand() {
        assert_eq!("-3".parse::<Move>(), Ok(Move::Play(-3)));
    }

    #[test]
    fn garbage_is_invalid_input() {
        for input in ["", "abc", "1.5", "one", "99999999999999999999"] {
            assert_eq!(
                input.parse::<Move>(),
                Err(GameError::InvalidInput { input: input.to_owned() })
            );
        }
    }
}
