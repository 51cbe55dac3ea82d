use std::fmt;
use tracing::{debug, instrument};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;

/// What the active player gets to see about themselves before each move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub health: i32,
    pub mana: i32,
    pub hand: Vec<Card>,
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Health {}", self.health)?;
        writeln!(f, "Current Mana {}", self.mana)?;
        write!(f, "Current Hand")?;
        for card in &self.hand {
            write!(f, " {}", card)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Player {
    name: String,
    health: i32,
    mana: i32,
    hand: Hand,
    deck: Deck,
}

impl Player {
    pub fn new(name: impl Into<String>, health: i32, mana: i32, hand: Hand, deck: Deck) -> Self {
        Player {
            name: name.into(),
            health,
            mana,
            hand,
            deck,
        }
    }

    pub fn id(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    #[cfg(test)]
    pub fn mana(&self) -> i32 {
        self.mana
    }

    #[cfg(test)]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[cfg(test)]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// No floor: health happily goes negative, stopping only at `i32::MIN`.
    pub fn apply_damage(&mut self, damage: i32) {
        self.health = self.health.saturating_sub(damage);
        debug!(player = %self.name, damage, health = self.health, "damage applied");
    }

    /// Overwrites the pool; mana never carries over between turns.
    pub fn set_mana(&mut self, mana: i32) {
        self.mana = mana;
    }

    /// Moves one card from the deck into the hand. A full hand swallows the
    /// card, which still counts as a successful draw.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = self.deck.draw().ok_or(GameError::NoCardsInDeck)?;
        self.hand.add(card);
        debug!(%card, deck_left = self.deck.len(), "drew");
        Ok(card)
    }

    /// Plays the card at `index` and returns the damage it deals.
    ///
    /// The mana is spent before the card leaves the hand, so a failed removal
    /// leaves the mana spent.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn play_card(&mut self, index: i64) -> Result<i32, GameError> {
        let index = usize::try_from(index).map_err(|_| GameError::IndexOutOfRange {
            index,
            len: self.hand.len(),
        })?;
        let card = self.hand.get(index)?;
        if card.cost() > self.mana {
            return Err(GameError::NotEnoughMana {
                cost: card.cost(),
                available: self.mana,
            });
        }
        self.mana -= card.cost();
        self.hand.remove(index)?;
        debug!(%card, mana_left = self.mana, "played");
        Ok(card.cost())
    }

    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            health: self.health,
            mana: self.mana,
            hand: self.hand.show().to_vec(),
        }
    }
}
