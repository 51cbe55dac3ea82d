use crate::card::Card;
use crate::picker::IndexPicker;
use std::fmt;

/// A player's draw pile. Draws come from a random position chosen by the
/// injected picker; the remaining cards keep their order.
pub struct Deck {
    cards: Vec<Card>,
    picker: Box<dyn IndexPicker>,
}

impl Deck {
    pub fn new(picker: impl IndexPicker + 'static) -> Self {
        Deck::with_cards(Vec::new(), picker)
    }

    pub fn with_cards(cards: Vec<Card>, picker: impl IndexPicker + 'static) -> Self {
        Deck {
            cards,
            picker: Box::new(picker),
        }
    }

    /// Removes and returns a random card, or `None` once the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        if self.is_empty() {
            return None;
        }
        // a misbehaving picker is folded back into range rather than panicking
        let index = self.picker.pick(self.cards.len()) % self.cards.len();
        Some(self.cards.remove(index))
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[cfg(test)]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck").field("cards", &self.cards).finish_non_exhaustive()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
