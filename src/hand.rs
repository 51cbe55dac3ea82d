use crate::card::Card;
use crate::error::GameError;

pub const HAND_CAPACITY: usize = 5;

/// The cards a player may play. Holds at most [`HAND_CAPACITY`] cards;
/// anything drawn into a full hand is lost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    pub fn add(&mut self, card: Card) {
        if self.cards.len() < HAND_CAPACITY {
            self.cards.push(card);
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<Card, GameError> {
        self.check(index)?;
        Ok(self.cards.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<Card, GameError> {
        self.check(index)?;
        Ok(self.cards[index])
    }

    pub fn show(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn check(&self, index: usize) -> Result<(), GameError> {
        if index >= self.cards.len() {
            return Err(GameError::IndexOutOfRange {
                index: index as i64,
                len: self.cards.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hand_of(values: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &v in values {
            hand.add(Card(v));
        }
        hand
    }

    #[test]
    fn sixth_card_is_dropped() {
        let mut hand = hand_of(&[1, 2, 3, 4, 5]);
        hand.add(Card(6));
        assert_eq!(hand.len(), HAND_CAPACITY);
        assert_eq!(hand.show(), &[Card(1), Card(2), Card(3), Card(4), Card(5)]);
    }

    #[test]
    fn remove_keeps_order() {
        let mut hand = hand_of(&[4, 5, 6]);
        assert_eq!(hand.remove(1), Ok(Card(5)));
        assert_eq!(hand.show(), &[Card(4), Card(6)]);
    }

    #[test]
    fn get_does_not_mutate() {
        let hand = hand_of(&[9, 8]);
        assert_eq!(hand.get(1), Ok(Card(8)));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn bad_index_on_empty_hand() {
        let mut hand = Hand::new();
        let err = GameError::IndexOutOfRange { index: 0, len: 0 };
        assert_eq!(hand.get(0), Err(err.clone()));
        assert_eq!(hand.remove(0), Err(err));
    }

    proptest! {
        #[test]
        fn never_holds_more_than_capacity(values in prop::collection::vec(0u8..10, 0..20)) {
            let hand = hand_of(&values);
            prop_assert!(hand.len() <= HAND_CAPACITY);
            let kept = values.len().min(HAND_CAPACITY);
            let expected: Vec<Card> = values[..kept].iter().copied().map(Card).collect();
            prop_assert_eq!(hand.show(), expected.as_slice());
        }

        #[test]
        fn out_of_range_never_mutates(
            values in prop::collection::vec(0u8..10, 0..=5),
            extra in 0usize..10,
        ) {
            let mut hand = hand_of(&values);
            let before = hand.clone();
            let index = values.len() + extra;
            prop_assert!(hand.get(index).is_err());
            prop_assert!(hand.remove(index).is_err());
            prop_assert_eq!(hand, before);
        }
    }
}
