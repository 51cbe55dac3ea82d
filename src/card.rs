use std::fmt;

/// A card is nothing but its value: the mana it costs and the damage it deals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(pub u8);

impl Card {
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The value widened for mana and health arithmetic.
    pub fn cost(&self) -> i32 {
        i32::from(self.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_matches_value() {
        assert_eq!(Card(8).cost(), 8);
        assert_eq!(Card(0).value(), 0);
    }

    #[test]
    fn display_wraps_value_in_brackets() {
        assert_eq!(Card(4).to_string(), "[4]");
    }
}
