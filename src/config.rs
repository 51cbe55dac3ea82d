use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::picker::RngPicker;
use crate::player::Player;

/// Both players start from their own copy of this pile.
pub const STARTING_DECK: [u8; 20] = [0, 0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5, 6, 6, 7, 8];

pub const STARTING_HEALTH: i32 = 30;

/// How a session is set up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub player_names: [String; 2],
    pub starting_health: i32,
    pub starting_mana: i32,
    pub deck: Vec<Card>,
    /// Fixes the draw order of both decks when set.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_names: ["player1".to_owned(), "player2".to_owned()],
            starting_health: STARTING_HEALTH,
            starting_mana: 0,
            deck: STARTING_DECK.iter().copied().map(Card).collect(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Builds both players with empty hands and full decks. Each deck gets
    /// its own picker, so the two draw orders are independent.
    pub fn build_players(&self) -> [Player; 2] {
        let mut seat = 0u64;
        self.player_names.clone().map(|name| {
            let picker = match self.seed {
                Some(seed) => RngPicker::seeded(seed.wrapping_add(seat)),
                None => RngPicker::from_os_rng(),
            };
            seat += 1;

            let mut deck = Deck::new(picker);
            for &card in &self.deck {
                deck.add(card);
            }
            Player::new(name, self.starting_health, self.starting_mana, Hand::new(), deck)
        })
    }
}
