use rand::Rng;

use crate::training_engine::models::{Card, Deal, Rank, Suit};

/// A 52-card deck dealt without replacement.
///
/// Used when hands should arrive with their real combinatorial frequency
/// (a pair is dealt half as often as a suited class of the same ranks).
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Build a fresh ordered deck and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::descending().map(move |rank| Card { rank, suit }))
            .collect();

        // Fisher-Yates shuffle
        for i in (1..cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            cards.swap(i, j);
        }

        Deck { cards, cursor: 0 }
    }

    /// Deal one card; panics if the deck is exhausted.
    pub fn deal(&mut self) -> Card {
        assert!(self.cursor < self.cards.len(), "Deck exhausted");
        let card = self.cards[self.cursor];
        self.cursor += 1;
        card
    }

    /// Two hole cards, always physically distinct.
    pub fn deal_hole_cards(&mut self) -> Deal {
        Deal::new(self.deal(), self.deal())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }
}
