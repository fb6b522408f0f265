//! Conversions between concrete deals and starting-hand classes.

use rand::Rng;

use crate::training_engine::{
    catalog::HandCatalog,
    deck::Deck,
    error::{Result, TrainerError},
    models::{Card, Deal, HandClass, Sampling, Shape, Suit},
};

/// Rejection draws before falling back to a direct pick among the other
/// three suits. Either path picks uniformly.
const MAX_SUIT_DRAWS: usize = 8;

/// Map a deal to its class. Card order does not matter.
///
/// Fails with [`TrainerError::DuplicateCard`] if both cards are the same
/// physical card.
pub fn classify(deal: &Deal) -> Result<HandClass> {
    let [a, b] = deal.cards;
    if a == b {
        return Err(TrainerError::DuplicateCard(a));
    }
    let shape = if a.rank == b.rank {
        Shape::Pair
    } else if a.suit == b.suit {
        Shape::Suited
    } else {
        Shape::Offsuit
    };
    HandClass::new(a.rank, b.rank, shape)
        .ok_or_else(|| TrainerError::InvalidCard(deal.to_string()))
}

/// A concrete deal of `class`, higher card first, with random suits.
///
/// The result always classifies back to `class`.
pub fn instantiate<R: Rng>(class: HandClass, rng: &mut R) -> Deal {
    let (first, second) = match class.shape() {
        Shape::Suited => {
            let suit = random_suit(rng);
            (suit, suit)
        }
        Shape::Pair | Shape::Offsuit => two_distinct_suits(rng),
    };
    Deal::new(Card::new(class.high(), first), Card::new(class.low(), second))
}

/// Draw the next hand according to `sampling`.
pub fn random_deal<R: Rng>(
    catalog: &HandCatalog,
    sampling: Sampling,
    rng: &mut R,
) -> Result<(HandClass, Deal)> {
    match sampling {
        Sampling::Uniform => {
            let class = catalog.random_class(rng);
            Ok((class, instantiate(class, rng)))
        }
        Sampling::Combinatorial => {
            let deal = Deck::new_shuffled(rng).deal_hole_cards();
            Ok((classify(&deal)?, deal))
        }
    }
}

fn random_suit<R: Rng>(rng: &mut R) -> Suit {
    Suit::ALL[rng.gen_range(0..Suit::ALL.len())]
}

fn two_distinct_suits<R: Rng>(rng: &mut R) -> (Suit, Suit) {
    let first = random_suit(rng);
    for _ in 0..MAX_SUIT_DRAWS {
        let second = random_suit(rng);
        if second != first {
            return (first, second);
        }
    }
    let others: Vec<Suit> = Suit::ALL.into_iter().filter(|&s| s != first).collect();
    (first, others[rng.gen_range(0..others.len())])
}
