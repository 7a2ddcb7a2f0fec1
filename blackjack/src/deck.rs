//! A shuffled single-deck shoe.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Card, Suit};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A shuffled deck, drawn from the top until empty.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a full 52-card deck and shuffle it with the given generator.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut cards: Vec<Card> = Suit::ALL
            .iter()
            .flat_map(|&suit| (1..=13).map(move |rank| Card::new(suit, rank)))
            .collect();
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
