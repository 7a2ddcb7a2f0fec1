//! Hand scoring and the fanned card layout.

use cardboard::glam::Vec3;
use cardboard::Transform;
use rand::Rng;

use crate::Card;

/// Horizontal step between cards fanned out from a hand's pivot.
pub const CARD_SPACING: f32 = 50.0;

/// An ordered pile of cards belonging to one seat.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Swap the card at `index` in place, e.g. turning over the dealer's
    /// hole card.  The layout is untouched; only additions re-arrange.
    pub fn replace_card(&mut self, index: usize, card: Card) {
        self.cards[index] = card;
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Sum of the card values; face-down cards contribute nothing, so this
    /// is also the "visible" total of a hand holding the dealer's hole
    /// card.  Aces always count 11 — there is no soft/hard re-valuation.
    pub fn value(&self) -> u32 {
        self.cards.iter().map(|c| c.value()).sum()
    }

    /// A natural: exactly two cards totalling 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }
}

/// Fan `count` cards out left-to-right from `pivot` at [`CARD_SPACING`]
/// steps, with a little positional and rotational jitter so the pile looks
/// hand-placed.  Purely cosmetic; callers re-run it for the whole hand on
/// every card addition.
pub fn arrange(pivot: Vec3, count: usize, rng: &mut impl Rng) -> Vec<Transform> {
    (0..count)
        .map(|i| {
            let dx = rng.gen_range(0..=10) as f32;
            let dy = rng.gen_range(0..=5) as f32;
            let degrees = rng.gen_range(0.0..0.5f32);
            Transform {
                pos: Vec3::new(
                    pivot.x + CARD_SPACING * i as f32 + dx,
                    pivot.y + dy,
                    pivot.z,
                ),
                rot: Vec3::new(0.0, 0.0, -degrees.to_radians()),
                scale: Vec3::ONE,
            }
        })
        .collect()
}
